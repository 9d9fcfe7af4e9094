use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{CodeFault, DomainError, DomainResult};
use crate::domain::symbol::{Code, Symbol};

/// Vertex of the morse tree.
///
/// Payload and children are independent: a node may carry a character and
/// still be a prefix of longer codes.
#[derive(Debug, Default)]
pub struct MorseNode {
    /// Character bound to the code ending here, None for plain prefixes
    pub payload: Option<char>,
    /// Branch A, followed on `-`
    dash: Option<Index>,
    /// Branch B, followed on `.`
    dot: Option<Index>,
}

impl MorseNode {
    pub fn child(&self, symbol: Symbol) -> Option<Index> {
        match symbol {
            Symbol::Dash => self.dash,
            Symbol::Dot => self.dot,
        }
    }

    fn set_child(&mut self, symbol: Symbol, idx: Index) {
        match symbol {
            Symbol::Dash => self.dash = Some(idx),
            Symbol::Dot => self.dot = Some(idx),
        }
    }
}

/// Binary lookup tree for morse codes.
///
/// All nodes live in one generational arena owned by the tree; the root is
/// created on construction and on `clear`, and is never bound to a character.
#[derive(Debug)]
pub struct MorseTree {
    arena: Arena<MorseNode>,
    root: Index,
}

impl Default for MorseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MorseTree {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(MorseNode::default());
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&MorseNode> {
        self.arena.get(idx)
    }

    fn node(&self, idx: Index) -> &MorseNode {
        &self.arena[idx]
    }

    fn node_mut(&mut self, idx: Index) -> &mut MorseNode {
        &mut self.arena[idx]
    }

    /// Bind `character` to the dash/dot `code`.
    ///
    /// Missing nodes along the path are created without payload, so codes can
    /// arrive in any order. Binding a second, different character to the same
    /// code is rejected and leaves the first binding in place; repeating the
    /// same binding is accepted.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, character: char, code: &str) -> DomainResult<()> {
        let code = Code::parse(code)?;
        self.insert_code(character, &code)
    }

    /// Bind `character` to an already validated code.
    #[instrument(level = "trace", skip(self, code), fields(code = %code, len = code.len()))]
    pub fn insert_code(&mut self, character: char, code: &Code) -> DomainResult<()> {
        let mut current = self.root;
        for &symbol in code.symbols() {
            current = match self.node(current).child(symbol) {
                Some(next) => next,
                None => {
                    let next = self.arena.insert(MorseNode::default());
                    self.node_mut(current).set_child(symbol, next);
                    next
                }
            };
        }

        let node = self.node_mut(current);
        match node.payload {
            Some(existing) if existing != character => {
                debug!("rejecting '{}' for {}: bound to '{}'", character, code, existing);
                Err(DomainError::DuplicateBinding {
                    code: code.to_string(),
                    existing,
                    rejected: character,
                })
            }
            Some(_) => Ok(()),
            None => {
                node.payload = Some(character);
                Ok(())
            }
        }
    }

    /// Decode a single token of dashes and dots.
    ///
    /// Fails as soon as a symbol is outside the alphabet or a needed branch is
    /// missing, and also when the path exists but carries no character.
    #[instrument(level = "trace", skip(self))]
    pub fn decode(&self, code: &str) -> DomainResult<char> {
        let mut current = self.root;
        for (position, c) in code.chars().enumerate() {
            let symbol = Symbol::from_char(c).ok_or_else(|| {
                DomainError::invalid(
                    code,
                    CodeFault::InvalidSymbol {
                        symbol: c,
                        position,
                    },
                )
            })?;
            current = self
                .node(current)
                .child(symbol)
                .ok_or_else(|| DomainError::invalid(code, CodeFault::DeadPath { depth: position }))?;
        }
        self.node(current)
            .payload
            .ok_or_else(|| DomainError::invalid(code, CodeFault::Unassigned))
    }

    /// Character bound to `code`, if any.
    pub fn lookup(&self, code: &Code) -> Option<char> {
        let mut current = self.root;
        for &symbol in code.symbols() {
            current = self.node(current).child(symbol)?;
        }
        self.node(current).payload
    }

    /// Drop every binding and start over from a single empty root.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.insert(MorseNode::default());
    }

    /// Number of bound codes.
    pub fn len(&self) -> usize {
        self.arena
            .iter()
            .filter(|(_, node)| node.payload.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Length of the longest path from the root, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        let node = self.node(node_idx);
        [Symbol::Dash, Symbol::Dot]
            .iter()
            .filter_map(|&symbol| node.child(symbol))
            .map(|child| 1 + self.calculate_depth(child))
            .max()
            .unwrap_or(0)
    }

    /// Pre-order walk over all bindings, dash branch before dot branch.
    pub fn bindings(&self) -> Bindings<'_> {
        Bindings::new(self)
    }
}

pub struct Bindings<'a> {
    tree: &'a MorseTree,
    stack: Vec<(Index, Vec<Symbol>)>,
}

impl<'a> Bindings<'a> {
    fn new(tree: &'a MorseTree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root, Vec::new())],
        }
    }
}

impl Iterator for Bindings<'_> {
    type Item = (Code, char);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, path)) = self.stack.pop() {
            let node = self.tree.node(current_idx);
            // Push dot first so dash is visited first
            for symbol in [Symbol::Dot, Symbol::Dash] {
                if let Some(child) = node.child(symbol) {
                    let mut child_path = path.clone();
                    child_path.push(symbol);
                    self.stack.push((child, child_path));
                }
            }
            if let Some(c) = node.payload {
                return Some((Code::from_symbols(path), c));
            }
        }
        None
    }
}
