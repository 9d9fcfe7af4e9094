/*
Display helpers for MorseTree, built on termtree so the box-drawing layout
matches every other tree the CLI prints.
 */
use std::fmt;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::symbol::Symbol;
use crate::domain::tree::MorseTree;

pub const ROOT_LABEL: &str = "root";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(symbol: Symbol, payload: Option<char>) -> String {
    match payload {
        Some(c) => format!("{} {}", symbol, c),
        None => symbol.to_string(),
    }
}

impl TreeNodeConvert for MorseTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(tree: &MorseTree, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = tree.get_node(node_idx) {
                for symbol in [Symbol::Dash, Symbol::Dot] {
                    if let Some(child_idx) = node.child(symbol) {
                        if let Some(child) = tree.get_node(child_idx) {
                            let mut child_tree = Tree::new(label(symbol, child.payload));
                            build_tree(tree, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }
        }

        let mut root = Tree::new(ROOT_LABEL.to_string());
        build_tree(self, self.root(), &mut root);
        root
    }
}

impl MorseTree {
    /// Multi-line box-drawing view of the tree, pre-order with the dash
    /// branch above the dot branch.
    pub fn render(&self) -> String {
        self.to_tree_string().to_string()
    }
}

impl fmt::Display for MorseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
