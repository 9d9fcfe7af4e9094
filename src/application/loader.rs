//! Definition file loading
//!
//! A definition file has one binding per line: the first character is the
//! decoded character, the rest of the line is its dash/dot code. Blank lines
//! are skipped. The first bad line aborts the whole load.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::MorseTree;
use crate::infrastructure::traits::FileSystem;

/// One parsed definition line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// 1-based line number in the source text
    pub line: usize,
    pub character: char,
    pub code: String,
}

/// Split definition text into per-line bindings without validating codes.
pub fn parse_definitions(text: &str) -> Vec<Definition> {
    text.lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let mut chars = raw.chars();
            chars.next().map(|character| Definition {
                line: i + 1,
                character,
                code: chars.as_str().to_string(),
            })
        })
        .collect()
}

/// Build a fresh tree from definition text.
#[instrument(level = "debug", skip(text))]
pub fn build_tree(text: &str) -> ApplicationResult<MorseTree> {
    let mut tree = MorseTree::new();
    for def in parse_definitions(text) {
        tree.insert(def.character, &def.code)
            .map_err(|source| ApplicationError::Definition {
                line: def.line,
                source,
            })?;
    }
    debug!("built tree with {} bindings", tree.len());
    Ok(tree)
}

/// Replace `tree` with the bindings in `text`.
///
/// On failure `tree` is left untouched; there is no partially loaded state.
pub fn load_definitions(tree: &mut MorseTree, text: &str) -> ApplicationResult<usize> {
    let fresh = build_tree(text)?;
    let count = fresh.len();
    *tree = fresh;
    Ok(count)
}

/// Standard ITU letters and digits, plus `..--` for the space character.
pub const STANDARD_DEFINITIONS: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', "..--"),
];

/// The standard table rendered in definition file format.
pub fn standard_definitions_text() -> String {
    STANDARD_DEFINITIONS
        .iter()
        .map(|(c, code)| format!("{}{}\n", c, code))
        .collect()
}

pub fn standard_tree() -> ApplicationResult<MorseTree> {
    let mut tree = MorseTree::new();
    for &(character, code) in STANDARD_DEFINITIONS {
        tree.insert(character, code)?;
    }
    Ok(tree)
}

/// Loads definition files through the filesystem seam.
pub struct DefinitionLoader {
    fs: Arc<dyn FileSystem>,
}

impl DefinitionLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    /// Read and build the tree described by the file at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<MorseTree> {
        let text = self
            .fs
            .read_to_string(path)
            .with_path_context("read definitions", path)?;
        let tree = build_tree(&text)?;
        info!("loaded {} bindings from {}", tree.len(), path.display());
        Ok(tree)
    }
}
