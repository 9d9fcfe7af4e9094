//! Interactive session state
//!
//! Owns the active tree and remembers which definition file it came from.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::application::loader::DefinitionLoader;
use crate::application::message::decode_message;
use crate::application::ApplicationResult;
use crate::domain::MorseTree;

pub struct Session {
    loader: DefinitionLoader,
    tree: MorseTree,
    loaded: Option<PathBuf>,
}

impl Session {
    pub fn new(loader: DefinitionLoader) -> Self {
        Self {
            loader,
            tree: MorseTree::new(),
            loaded: None,
        }
    }

    /// Start from an already built tree that did not come from a file.
    pub fn with_tree(loader: DefinitionLoader, tree: MorseTree) -> Self {
        Self {
            loader,
            tree,
            loaded: None,
        }
    }

    /// Switch to the definitions in `path`.
    ///
    /// A failed load keeps the current tree and file.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self, path: &Path) -> ApplicationResult<usize> {
        match self.loader.load(path) {
            Ok(tree) => {
                let count = tree.len();
                self.tree = tree;
                self.loaded = Some(path.to_path_buf());
                info!("session now using {}", path.display());
                Ok(count)
            }
            Err(e) => {
                warn!("keeping previous tree, load failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn decode(&self, message: &str) -> ApplicationResult<String> {
        decode_message(&self.tree, message)
    }

    pub fn render(&self) -> String {
        self.tree.render()
    }

    pub fn tree(&self) -> &MorseTree {
        &self.tree
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn loaded_file(&self) -> Option<&Path> {
        self.loaded.as_deref()
    }
}
