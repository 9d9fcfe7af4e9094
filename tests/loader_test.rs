//! Tests for DefinitionLoader, message decoding and Session

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use morsetree::application::{
    decode_message, standard_definitions_text, ApplicationError, DefinitionLoader, Session,
};
use morsetree::domain::DomainError;
use morsetree::infrastructure::{FileSystem, RealFileSystem};

/// In-memory filesystem keyed by path
#[derive(Default)]
struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    fn with_file(path: &str, content: &str) -> Self {
        let fs = Self::default();
        fs.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        fs
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Helper to create a definition file on disk
fn create_definition_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write definition file");
    path
}

// ============================================================
// DefinitionLoader
// ============================================================

#[test]
fn given_definition_file_when_loading_then_tree_decodes_message() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_definition_file(&temp, "default.morse", &standard_definitions_text());
    let loader = DefinitionLoader::new(Arc::new(RealFileSystem));

    // Act
    let tree = loader.load(&path).unwrap();

    // Assert
    assert_eq!(decode_message(&tree, "... --- ...").unwrap(), "sos");
}

#[test]
fn given_out_of_order_file_when_loading_then_all_codes_decode() {
    let fs = MemoryFileSystem::with_file("extended.morse", "i..\nr.-.\ne.\nt-\nn-.\n");
    let loader = DefinitionLoader::new(Arc::new(fs));

    let tree = loader.load(Path::new("extended.morse")).unwrap();

    assert_eq!(decode_message(&tree, ".. -. - . .-.").unwrap(), "inter");
}

#[test]
fn given_missing_file_when_loading_then_file_not_found() {
    let loader = DefinitionLoader::new(Arc::new(MemoryFileSystem::default()));
    let err = loader.load(Path::new("absent.morse")).unwrap_err();
    assert!(matches!(err, ApplicationError::FileNotFound(p) if p == Path::new("absent.morse")));
}

#[test]
fn given_duplicate_code_in_file_when_loading_then_whole_load_fails() {
    let fs = MemoryFileSystem::with_file("dup.morse", "e.\nt-\ni..\nx..\n");
    let loader = DefinitionLoader::new(Arc::new(fs));

    let err = loader.load(Path::new("dup.morse")).unwrap_err();

    match err {
        ApplicationError::Definition { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(
                source,
                DomainError::DuplicateBinding {
                    code: "..".into(),
                    existing: 'i',
                    rejected: 'x'
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_malformed_symbol_in_file_when_loading_then_fails_with_line() {
    let fs = MemoryFileSystem::with_file("bad.morse", "e.\nt_\n");
    let loader = DefinitionLoader::new(Arc::new(fs));
    let err = loader.load(Path::new("bad.morse")).unwrap_err();
    assert!(matches!(err, ApplicationError::Definition { line: 2, .. }));
    assert!(err.to_string().starts_with("line 2:"));
}

// ============================================================
// Session
// ============================================================

#[test]
fn given_session_when_loading_then_remembers_file() {
    let fs = MemoryFileSystem::with_file("a.morse", "e.\nt-\n");
    let mut session = Session::new(DefinitionLoader::new(Arc::new(fs)));
    assert!(!session.is_loaded());

    let count = session.load(Path::new("a.morse")).unwrap();

    assert_eq!(count, 2);
    assert!(session.is_loaded());
    assert_eq!(session.loaded_file(), Some(Path::new("a.morse")));
    assert_eq!(session.decode(". -").unwrap(), "et");
}

#[test]
fn given_loaded_session_when_loading_bad_file_then_keeps_previous_tree() {
    let fs = MemoryFileSystem::with_file("good.morse", "e.\nt-\n");
    fs.write(Path::new("bad.morse"), "a.-\nb.-\n").unwrap();
    let mut session = Session::new(DefinitionLoader::new(Arc::new(fs)));
    session.load(Path::new("good.morse")).unwrap();

    assert!(session.load(Path::new("bad.morse")).is_err());

    assert_eq!(session.loaded_file(), Some(Path::new("good.morse")));
    assert_eq!(session.decode("-").unwrap(), "t");
    assert!(session.decode(".-").is_err());
}

#[test]
fn given_session_when_switching_files_then_old_bindings_are_gone() {
    let fs = MemoryFileSystem::with_file("one.morse", "e.\n");
    fs.write(Path::new("two.morse"), "t-\n").unwrap();
    let mut session = Session::new(DefinitionLoader::new(Arc::new(fs)));

    session.load(Path::new("one.morse")).unwrap();
    session.load(Path::new("two.morse")).unwrap();

    assert!(session.decode(".").is_err());
    assert_eq!(session.decode("-").unwrap(), "t");
    assert!(session.render().contains("- t"));
}

#[test]
fn given_message_with_one_bad_token_when_decoding_then_no_partial_output() {
    let fs = MemoryFileSystem::with_file("a.morse", &standard_definitions_text());
    let mut session = Session::new(DefinitionLoader::new(Arc::new(fs)));
    session.load(Path::new("a.morse")).unwrap();

    let err = session.decode(".... . .-.. .-.. ---x").unwrap_err();

    assert!(matches!(err, ApplicationError::Token { index: 4, .. }));
}
