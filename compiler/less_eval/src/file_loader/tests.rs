#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn memory_loader_serves_registered_files() {
    let loader = MemoryFileLoader::new();
    loader.insert("img/dot.png", vec![1u8, 2, 3]);
    assert_eq!(loader.load("img/dot.png").unwrap(), vec![1, 2, 3]);
    assert!(matches!(
        loader.load("missing.png"),
        Err(LoadError::NotFound { .. })
    ));
    loader.clear();
    assert!(loader.load("img/dot.png").is_err());
}

#[test]
fn denied_loader_refuses() {
    let err = FileLoaderImpl::Denied.load("a.png").unwrap_err();
    assert_eq!(err.to_string(), "file access denied: a.png");
}

#[test]
fn disk_loader_resolves_against_root() {
    let loader = DiskFileLoader::with_root("/styles");
    assert_eq!(loader.resolve("img/a.png"), PathBuf::from("/styles/img/a.png"));
    assert_eq!(loader.resolve("/abs/a.png"), PathBuf::from("/abs/a.png"));
    assert_eq!(DiskFileLoader::new().resolve("a.png"), PathBuf::from("a.png"));
}

#[test]
fn disk_loader_reads_files() {
    let dir = std::env::temp_dir().join(format!("less_eval_loader_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("a.txt"), b"hello").unwrap();

    let loader = FileLoaderImpl::Disk(DiskFileLoader::with_root(&dir));
    assert_eq!(loader.load("a.txt").unwrap(), b"hello".to_vec());
    assert!(matches!(
        loader.load("nope.txt"),
        Err(LoadError::NotFound { .. })
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn shared_constructors() {
    assert!(matches!(*disk_loader(), FileLoaderImpl::Disk(_)));
    let mem = memory_loader();
    if let FileLoaderImpl::Memory(m) = &*mem {
        m.insert("x", "y");
    }
    assert_eq!(mem.load("x").unwrap(), b"y".to_vec());
}
