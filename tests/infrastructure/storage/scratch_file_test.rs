use bytes::Bytes;

use asr_gateway::application::ports::{ScratchHandle, ScratchStore};
use asr_gateway::infrastructure::storage::{
    SCRATCH_PREFIX, SCRATCH_SUFFIX, ScratchFile, TempScratchStore,
};

use crate::helpers::scratch_entries;

#[test]
fn given_bytes_when_writing_then_file_holds_them_with_wav_suffix() {
    let dir = tempfile::TempDir::new().unwrap();

    let file = ScratchFile::write(dir.path(), b"RIFF....WAVE").unwrap();

    let name = file.path().file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with(SCRATCH_PREFIX));
    assert!(name.ends_with(SCRATCH_SUFFIX));
    assert_eq!(std::fs::read(file.path()).unwrap(), b"RIFF....WAVE");
}

#[test]
fn given_scratch_file_when_dropped_then_file_is_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = ScratchFile::write(dir.path(), b"data").unwrap();
    let path = file.path().to_path_buf();

    drop(file);

    assert!(!path.exists());
}

#[test]
fn given_scratch_file_when_closed_then_file_is_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let file: Box<dyn ScratchHandle> = Box::new(ScratchFile::write(dir.path(), b"data").unwrap());
    let path = file.path().to_path_buf();

    file.close().unwrap();

    assert!(!path.exists());
}

#[test]
fn given_two_writes_when_persisting_then_names_are_unique() {
    let dir = tempfile::TempDir::new().unwrap();

    let a = ScratchFile::write(dir.path(), b"a").unwrap();
    let b = ScratchFile::write(dir.path(), b"b").unwrap();

    assert_ne!(a.path(), b.path());
    assert_eq!(scratch_entries(dir.path()).len(), 2);
}

#[test]
fn given_missing_directory_when_writing_then_returns_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = ScratchFile::write(&dir.path().join("missing"), b"data");
    assert!(result.is_err());
}

#[test]
fn given_nested_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let store = TempScratchStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.dir(), nested.as_path());
}

#[tokio::test]
async fn given_store_when_persisting_then_handle_owns_file_until_dropped() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = TempScratchStore::new(dir.path().to_path_buf()).unwrap();

    let handle = store.persist(Bytes::from_static(b"audio")).await.unwrap();
    assert_eq!(std::fs::read(handle.path()).unwrap(), b"audio");
    assert_eq!(scratch_entries(dir.path()).len(), 1);

    drop(handle);
    assert!(scratch_entries(dir.path()).is_empty());
}
