//! Filesystem backend: one file per key under a root directory.
//!
//! Keys are encoded into file names: ASCII letters, digits, `.`, `-` and `_`
//! are kept, every other byte becomes `%XX`. Each value is written to a
//! temporary sibling first and renamed into place, so readers never see a
//! half-written file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vais_core::Error as CoreError;

use crate::traits::KeyValueStore;
use crate::{Error, Result};

const EXTENSION: &str = "json";

/// A `KeyValueStore` persisted as files in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| CoreError::io_with_path(e, &root))?;
        tracing::debug!(root = %root.display(), "file store opened");
        Ok(Self { root })
    }

    /// Directory holding the value files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root.join(format!("{}.{EXTENSION}", encode_key(key)?)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::io_with_path(e, &path).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));
        fs::write(&tmp, value).map_err(|e| CoreError::io_with_path(e, &tmp))?;
        fs::rename(&tmp, &path).map_err(|e| CoreError::io_with_path(e, &path))?;
        tracing::debug!(key, bytes = value.len(), "value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CoreError::io_with_path(e, &path).into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| CoreError::io_with_path(e, &self.root))?;
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CoreError::io_with_path(e, &self.root))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(stem) = name.strip_suffix(&format!(".{EXTENSION}")) else {
                continue;
            };
            if let Some(key) = decode_key(stem) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn encode_key(key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(Error::InvalidKey {
            key: key.to_string(),
        });
    }
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => out.push(byte as char),
            // A leading dot would hide the file; encode it like any other byte.
            b'.' if !out.is_empty() => out.push('.'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    Ok(out)
}

fn decode_key(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = stem.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("state")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_directory() {
        let (_dir, store) = store();
        assert!(store.root().is_dir());
    }

    #[test]
    fn test_roundtrip_value() {
        let (_dir, store) = store();
        store.set("vais.onboarding", r#"{"role":"marketer"}"#).unwrap();
        assert_eq!(
            store.get("vais.onboarding").unwrap().as_deref(),
            Some(r#"{"role":"marketer"}"#)
        );
        assert!(store.path_for("vais.onboarding").unwrap().exists());
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.get("nothing").unwrap(), None);
        assert!(!store.remove("nothing").unwrap());
    }

    #[test]
    fn test_remove_deletes_file() {
        let (_dir, store) = store();
        store.set("valasys-mastery-dismissed", "true").unwrap();
        assert!(store.remove("valasys-mastery-dismissed").unwrap());
        assert!(!store.path_for("valasys-mastery-dismissed").unwrap().exists());
    }

    #[test]
    fn test_keys_decoded_and_sorted() {
        let (_dir, store) = store();
        store.set("trialUsage", "{}").unwrap();
        store.set("vais.mastery", "{}").unwrap();
        store.set("odd/key with space", "1").unwrap();
        assert_eq!(
            store.keys().unwrap(),
            vec!["odd/key with space", "trialUsage", "vais.mastery"]
        );
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let (_dir, store) = store();
        store.set("k", "v").unwrap();
        let names: Vec<_> = fs::read_dir(store.root())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["k.json"]);
    }

    #[test]
    fn test_empty_key_rejected() {
        let (_dir, store) = store();
        assert!(matches!(store.set("", "x"), Err(Error::InvalidKey { .. })));
    }

    #[test]
    fn test_encode_key_escapes_separators() {
        assert_eq!(encode_key("a/b").unwrap(), "a%2Fb");
        assert_eq!(encode_key("..").unwrap(), "%2E.");
        assert_eq!(encode_key("vais.mastery").unwrap(), "vais.mastery");
    }

    #[test]
    fn test_decode_key_inverts_encode() {
        for key in ["vais.onboarding.skip-reminder", "x y%z", ".hidden", "ünïcode"] {
            let encoded = encode_key(key).unwrap();
            assert_eq!(decode_key(&encoded).as_deref(), Some(key));
        }
    }

    #[test]
    fn test_decode_key_rejects_truncated_escape() {
        assert_eq!(decode_key("abc%2"), None);
    }
}
