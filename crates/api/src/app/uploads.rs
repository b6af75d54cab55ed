//! Upload directory storage.
//!
//! Every accepted file is written under the configured directory with a fresh
//! time-ordered id prefix, so concurrent uploads sharing a filename never
//! overwrite each other. Calculations read the in-memory bytes, not the file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

/// Identifier of a stored upload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UploadId(Uuid);

impl UploadId {
    /// Uses UUIDv7, so ids sort by upload time.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UploadId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A file written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUpload {
    pub id: UploadId,
    pub original_name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub size_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open (creating if needed) the upload directory.
    pub async fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<StoredUpload> {
        let id = UploadId::new();
        let path = self.dir.join(format!("{id}-{}", sanitize_filename(original_name)));

        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(upload_id = %id, path = %path.display(), size_bytes = bytes.len(), "upload stored");

        Ok(StoredUpload {
            id,
            original_name: original_name.to_string(),
            path,
            size_bytes: bytes.len(),
        })
    }
}

const FALLBACK_NAME: &str = "upload.csv";
const MAX_NAME_LEN: usize = 100;

/// Reduce a client-supplied filename to a safe single path component.
///
/// Keeps only the last `/`- or `\`-separated segment and replaces anything
/// outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        return FALLBACK_NAME.to_string();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(sanitize_filename("inventory_2024-01.csv"), "inventory_2024-01.csv");
    }

    #[test]
    fn strips_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\wages.csv"), "wages.csv");
        assert_eq!(sanitize_filename("site plan (v2).csv"), "site_plan__v2_.csv");
    }

    #[test]
    fn empty_or_dot_names_fall_back() {
        assert_eq!(sanitize_filename(""), "upload.csv");
        assert_eq!(sanitize_filename(".."), "upload.csv");
        assert_eq!(sanitize_filename("dir/"), "upload.csv");
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "a".repeat(500);
        assert_eq!(sanitize_filename(&long).len(), 100);
    }

    #[tokio::test]
    async fn saved_uploads_get_distinct_paths() {
        let dir = std::env::temp_dir().join(format!("siteledger-uploads-{}", Uuid::now_v7()));
        let store = UploadStore::open(&dir).await.unwrap();

        let a = store.save("stock.csv", b"a").await.unwrap();
        let b = store.save("stock.csv", b"bb").await.unwrap();

        assert_ne!(a.path, b.path);
        assert!(a.path.starts_with(store.dir()));
        assert_eq!(tokio::fs::read(&b.path).await.unwrap(), b"bb");
        assert_eq!(b.size_bytes, 2);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
