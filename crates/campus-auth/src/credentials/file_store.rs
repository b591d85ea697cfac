//! Line-oriented credential file storage.
//!
//! Format: one `principal:secret` entry per line, colon-delimited. The
//! file is rewritten wholesale on every save.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;

use campus_core::error::AppError;
use campus_core::result::AppResult;

use super::CredentialStore;

/// [`CredentialStore`] backed by a plain text file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> AppResult<BTreeMap<String, String>> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read credentials file {}: {e}",
                    self.path.display()
                )));
            }
        };

        let mut mapping = BTreeMap::new();
        for line in text.lines() {
            if let Some((user, secret)) = line.split_once(':') {
                mapping.insert(user.trim().to_string(), secret.trim().to_string());
            }
        }
        Ok(mapping)
    }

    async fn save(&self, mapping: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::storage(format!(
                        "Failed to create credentials directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let contents = mapping
            .iter()
            .map(|(user, secret)| format!("{user}:{secret}"))
            .collect::<Vec<_>>()
            .join("\n");

        tokio::fs::write(&self.path, contents).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to write credentials file {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("campus-creds-{name}-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let store = FileCredentialStore::new(temp_path("missing"));
        assert!(!store.exists().await);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn roundtrips_line_format() {
        let path = temp_path("roundtrip");
        let store = FileCredentialStore::new(&path);

        let mut mapping = BTreeMap::new();
        mapping.insert("AAI701".to_string(), "12345678".to_string());
        mapping.insert("superuser".to_string(), "qwerty".to_string());
        store.save(&mapping).await.unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(text, "AAI701:12345678\nsuperuser:qwerty");

        assert_eq!(store.load().await.unwrap(), mapping);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn save_overwrites_prior_contents() {
        let path = temp_path("overwrite");
        let store = FileCredentialStore::new(&path);

        let mut first = BTreeMap::new();
        first.insert("AAI701".to_string(), "11111111".to_string());
        first.insert("AAI702".to_string(), "22222222".to_string());
        store.save(&first).await.unwrap();

        let mut second = BTreeMap::new();
        second.insert("AAI701".to_string(), "11111111".to_string());
        store.save(&second).await.unwrap();

        assert_eq!(store.load().await.unwrap(), second);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn tolerates_malformed_lines() {
        let path = temp_path("malformed");
        tokio::fs::write(&path, "AAI701:123\nnot-a-credential\n:\n")
            .await
            .unwrap();

        let store = FileCredentialStore::new(&path);
        let mapping = store.load().await.unwrap();
        assert_eq!(mapping.get("AAI701").map(String::as_str), Some("123"));
        assert!(!mapping.contains_key("not-a-credential"));
        tokio::fs::remove_file(&path).await.unwrap();
    }
}
