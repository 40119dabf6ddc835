//! Media storage and asset resolution.
//!
//! Inline image payloads arrive base64 encoded. Uploaded assets are
//! written below a public directory and addressed by URL; accounts
//! without an upload get a deterministic default URL derived from the
//! image kind and the account name. The same default may be shared by
//! accounts with the same name.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::config::Config;
use crate::domain::ImageKind;
use crate::errors::{AppError, AppResult};

/// Storage backend for uploaded media assets.
///
/// `store` persists the bytes under `file_name` and returns the public
/// URL of the stored asset.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> AppResult<String>;
}

/// Filesystem-backed media store serving assets from a public directory.
pub struct FsMediaStore {
    root: PathBuf,
    base_url: String,
}

impl FsMediaStore {
    pub fn new(config: &Config) -> Self {
        Self {
            root: PathBuf::from(&config.media_root),
            base_url: config.media_base_url.clone(),
        }
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> AppResult<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::internal(format!("Media directory unavailable: {}", e)))?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::internal(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(format!("{}/{}", self.base_url, file_name))
    }
}

/// Resolves one image kind per registration to a stored or default URL.
pub struct MediaResolver {
    store: Arc<dyn MediaStore>,
    base_url: String,
}

impl MediaResolver {
    pub fn new(store: Arc<dyn MediaStore>, config: &Config) -> Self {
        Self {
            store,
            base_url: config.media_base_url.clone(),
        }
    }

    /// Resolve an image kind for an account.
    ///
    /// With an inline payload the decoded bytes are stored and the stored
    /// URL returned; decode or storage failure aborts with a media-upload
    /// error so the caller never persists a half-registered account.
    /// Without a payload the deterministic default URL is returned and
    /// nothing is stored.
    pub async fn resolve(
        &self,
        kind: ImageKind,
        inline: Option<&str>,
        account_name: &str,
    ) -> AppResult<String> {
        match inline {
            Some(payload) => {
                let bytes = decode_image(payload).ok_or_else(|| {
                    tracing::warn!(kind = %kind, "Inline image payload is not valid base64");
                    AppError::MediaUpload(kind)
                })?;
                let file_name =
                    format!("{}-{}-{}.png", kind.as_str(), slug(account_name), Uuid::new_v4());
                self.store
                    .store(&file_name, &bytes)
                    .await
                    .map_err(|e| {
                        tracing::error!(kind = %kind, error = %e, "Media upload failed");
                        AppError::MediaUpload(kind)
                    })
            }
            None => Ok(self.default_url(kind, account_name)),
        }
    }

    /// Deterministic default asset URL for a kind and account name.
    pub fn default_url(&self, kind: ImageKind, account_name: &str) -> String {
        format!("{}/defaults/{}-{}.png", self.base_url, kind.as_str(), slug(account_name))
    }
}

/// Decode a base64 image payload, tolerating a `data:` URI prefix.
fn decode_image(payload: &str) -> Option<Vec<u8>> {
    let encoded = match payload.split_once("base64,") {
        Some((_, rest)) => rest,
        None => payload,
    };
    BASE64.decode(encoded.trim()).ok()
}

/// Reduce an account name to a url-safe slug.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
