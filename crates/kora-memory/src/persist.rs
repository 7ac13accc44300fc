// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-document JSON persistence.

use std::io::ErrorKind;
use std::path::Path;

use kora_core::KoraError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Read a JSON document, falling back to `T::default()` when the file is
/// missing or cannot be decoded.
pub async fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no document yet, starting empty");
            return T::default();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read document, starting empty");
            return T::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt document, starting empty");
            T::default()
        }
    }
}

/// Rewrite a JSON document in full.
///
/// Writes to a sibling temp file first and renames it over the target, so a
/// crash mid-write leaves the previous document intact.
pub async fn save<T>(path: &Path, doc: &T) -> Result<(), KoraError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec_pretty(doc).map_err(KoraError::storage)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(KoraError::storage)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json)
        .await
        .map_err(KoraError::storage)?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(KoraError::storage)?;
    Ok(())
}

/// [`save`], logging instead of returning the error.
pub async fn save_logged<T>(path: &Path, doc: &T)
where
    T: Serialize + ?Sized,
{
    if let Err(e) = save(path, doc).await {
        warn!(path = %path.display(), error = %e, "failed to persist document");
    }
}
