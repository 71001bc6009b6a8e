// ABOUTME: Loads cat profile JSON documents from files or standard input
// ABOUTME: Maps IO and parse failures onto AppError codes for CLI reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile document input
//!
//! A profile document is a JSON object with camelCase keys, or `null` for
//! "no profile". Blank input is treated as `null`.

use crate::errors::{AppError, AppResult, ErrorCode};
use feline_core::models::CatProfile;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Path value that selects standard input
pub const STDIN_MARKER: &str = "-";

/// Where a profile document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(String),
}

impl ProfileSource {
    /// Interpret a `--profile` argument; absent or `-` means stdin
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(STDIN_MARKER) => Self::Stdin,
            Some(path) => Self::File(path.to_owned()),
        }
    }
}

/// Parse a profile document, returning `None` for `null` or blank input
///
/// # Errors
///
/// Returns `INVALID_FORMAT` if the text is not a valid profile document
pub fn parse_profile_document(document: &[u8]) -> AppResult<Option<CatProfile>> {
    if document.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice(document)?)
}

/// Read and parse a profile document from its source
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` for a missing file, `INTERNAL_ERROR` for other
/// read failures, and `INVALID_FORMAT` for malformed documents
pub async fn load_profile(source: &ProfileSource) -> AppResult<Option<CatProfile>> {
    let text = match source {
        ProfileSource::Stdin => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .map_err(|e| AppError::internal("Failed to read standard input").with_source(e))?;
            buffer
        }
        ProfileSource::File(path) => read_file(Path::new(path)).await?,
    };

    debug!(bytes = text.len(), "Profile document read");
    parse_profile_document(text.as_bytes()).map_err(|e| match source {
        ProfileSource::File(path) => e.with_resource_id(path.clone()),
        ProfileSource::Stdin => e,
    })
}

async fn read_file(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        let code = if e.kind() == std::io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::InternalError
        };
        AppError::new(
            code,
            format!("Cannot read profile file {}: {e}", path.display()),
        )
        .with_resource_id(path.display().to_string())
        .with_source(e)
    })
}
