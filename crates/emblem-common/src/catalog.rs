//! Role catalog files.
//!
//! A catalog is the full list of roles a server publishes. JSON catalogs are
//! a bare array of roles; TOML catalogs use a `[[roles]]` table array.

use std::path::Path;

use serde::Deserialize;

use crate::error::{EmblemError, EmblemResult};
use crate::models::GameServerRole;

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    roles: Vec<GameServerRole>,
}

/// Parse a JSON catalog (`[{ "int_id": 1, "id": "vip", ... }, ...]`).
pub fn parse_catalog_json(raw: &str) -> EmblemResult<Vec<GameServerRole>> {
    Ok(serde_json::from_str(raw)?)
}

/// Parse a TOML catalog made of `[[roles]]` entries.
pub fn parse_catalog_toml(raw: &str) -> EmblemResult<Vec<GameServerRole>> {
    let catalog: TomlCatalog = toml::from_str(raw)?;
    Ok(catalog.roles)
}

/// Load a catalog file, picking the format from its extension.
pub fn load_catalog(path: impl AsRef<Path>) -> EmblemResult<Vec<GameServerRole>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let roles = match extension.as_str() {
        "json" => parse_catalog_json(&std::fs::read_to_string(path)?)?,
        "toml" => parse_catalog_toml(&std::fs::read_to_string(path)?)?,
        _ => return Err(EmblemError::UnsupportedFormat { extension }),
    };

    tracing::debug!(path = %path.display(), count = roles.len(), "loaded role catalog");
    Ok(roles)
}
