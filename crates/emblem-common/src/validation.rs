//! Input validation utilities.
//!
//! Catalogs are accepted as-is by the resolver; these helpers exist so tools
//! can report problems before a catalog is shipped.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use validator::Validate;

use crate::color::{RichColor, parse_hex_color};
use crate::error::EmblemError;
use crate::models::{GameServerRole, ServerRole};

/// Validate a role definition, returning an EmblemError::Validation on failure.
pub fn validate_role(role: &ServerRole) -> Result<(), EmblemError> {
    role.validate().map_err(|e| EmblemError::Validation {
        message: format_validation_errors(e),
    })
}

/// Format validation errors into a human-readable string.
fn format_validation_errors(errors: validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for '{field}'"))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// A problem found in a role catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// Only the first role with this int id is ever matched.
    DuplicateIntId { int_id: u8, index: usize },
    DuplicateId { id: String, index: usize },
    InvalidField { index: usize, message: String },
    InvalidNameColor { index: usize, message: String },
    InvalidChatColor { index: usize, message: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateIntId { int_id, index } => {
                write!(f, "role #{index}: int id {int_id} is already used by an earlier role")
            }
            Self::DuplicateId { id, index } => {
                write!(f, "role #{index}: id '{id}' is already used by an earlier role")
            }
            Self::InvalidField { index, message } => write!(f, "role #{index}: {message}"),
            Self::InvalidNameColor { index, message } => {
                write!(f, "role #{index}: bad name color: {message}")
            }
            Self::InvalidChatColor { index, message } => {
                write!(f, "role #{index}: bad chat color: {message}")
            }
        }
    }
}

/// Lint a whole catalog. Issues are reported in catalog order.
pub fn validate_catalog(roles: &[GameServerRole]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen_int_ids = HashMap::new();
    let mut seen_ids = HashMap::new();

    for (index, entry) in roles.iter().enumerate() {
        if seen_int_ids.insert(entry.int_id, index).is_some() {
            issues.push(CatalogIssue::DuplicateIntId {
                int_id: entry.int_id,
                index,
            });
        }

        if seen_ids.insert(entry.role.id.as_str(), index).is_some() {
            issues.push(CatalogIssue::DuplicateId {
                id: entry.role.id.clone(),
                index,
            });
        }

        if let Err(EmblemError::Validation { message }) = validate_role(&entry.role) {
            issues.push(CatalogIssue::InvalidField { index, message });
        }

        if !entry.name_color().is_empty() {
            if let Err(e) = RichColor::parse(entry.name_color()) {
                issues.push(CatalogIssue::InvalidNameColor {
                    index,
                    message: e.to_string(),
                });
            }
        }

        if !entry.chat_color().is_empty() {
            if let Err(e) = parse_hex_color(entry.chat_color()) {
                issues.push(CatalogIssue::InvalidChatColor {
                    index,
                    message: e.to_string(),
                });
            }
        }
    }

    issues
}
