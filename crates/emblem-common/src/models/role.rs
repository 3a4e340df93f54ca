//! Role model — cosmetic roles published by a game server.
//!
//! A role grants a badge, a name color and a chat color. Players can hold
//! several roles at once; the resolver merges them into a [`ComputedRole`]
//! by priority.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::color::{Color3B, RichColor};
use crate::permissions::RolePermissions;

/// A role as the server describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ServerRole {
    /// Stable string key, e.g. "moderator"
    #[validate(length(min = 1, max = 32, message = "Role id must be 1-32 characters"))]
    pub id: String,

    /// Higher wins when several roles set the same cosmetic
    pub priority: i32,

    /// Badge sprite identifier; empty means no badge
    #[serde(default)]
    #[validate(length(max = 64, message = "Badge icon must be at most 64 characters"))]
    pub badge_icon: String,

    /// Rich color spec (see [`RichColor`]); empty means no name color
    #[serde(default)]
    pub name_color: String,

    /// Hex color spec; empty means no chat color
    #[serde(default)]
    pub chat_color: String,

    /// Moderation permissions. Never merged client-side.
    #[serde(default)]
    pub permissions: RolePermissions,
}

/// A role paired with the small integer id players reference it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GameServerRole {
    pub int_id: u8,

    #[serde(flatten)]
    #[validate(nested)]
    pub role: ServerRole,
}

impl GameServerRole {
    pub fn new(int_id: u8, role: ServerRole) -> Self {
        Self { int_id, role }
    }

    pub fn priority(&self) -> i32 {
        self.role.priority
    }

    pub fn badge_icon(&self) -> &str {
        &self.role.badge_icon
    }

    pub fn name_color(&self) -> &str {
        &self.role.name_color
    }

    pub fn chat_color(&self) -> &str {
        &self.role.chat_color
    }
}

/// The merged cosmetic profile for one player.
///
/// Produced fresh by every resolver call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedRole {
    /// Highest priority seen so far; `None` until a known role is processed
    pub priority: Option<i32>,
    pub badge_icon: Option<String>,
    pub name_color: Option<RichColor>,
    pub chat_color: Option<Color3B>,
}

impl ComputedRole {
    /// Priority with `i32::MIN` standing in for "no role contributed".
    pub fn priority_or_min(&self) -> i32 {
        self.priority.unwrap_or(i32::MIN)
    }

    /// True when no cosmetic attribute is set.
    pub fn is_empty(&self) -> bool {
        self.badge_icon.is_none() && self.name_color.is_none() && self.chat_color.is_none()
    }
}
