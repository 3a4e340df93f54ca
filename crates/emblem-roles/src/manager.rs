//! Role manager — owns the role catalog and merges a player's roles into
//! one cosmetic profile.

use emblem_common::color::{RichColor, parse_hex_color};
use emblem_common::models::{ComputedRole, GameServerRole};

/// The catalog of roles known to this client.
///
/// One instance per session; hand it by reference to whatever renders
/// player names and badges.
#[derive(Debug, Clone, Default)]
pub struct RoleManager {
    all_roles: Vec<GameServerRole>,
}

impl RoleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roles(roles: Vec<GameServerRole>) -> Self {
        Self { all_roles: roles }
    }

    /// Replace the catalog, taking ownership of `roles`.
    ///
    /// Order is kept and duplicate int ids are not rejected.
    pub fn set_all_roles(&mut self, roles: Vec<GameServerRole>) {
        tracing::debug!(count = roles.len(), "replacing role catalog");
        self.all_roles = roles;
    }

    /// Replace the catalog with a copy of `roles`.
    pub fn set_all_roles_from(&mut self, roles: &[GameServerRole]) {
        self.set_all_roles(roles.to_vec());
    }

    pub fn clear_all_roles(&mut self) {
        self.all_roles.clear();
    }

    pub fn all_roles(&self) -> &[GameServerRole] {
        &self.all_roles
    }

    /// Direct access to the catalog for in-place edits.
    ///
    /// No invariants are re-checked afterwards.
    pub fn all_roles_mut(&mut self) -> &mut Vec<GameServerRole> {
        &mut self.all_roles
    }

    /// An owned copy of the catalog.
    pub fn snapshot(&self) -> Vec<GameServerRole> {
        self.all_roles.clone()
    }

    pub fn len(&self) -> usize {
        self.all_roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_roles.is_empty()
    }

    /// First role with the given int id.
    pub fn find_role(&self, int_id: u8) -> Option<&GameServerRole> {
        self.all_roles.iter().find(|r| r.int_id == int_id)
    }

    /// First role with the given string id.
    pub fn find_by_id(&self, id: &str) -> Option<&GameServerRole> {
        self.all_roles.iter().find(|r| r.role.id == id)
    }

    /// Merge the cosmetics of every role in `role_ids` into one profile.
    ///
    /// Roles are visited in input order. A role sets an attribute when it
    /// defines one and either outranks everything seen so far (strictly) or
    /// the attribute is still unset. A color that fails to parse is stored
    /// as unset, so a higher-ranked role with a broken color clears the
    /// value a lower-ranked role supplied. Unknown ids are skipped.
    /// Permissions are never merged.
    pub fn compute(&self, role_ids: &[u8]) -> ComputedRole {
        let mut computed = ComputedRole::default();

        for &role_id in role_ids {
            let Some(entry) = self.find_role(role_id) else {
                continue;
            };
            let role = &entry.role;

            let is_higher = computed.priority.is_none_or(|p| role.priority > p);

            if !role.badge_icon.is_empty() && (is_higher || computed.badge_icon.is_none()) {
                computed.badge_icon = Some(role.badge_icon.clone());
            }

            if !role.name_color.is_empty() && (is_higher || computed.name_color.is_none()) {
                let color = RichColor::parse(&role.name_color);
                if let Err(e) = &color {
                    tracing::warn!(role = %role.id, "failed to parse color: {e}");
                }

                computed.name_color = color.ok();
            }

            // chat color failures are not logged
            if !role.chat_color.is_empty() && (is_higher || computed.chat_color.is_none()) {
                computed.chat_color = parse_hex_color(&role.chat_color).ok();
            }

            if is_higher {
                computed.priority = Some(role.priority);
            }
        }

        computed
    }
}
