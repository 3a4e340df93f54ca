//! Role permission flags.
//!
//! Roles published by a server carry a permission set. Clients keep it for
//! display (e.g. showing moderator tools) but never merge permissions when
//! computing a cosmetic profile; the server is the authority on those.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Moderation permissions granted by a role.
    ///
    /// Each permission is a single bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct RolePermissions: u32 {
        /// Send notices to a single player
        const NOTICE                = 1 << 0;
        /// Send notices to every connected player
        const NOTICE_EVERYONE       = 1 << 1;
        /// Kick a single player
        const KICK                  = 1 << 2;
        /// Kick every connected player
        const KICK_EVERYONE         = 1 << 3;
        /// Mute players in chat and voice
        const MUTE                  = 1 << 4;
        /// Ban players
        const BAN                   = 1 << 5;
        /// Assign and remove roles below your own
        const EDIT_ROLE             = 1 << 6;
        /// Change the featured level list
        const EDIT_FEATURED_LEVELS  = 1 << 7;

        // === Meta ===
        /// Administrator (all permissions)
        const ADMIN                 = 1 << 31;
    }
}

impl RolePermissions {
    /// Check if administrator (overrides all other checks).
    pub fn is_admin(&self) -> bool {
        self.contains(Self::ADMIN)
    }

    /// Check if a holder of these permissions can perform an action.
    pub fn has(&self, required: RolePermissions) -> bool {
        self.is_admin() || self.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_implies_everything() {
        let admin = RolePermissions::ADMIN;
        assert!(admin.has(RolePermissions::BAN | RolePermissions::EDIT_ROLE));

        let moderator = RolePermissions::KICK | RolePermissions::MUTE;
        assert!(moderator.has(RolePermissions::MUTE));
        assert!(!moderator.has(RolePermissions::BAN));
    }

    #[test]
    fn serializes_as_flag_names() {
        let perms = RolePermissions::KICK | RolePermissions::MUTE;
        let json = serde_json::to_string(&perms).unwrap();
        assert_eq!(json, "\"KICK | MUTE\"");

        let back: RolePermissions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, perms);
    }
}
