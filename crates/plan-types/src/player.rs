use serde::{Deserialize, Serialize};

/// Rows shown in the players table when no limit is requested.
pub const DEFAULT_PLAYER_LIMIT: usize = 2500;

/// Activity index at or above which a player counts as very active.
pub const VERY_ACTIVE: f64 = 3.75;
pub const ACTIVE: f64 = 3.0;
pub const REGULAR: f64 = 2.0;
pub const IRREGULAR: f64 = 1.0;

/// One row of a server's players table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TablePlayer {
    pub uuid: String,
    pub name: String,
    pub registered_ms: i64,
    /// End of the latest session on this server, `None` without sessions.
    pub last_seen_ms: Option<i64>,
    pub session_count: u32,
    /// Session length minus AFK time, summed over all sessions.
    pub active_playtime_ms: i64,
    pub geolocation: Option<String>,
    /// 0.0 (inactive) to 5.0 (very active).
    pub activity_index: f64,
    pub banned: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityGroup {
    VeryActive,
    Active,
    Regular,
    Irregular,
    Inactive,
}

impl ActivityGroup {
    pub fn of(index: f64) -> Self {
        if index >= VERY_ACTIVE {
            ActivityGroup::VeryActive
        } else if index >= ACTIVE {
            ActivityGroup::Active
        } else if index >= REGULAR {
            ActivityGroup::Regular
        } else if index >= IRREGULAR {
            ActivityGroup::Irregular
        } else {
            ActivityGroup::Inactive
        }
    }

    /// Label key of the group.
    pub fn label_key(self) -> &'static str {
        match self {
            ActivityGroup::VeryActive => "html.label.veryActive",
            ActivityGroup::Active => "html.label.active",
            ActivityGroup::Regular => "html.label.regular",
            ActivityGroup::Irregular => "html.label.irregular",
            ActivityGroup::Inactive => "html.label.inactive",
        }
    }
}

impl TablePlayer {
    pub fn activity_group(&self) -> ActivityGroup {
        ActivityGroup::of(self.activity_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_thresholds() {
        assert_eq!(ActivityGroup::of(4.2), ActivityGroup::VeryActive);
        assert_eq!(ActivityGroup::of(3.75), ActivityGroup::VeryActive);
        assert_eq!(ActivityGroup::of(3.0), ActivityGroup::Active);
        assert_eq!(ActivityGroup::of(2.5), ActivityGroup::Regular);
        assert_eq!(ActivityGroup::of(1.0), ActivityGroup::Irregular);
        assert_eq!(ActivityGroup::of(0.0), ActivityGroup::Inactive);
    }
}
