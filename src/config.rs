//! Built-in game list and collection policy.

/// Game ids collected by a bare invocation, in processing order.
///
/// Duplicated ids are tolerated downstream: their runs are collected and
/// exported twice, never deduplicated.
pub const DEFAULT_GAME_IDS: &[&str] = &[
    "j1npme6p", // Minecraft: Java Edition
    "3698my8d", // Roblox: DOORS
    "76rkv4d8", // Celeste
    "y65r7g81", // Portal
    "9d3rrxyd", // Hollow Knight
    "76r55vd8", // Super Mario Odyssey
    "pd0wq31e", // Super Mario 64
    "w6jmm26j", // Cuphead
    "n4d7jzd7", // Skyrim
    "nd28z0ed", // Elden Ring
    "369p3p81", // ULTRAKILL
    "4pd0n31e", // Portal
    "pd0wx9w1", // Getting Over It With Bennett Foddy
    "76rqmld8", // Hollow Knight
    "76rqjqd8", // The Legend of Zelda: Breath of the Wild
    "3698my8d", // Roblox: DOORS
    "76r43l18", // Outlast
    "w6j7vpx6", // Poppy Playtime: Chapter 1
    "m1zjmz60", // Resident Evil 2
    "o1y9okr6", // Hades
    "3dxy5vv6", // Hades 2
    "o6gnpox1", // Pizza Tower
];

/// The built-in game list as owned strings.
pub fn default_game_ids() -> Vec<String> {
    DEFAULT_GAME_IDS.iter().map(|id| id.to_string()).collect()
}

/// Heuristic for spotting guest names submitted without a registered account.
///
/// Registered speedrun.com user ids are 8-character opaque strings; guest
/// entries carry the display name directly in the id slot. An id shorter
/// than `max_len` containing none of `marker_chars` is treated as a guest
/// name and never sent to the user-lookup endpoint.
#[derive(Debug, Clone)]
pub struct GuestNamePolicy {
    pub marker_chars: &'static [char],
    pub max_len: usize,
}

impl Default for GuestNamePolicy {
    fn default() -> Self {
        Self {
            marker_chars: &['x', 'j'],
            max_len: 8,
        }
    }
}

impl GuestNamePolicy {
    pub fn is_guest_name(&self, player_id: &str) -> bool {
        player_id.chars().count() < self.max_len && !player_id.contains(self.marker_chars)
    }
}
