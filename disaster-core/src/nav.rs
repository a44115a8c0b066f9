//! Navigation payloads.
//!
//! These are the only values that cross from one screen to the next. Each
//! screen receives a copy when it is entered and never shares it back.
use crate::bag::{BagContents, BagSpec};
use crate::constants::{UNKNOWN_ROOM, UNKNOWN_TEAM};
use serde::{Deserialize, Serialize};

/// Created room as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostTicket {
    pub room_code: Option<String>,
    pub host_nickname: String,
}

/// A room code confirmed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTicket {
    pub room_code: String,
}

/// A team registered in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTicket {
    pub room_code: String,
    pub team_name: String,
}

/// Everything the bag-packing screen needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingTicket {
    pub room_code: String,
    pub team_name: String,
    pub selected_bag: BagSpec,
}

impl PackingTicket {
    /// Build the packing context, falling back to placeholders for anything
    /// the previous screen did not provide.
    #[must_use]
    pub fn resolve(team: Option<&TeamTicket>, selected_bag: Option<&BagSpec>) -> Self {
        Self {
            room_code: team.map_or_else(|| UNKNOWN_ROOM.to_string(), |t| t.room_code.clone()),
            team_name: team.map_or_else(|| UNKNOWN_TEAM.to_string(), |t| t.team_name.clone()),
            selected_bag: selected_bag.cloned().unwrap_or_default(),
        }
    }
}

impl From<TeamTicket> for PackingTicket {
    fn from(team: TeamTicket) -> Self {
        Self {
            room_code: team.room_code,
            team_name: team.team_name,
            selected_bag: BagSpec::default(),
        }
    }
}

/// Result of a successful bag submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTicket {
    pub room_code: String,
    pub team_name: String,
    pub selected_bag: BagSpec,
    pub bag_contents: BagContents,
}
