//! Backend REST contract.
//!
//! Request/response bodies, endpoint paths and the [`GameApi`] seam that
//! front-ends implement over their HTTP client of choice.
use crate::bag::BagSubmission;
use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Every backend route the client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    CreateRoom,
    RoomHost { code: &'a str },
    Join { code: &'a str },
    Teams { code: &'a str },
    JoinConfirmed { code: &'a str },
    GameInfoConfirmed { code: &'a str },
    SubmitBag { code: &'a str, team: &'a str },
}

impl Endpoint<'_> {
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::CreateRoom | Self::Join { .. } | Self::SubmitBag { .. } => Method::Post,
            Self::RoomHost { .. }
            | Self::Teams { .. }
            | Self::JoinConfirmed { .. }
            | Self::GameInfoConfirmed { .. } => Method::Get,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::CreateRoom => "/host/create_room".to_string(),
            Self::RoomHost { code } => format!("/player/room/{}/host", segment(code)),
            Self::Join { code } => format!("/player/room/{}/join", segment(code)),
            Self::Teams { code } => format!("/player/room/{}/teams", segment(code)),
            Self::JoinConfirmed { code } => {
                format!("/player/room/{}/join_confirmed", segment(code))
            }
            Self::GameInfoConfirmed { code } => {
                format!("/player/room/{}/game_info_confirmed", segment(code))
            }
            Self::SubmitBag { code, team } => format!(
                "/player/room/{}/team/{}/submit_bag",
                segment(code),
                segment(team)
            ),
        }
    }

    /// Absolute URL against `base` (a trailing slash on `base` is ignored).
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub host_nickname: String,
    pub selected_pre_info: Option<u8>,
    pub selected_disaster: Option<u8>,
}

/// Create-room response. The body is not part of the contract, so it is kept
/// as raw JSON and only probed for a room code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCreated(pub Value);

impl RoomCreated {
    #[must_use]
    pub fn room_code(&self) -> Option<&str> {
        ["room_code", "code"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_str))
            .or_else(|| {
                self.0
                    .get("room")
                    .and_then(|room| room.get("code"))
                    .and_then(Value::as_str)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub room_code: String,
    pub host_nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JoinResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub room_code: String,
    #[serde(default)]
    pub player_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamList {
    #[serde(default)]
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseReport {
    #[serde(default)]
    pub message: String,
    pub current_phase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Backend operations used by the client screens.
///
/// Futures are not required to be `Send`; the browser implementation awaits
/// `JsFuture`s.
#[async_trait(?Send)]
pub trait GameApi {
    async fn create_room(&self, request: &CreateRoomRequest) -> Result<RoomCreated, ApiError>;

    async fn room_host(&self, code: &str) -> Result<HostInfo, ApiError>;

    async fn join_room(&self, code: &str, request: &JoinRequest)
    -> Result<JoinResponse, ApiError>;

    async fn teams(&self, code: &str) -> Result<TeamList, ApiError>;

    async fn join_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError>;

    async fn game_info_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError>;

    async fn submit_bag(
        &self,
        code: &str,
        team: &str,
        submission: &BagSubmission,
    ) -> Result<SubmitResponse, ApiError>;
}
