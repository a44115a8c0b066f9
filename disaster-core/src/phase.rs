//! Room phases and the polling gates that wait for them.
use crate::api::{GameApi, PhaseReport};
use std::fmt;

pub const PHASE_GAME_INFO: &str = "game_info";
pub const PHASE_BAG_SELECTION: &str = "bag_selection";

/// Server-tracked stage of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomPhase {
    GameInfo,
    BagSelection,
    Other(String),
}

impl From<&str> for RoomPhase {
    fn from(raw: &str) -> Self {
        match raw {
            PHASE_GAME_INFO => Self::GameInfo,
            PHASE_BAG_SELECTION => Self::BagSelection,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RoomPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameInfo => f.write_str(PHASE_GAME_INFO),
            Self::BagSelection => f.write_str(PHASE_BAG_SELECTION),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// What a screen should do after one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Stay,
    Advance,
}

/// A phase check polled by a waiting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseGate {
    /// Lobby: waits for the host to confirm the teams.
    JoinConfirmed,
    /// Waiting room: waits for the host to finish the briefing.
    GameInfoConfirmed,
}

impl PhaseGate {
    #[must_use]
    pub const fn awaited(self) -> &'static str {
        match self {
            Self::JoinConfirmed => PHASE_GAME_INFO,
            Self::GameInfoConfirmed => PHASE_BAG_SELECTION,
        }
    }

    #[must_use]
    pub fn decide(self, report: &PhaseReport) -> PollOutcome {
        if RoomPhase::from(report.current_phase.as_str()) == RoomPhase::from(self.awaited()) {
            PollOutcome::Advance
        } else {
            PollOutcome::Stay
        }
    }

    /// Poll once. Request failures are logged and treated as [`PollOutcome::Stay`]
    /// so the next tick tries again.
    pub async fn poll<A>(self, api: &A, room_code: &str) -> PollOutcome
    where
        A: GameApi + ?Sized,
    {
        let report = match self {
            Self::JoinConfirmed => api.join_confirmed(room_code).await,
            Self::GameInfoConfirmed => api.game_info_confirmed(room_code).await,
        };
        match report {
            Ok(report) => {
                let outcome = self.decide(&report);
                log::debug!(
                    "{self:?} for {room_code}: phase {} -> {outcome:?}",
                    report.current_phase
                );
                outcome
            }
            Err(err) => {
                log::error!("Error checking {self:?} for {room_code}: {err}");
                PollOutcome::Stay
            }
        }
    }
}
