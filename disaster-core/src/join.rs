//! Player entry: room-code lookup and team registration.
//!
//! Validation happens before any request is issued. Blank input never reaches
//! the backend.
use crate::api::{GameApi, HostInfo, JoinRequest};
use crate::nav::{RoomTicket, TeamTicket};
use thiserror::Error;

/// Errors surfaced inline on the join and team-name screens.
///
/// The `Display` text is exactly what the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("코드를 입력해주세요.")]
    EmptyCode,
    #[error("유효하지 않은 코드입니다. 다시 시도해주세요.")]
    InvalidCode,
    #[error("방 코드가 유효하지 않습니다.")]
    MissingRoomCode,
    #[error("팀 이름을 입력해주세요.")]
    EmptyTeamName,
    #[error("팀 이름이 이미 존재하거나 잘못된 요청입니다.")]
    JoinRejected,
}

/// Trim raw input, rejecting blank values.
fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Validate a room code typed by the player.
///
/// # Errors
///
/// Returns [`JoinError::EmptyCode`] for empty or whitespace-only input.
pub fn validate_room_code(raw: &str) -> Result<&str, JoinError> {
    non_blank(raw).ok_or(JoinError::EmptyCode)
}

/// Validate a team name and the room it should join.
///
/// # Errors
///
/// Returns [`JoinError::MissingRoomCode`] when no room code was carried over,
/// or [`JoinError::EmptyTeamName`] for a blank name.
pub fn validate_team_name<'a>(
    room_code: Option<&'a str>,
    raw: &'a str,
) -> Result<(&'a str, &'a str), JoinError> {
    let room_code = room_code
        .and_then(non_blank)
        .ok_or(JoinError::MissingRoomCode)?;
    let team = non_blank(raw).ok_or(JoinError::EmptyTeamName)?;
    Ok((room_code, team))
}

/// Look up the host of a room to confirm the code exists.
///
/// # Errors
///
/// Returns [`JoinError::EmptyCode`] without calling the backend for blank
/// input, or [`JoinError::InvalidCode`] for any request failure.
pub async fn lookup_room<A>(api: &A, raw_code: &str) -> Result<(RoomTicket, HostInfo), JoinError>
where
    A: GameApi + ?Sized,
{
    let code = validate_room_code(raw_code)?;
    match api.room_host(code).await {
        Ok(host) => {
            log::info!("Room found: {code} hosted by {}", host.host_nickname);
            Ok((
                RoomTicket {
                    room_code: code.to_string(),
                },
                host,
            ))
        }
        Err(err) => {
            log::error!("Failed to fetch room {code}: {err}");
            Err(JoinError::InvalidCode)
        }
    }
}

/// Register a team in a room.
///
/// # Errors
///
/// Returns a validation error without calling the backend, or
/// [`JoinError::JoinRejected`] for any request failure (duplicate names and
/// malformed requests are not distinguished).
pub async fn join_team<A>(
    api: &A,
    room_code: Option<&str>,
    raw_team: &str,
) -> Result<TeamTicket, JoinError>
where
    A: GameApi + ?Sized,
{
    let (code, team) = validate_team_name(room_code, raw_team)?;
    let request = JoinRequest {
        team_name: team.to_string(),
    };
    match api.join_room(code, &request).await {
        Ok(response) => {
            log::info!("Join response: {}", response.message);
            Ok(TeamTicket {
                room_code: code.to_string(),
                team_name: team.to_string(),
            })
        }
        Err(err) => {
            log::error!("Failed to join room {code}: {err}");
            Err(JoinError::JoinRejected)
        }
    }
}
