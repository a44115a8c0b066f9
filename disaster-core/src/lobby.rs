//! Team lobby: the list of other teams in the room.
use crate::api::GameApi;

/// Team names to show, without the player's own team.
#[must_use]
pub fn visible_teams(teams: Vec<String>, own_team: Option<&str>) -> Vec<String> {
    match own_team {
        Some(own) => teams.into_iter().filter(|team| team != own).collect(),
        None => teams,
    }
}

/// Fetch the current team list.
///
/// Returns `None` when the request fails; the caller keeps whatever it showed
/// last and tries again on the next tick.
pub async fn refresh_teams<A>(
    api: &A,
    room_code: &str,
    own_team: Option<&str>,
) -> Option<Vec<String>>
where
    A: GameApi + ?Sized,
{
    match api.teams(room_code).await {
        Ok(list) => Some(visible_teams(list.teams, own_team)),
        Err(err) => {
            log::error!("Failed to fetch team names for {room_code}: {err}");
            None
        }
    }
}
