//! Host room setup.
use crate::api::{ApiError, CreateRoomRequest, GameApi};
use crate::constants::SETUP_OPTION_COUNT;
use crate::nav::HostTicket;

/// The two single-choice grids on the room-build screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupGrid {
    PreInfo,
    Disaster,
}

/// Host input collected before a room is created.
///
/// The room title doubles as the host nickname. Either selection may be left
/// empty; it is then sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomSetup {
    pub title: String,
    pub pre_info: Option<u8>,
    pub disaster: Option<u8>,
}

impl RoomSetup {
    /// Select `index` in `grid`. Indices outside the grid are ignored.
    pub fn select(&mut self, grid: SetupGrid, index: u8) {
        if index >= SETUP_OPTION_COUNT {
            log::warn!("Ignoring {grid:?} selection {index}");
            return;
        }
        match grid {
            SetupGrid::PreInfo => self.pre_info = Some(index),
            SetupGrid::Disaster => self.disaster = Some(index),
        }
    }

    #[must_use]
    pub const fn selected(&self, grid: SetupGrid) -> Option<u8> {
        match grid {
            SetupGrid::PreInfo => self.pre_info,
            SetupGrid::Disaster => self.disaster,
        }
    }

    #[must_use]
    pub fn to_request(&self) -> CreateRoomRequest {
        CreateRoomRequest {
            host_nickname: self.title.clone(),
            selected_pre_info: self.pre_info,
            selected_disaster: self.disaster,
        }
    }
}

/// Create the room described by `setup`.
///
/// # Errors
///
/// Returns the underlying [`ApiError`]. Callers log it; the host sees no
/// error and stays on the setup screen.
pub async fn create_room<A>(api: &A, setup: &RoomSetup) -> Result<HostTicket, ApiError>
where
    A: GameApi + ?Sized,
{
    let request = setup.to_request();
    match api.create_room(&request).await {
        Ok(created) => {
            log::info!("Room created successfully: {}", created.0);
            Ok(HostTicket {
                room_code: created.room_code().map(str::to_string),
                host_nickname: request.host_nickname,
            })
        }
        Err(err) => {
            log::error!("Failed to create room: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::RecordingApi;
    use futures::executor::block_on;

    #[test]
    fn selections_stay_inside_the_grid() {
        let mut setup = RoomSetup::default();
        setup.select(SetupGrid::PreInfo, 7);
        setup.select(SetupGrid::Disaster, 8);
        assert_eq!(setup.selected(SetupGrid::PreInfo), Some(7));
        assert_eq!(setup.selected(SetupGrid::Disaster), None);

        setup.select(SetupGrid::PreInfo, 2);
        assert_eq!(setup.pre_info, Some(2));
    }

    #[test]
    fn request_uses_title_as_nickname() {
        let setup = RoomSetup {
            title: "우리방".into(),
            pre_info: None,
            disaster: Some(4),
        };
        let request = setup.to_request();
        assert_eq!(request.host_nickname, "우리방");
        assert_eq!(request.selected_pre_info, None);
        assert_eq!(request.selected_disaster, Some(4));
    }

    #[test]
    fn created_room_yields_host_ticket() {
        let api = RecordingApi::default();
        let setup = RoomSetup {
            title: "host".into(),
            ..RoomSetup::default()
        };
        let ticket = block_on(create_room(&api, &setup)).expect("created");
        assert_eq!(ticket.room_code.as_deref(), Some("ABC123"));
        assert_eq!(ticket.host_nickname, "host");
        assert_eq!(api.calls.borrow().as_slice(), ["/host/create_room"]);
    }

    #[test]
    fn create_failure_is_returned() {
        let api = RecordingApi::failing();
        let err = block_on(create_room(&api, &RoomSetup::default())).unwrap_err();
        assert_eq!(err, ApiError::Status(400));
    }
}
