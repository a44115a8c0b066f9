//! In-process stand-in for the game backend.
//!
//! Rooms live in memory and move between phases only when the scenario says
//! so, which lets the full player flow run without a server.
use async_trait::async_trait;
use disaster_core::bag::BagSubmission;
use disaster_core::phase::{PHASE_BAG_SELECTION, PHASE_GAME_INFO};
use disaster_core::{
    ApiError, CreateRoomRequest, GameApi, HostInfo, JoinRequest, JoinResponse, PhaseReport,
    RoomCreated, SubmitResponse, TeamList,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 6;
const PHASE_LOBBY: &str = "lobby";

#[derive(Debug, Clone)]
struct Room {
    host_nickname: String,
    teams: Vec<String>,
    phase: String,
    submissions: BTreeMap<String, Value>,
}

#[derive(Debug)]
pub struct MemoryBackend {
    rooms: RefCell<BTreeMap<String, Room>>,
    rng: RefCell<StdRng>,
    requests: Cell<usize>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rooms: RefCell::new(BTreeMap::new()),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
            requests: Cell::new(0),
        }
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    /// Host confirms the team list; players move on to the briefing.
    pub fn confirm_teams(&self, code: &str) -> bool {
        self.set_phase(code, PHASE_GAME_INFO)
    }

    /// Host finishes the briefing; players start packing.
    pub fn start_packing(&self, code: &str) -> bool {
        self.set_phase(code, PHASE_BAG_SELECTION)
    }

    #[must_use]
    pub fn submission(&self, code: &str, team: &str) -> Option<Value> {
        self.rooms
            .borrow()
            .get(code)
            .and_then(|room| room.submissions.get(team).cloned())
    }

    fn set_phase(&self, code: &str, phase: &str) -> bool {
        match self.rooms.borrow_mut().get_mut(code) {
            Some(room) => {
                room.phase = phase.to_string();
                true
            }
            None => false,
        }
    }

    fn generate_code(&self) -> String {
        let mut rng = self.rng.borrow_mut();
        (0..CODE_LEN)
            .map(|_| char::from(CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())]))
            .collect()
    }

    fn serve(&self) {
        self.requests.set(self.requests.get() + 1);
    }

    fn with_room<T>(&self, code: &str, f: impl FnOnce(&mut Room) -> T) -> Result<T, ApiError> {
        self.rooms
            .borrow_mut()
            .get_mut(code)
            .map(f)
            .ok_or(ApiError::Status(404))
    }

    fn phase_report(&self, code: &str) -> Result<PhaseReport, ApiError> {
        self.with_room(code, |room| PhaseReport {
            message: format!("Room {code} is in {}", room.phase),
            current_phase: room.phase.clone(),
        })
    }
}

#[async_trait(?Send)]
impl GameApi for MemoryBackend {
    async fn create_room(&self, request: &CreateRoomRequest) -> Result<RoomCreated, ApiError> {
        self.serve();
        let mut code = self.generate_code();
        while self.rooms.borrow().contains_key(&code) {
            code = self.generate_code();
        }
        self.rooms.borrow_mut().insert(
            code.clone(),
            Room {
                host_nickname: request.host_nickname.clone(),
                teams: Vec::new(),
                phase: PHASE_LOBBY.to_string(),
                submissions: BTreeMap::new(),
            },
        );
        Ok(RoomCreated(json!({
            "message": "Room created",
            "room_code": code,
            "host_nickname": request.host_nickname,
        })))
    }

    async fn room_host(&self, code: &str) -> Result<HostInfo, ApiError> {
        self.serve();
        self.with_room(code, |room| HostInfo {
            room_code: code.to_string(),
            host_nickname: room.host_nickname.clone(),
        })
    }

    async fn join_room(&self, code: &str, request: &JoinRequest) -> Result<JoinResponse, ApiError> {
        self.serve();
        self.with_room(code, |room| {
            if room.teams.contains(&request.team_name) {
                return Err(ApiError::Status(400));
            }
            room.teams.push(request.team_name.clone());
            Ok(JoinResponse {
                message: format!("{} joined", request.team_name),
                room_code: code.to_string(),
                player_name: request.team_name.clone(),
            })
        })?
    }

    async fn teams(&self, code: &str) -> Result<TeamList, ApiError> {
        self.serve();
        self.with_room(code, |room| TeamList {
            teams: room.teams.clone(),
        })
    }

    async fn join_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError> {
        self.serve();
        self.phase_report(code)
    }

    async fn game_info_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError> {
        self.serve();
        self.phase_report(code)
    }

    async fn submit_bag(
        &self,
        code: &str,
        team: &str,
        submission: &BagSubmission,
    ) -> Result<SubmitResponse, ApiError> {
        self.serve();
        self.with_room(code, |room| {
            if !room.teams.iter().any(|t| t == team) {
                return Err(ApiError::Status(404));
            }
            room.submissions.insert(team.to_string(), submission.to_value());
            Ok(SubmitResponse {
                message: Some(format!("{team} bag received")),
            })
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn request() -> CreateRoomRequest {
        CreateRoomRequest {
            host_nickname: "host".to_string(),
            selected_pre_info: Some(1),
            selected_disaster: None,
        }
    }

    #[test]
    fn room_codes_are_six_uppercase_alphanumerics() {
        let backend = MemoryBackend::new(7);
        let created = block_on(backend.create_room(&request())).expect("create");
        let code = created.room_code().expect("code");
        assert_eq!(code.len(), 6);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn same_seed_yields_same_codes() {
        let a = MemoryBackend::new(99);
        let b = MemoryBackend::new(99);
        let code_a = block_on(a.create_room(&request())).expect("create");
        let code_b = block_on(b.create_room(&request())).expect("create");
        assert_eq!(code_a.room_code(), code_b.room_code());
    }

    #[test]
    fn duplicate_team_is_rejected() {
        let backend = MemoryBackend::new(1);
        let created = block_on(backend.create_room(&request())).expect("create");
        let code = created.room_code().expect("code").to_string();
        let join = JoinRequest {
            team_name: "alpha".to_string(),
        };
        assert!(block_on(backend.join_room(&code, &join)).is_ok());
        assert_eq!(
            block_on(backend.join_room(&code, &join)),
            Err(ApiError::Status(400))
        );
        assert_eq!(backend.requests(), 3);
    }

    #[test]
    fn unknown_room_is_not_found() {
        let backend = MemoryBackend::new(1);
        assert_eq!(
            block_on(backend.room_host("ZZZZZZ")),
            Err(ApiError::Status(404))
        );
        assert!(!backend.confirm_teams("ZZZZZZ"));
    }

    #[test]
    fn phases_advance_on_host_action() {
        let backend = MemoryBackend::new(3);
        let created = block_on(backend.create_room(&request())).expect("create");
        let code = created.room_code().expect("code").to_string();
        let report = block_on(backend.join_confirmed(&code)).expect("phase");
        assert_eq!(report.current_phase, "lobby");
        assert!(backend.confirm_teams(&code));
        let report = block_on(backend.join_confirmed(&code)).expect("phase");
        assert_eq!(report.current_phase, "game_info");
        assert!(backend.start_packing(&code));
        let report = block_on(backend.game_info_confirmed(&code)).expect("phase");
        assert_eq!(report.current_phase, "bag_selection");
    }
}
