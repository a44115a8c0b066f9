use async_trait::async_trait;
use disaster_core::{
    ApiError, BagQueue, BagSpec, Catalog, Cell, CreateRoomRequest, GameApi, HostInfo, JoinRequest,
    JoinResponse, PackingTicket, PhaseGate, PhaseReport, PollOutcome, RoomCreated, RoomSetup,
    SubmitResponse, TeamList, create_room, join_team, lookup_room, refresh_teams, submit_bag,
};
use disaster_core::bag::BagSubmission;
use futures::executor::block_on;
use serde_json::{Value, json};
use std::cell::RefCell;

/// One room on a scripted backend.
#[derive(Default)]
struct ScriptedRoom {
    code: String,
    teams: RefCell<Vec<String>>,
    phase: RefCell<String>,
    submitted: RefCell<Vec<Value>>,
}

impl ScriptedRoom {
    fn check(&self, code: &str) -> Result<(), ApiError> {
        if code == self.code {
            Ok(())
        } else {
            Err(ApiError::Status(404))
        }
    }

    fn report(&self) -> PhaseReport {
        PhaseReport {
            message: String::new(),
            current_phase: self.phase.borrow().clone(),
        }
    }
}

#[async_trait(?Send)]
impl GameApi for ScriptedRoom {
    async fn create_room(&self, request: &CreateRoomRequest) -> Result<RoomCreated, ApiError> {
        Ok(RoomCreated(json!({
            "room_code": self.code,
            "host_nickname": request.host_nickname,
        })))
    }

    async fn room_host(&self, code: &str) -> Result<HostInfo, ApiError> {
        self.check(code)?;
        Ok(HostInfo {
            room_code: code.to_string(),
            host_nickname: "호스트".to_string(),
        })
    }

    async fn join_room(&self, code: &str, request: &JoinRequest) -> Result<JoinResponse, ApiError> {
        self.check(code)?;
        let mut teams = self.teams.borrow_mut();
        if teams.contains(&request.team_name) {
            return Err(ApiError::Status(400));
        }
        teams.push(request.team_name.clone());
        Ok(JoinResponse {
            message: "Joined".to_string(),
            room_code: code.to_string(),
            player_name: request.team_name.clone(),
        })
    }

    async fn teams(&self, code: &str) -> Result<TeamList, ApiError> {
        self.check(code)?;
        Ok(TeamList {
            teams: self.teams.borrow().clone(),
        })
    }

    async fn join_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError> {
        self.check(code)?;
        Ok(self.report())
    }

    async fn game_info_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError> {
        self.check(code)?;
        Ok(self.report())
    }

    async fn submit_bag(
        &self,
        code: &str,
        _team: &str,
        submission: &BagSubmission,
    ) -> Result<SubmitResponse, ApiError> {
        self.check(code)?;
        self.submitted.borrow_mut().push(submission.to_value());
        Ok(SubmitResponse { message: None })
    }
}

fn water_catalog() -> Catalog {
    let headers: Vec<String> = ["korName", "name", "weight", "volume", "description"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let rows = vec![vec![
        Cell::Text("물".into()),
        Cell::Text("water".into()),
        Cell::Number(1.0),
        Cell::Number(1.0),
        Cell::Text("생수".into()),
    ]];
    Catalog::from_rows(&headers, rows).expect("catalog")
}

#[test]
fn host_and_player_reach_submission() {
    let backend = ScriptedRoom {
        code: "AB12CD".into(),
        phase: RefCell::new("waiting".into()),
        ..ScriptedRoom::default()
    };
    backend.teams.borrow_mut().push("bravo".into());

    let host = block_on(create_room(&backend, &RoomSetup {
        title: "우리방".into(),
        pre_info: Some(1),
        disaster: Some(2),
    }))
    .expect("room");
    assert_eq!(host.room_code.as_deref(), Some("AB12CD"));

    let (room, _) = block_on(lookup_room(&backend, " AB12CD ")).expect("lookup");
    let team = block_on(join_team(&backend, Some(room.room_code.as_str()), "alpha")).expect("join");
    assert!(block_on(join_team(&backend, Some(room.room_code.as_str()), "alpha")).is_err());

    let others = block_on(refresh_teams(&backend, &team.room_code, Some(team.team_name.as_str())));
    assert_eq!(others, Some(vec!["bravo".to_string()]));

    assert_eq!(
        block_on(PhaseGate::JoinConfirmed.poll(&backend, &team.room_code)),
        PollOutcome::Stay
    );
    *backend.phase.borrow_mut() = "game_info".into();
    assert_eq!(
        block_on(PhaseGate::JoinConfirmed.poll(&backend, &team.room_code)),
        PollOutcome::Advance
    );
    *backend.phase.borrow_mut() = "bag_selection".into();
    assert_eq!(
        block_on(PhaseGate::GameInfoConfirmed.poll(&backend, &team.room_code)),
        PollOutcome::Advance
    );

    let ticket = PackingTicket::from(team);
    let catalog = water_catalog();
    let water = catalog.search("물")[0];
    let mut queue = BagQueue::new(ticket.selected_bag.clone());
    queue.add(water, 3).expect("three waters");
    queue.remove(0);

    let submitted = block_on(submit_bag(&backend, &ticket, &queue)).expect("submit");
    assert_eq!(submitted.scene.team_name, "alpha");
    assert_eq!(submitted.scene.bag_contents.items.get("water"), Some(&2));
    assert_eq!(
        backend.submitted.borrow()[0],
        json!({"water": 2, "totalWeight": 2.0, "totalVolume": 2.0, "bagID": 1})
    );
}

#[test]
fn small_bag_rejects_the_item_past_its_cap() {
    let catalog = water_catalog();
    let water = &catalog.items[0];
    let mut queue = BagQueue::new(BagSpec {
        weight_limit: 1.0,
        ..BagSpec::default()
    });

    queue.add(water, 5).expect("5 of 10");
    queue.add(water, 5).expect("10 of 10");
    assert!(queue.add(water, 1).is_err());
    assert_eq!(queue.len(), 10);
    assert!((queue.total_weight() - 10.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_room_is_rejected_before_joining() {
    let backend = ScriptedRoom {
        code: "AB12CD".into(),
        ..ScriptedRoom::default()
    };
    let err = block_on(lookup_room(&backend, "ZZZZZZ")).unwrap_err();
    assert_eq!(err.to_string(), "유효하지 않은 코드입니다. 다시 시도해주세요.");
}
