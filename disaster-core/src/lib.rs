//! Disaster.io client core
//!
//! Platform-agnostic client logic for the Disaster.io survival party game.
//! Screens in the web crate and scenarios in the tester both drive these
//! types; nothing here touches the browser.

pub mod api;
pub mod bag;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod join;
pub mod lobby;
pub mod nav;
pub mod phase;
pub mod room;

// Re-export commonly used types
pub use api::{
    ApiError, CreateRoomRequest, Endpoint, GameApi, HostInfo, JoinRequest, JoinResponse, Method,
    PhaseReport, RoomCreated, SubmitResponse, TeamList,
};
pub use bag::{
    BagContents, BagError, BagQueue, BagSpec, BagSubmission, Submitted, clamp_quantity, submit_bag,
};
pub use catalog::{Catalog, CatalogError, Cell, Item, parse_leading_float};
pub use config::ClientConfig;
pub use countdown::{Countdown, Tick};
pub use join::{JoinError, join_team, lookup_room, validate_room_code, validate_team_name};
pub use lobby::{refresh_teams, visible_teams};
pub use nav::{HostTicket, PackingTicket, RoomTicket, SceneTicket, TeamTicket};
pub use phase::{PhaseGate, PollOutcome, RoomPhase};
pub use room::{RoomSetup, SetupGrid, create_room};
