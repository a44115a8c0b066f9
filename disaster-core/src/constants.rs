//! Shared constants for the Disaster.io client.

/// Backend origin used when no override is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Interval between phase/team-list polls, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 3_000;

/// Starting value of the bag-packing countdown, in seconds.
pub const BAG_TIMER_SECS: u32 = 150;

/// Countdown tick length, in milliseconds.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Spreadsheet asset holding the item catalog.
pub const CATALOG_PATH: &str = "Items.xlsx";

/// Base capacity unit multiplied by a bag's weight/volume limit.
pub const BAG_CAPACITY_UNIT: f64 = 10.0;

/// Smallest quantity selectable in the add-to-bag modal.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity selectable in the add-to-bag modal.
pub const MAX_QUANTITY: u32 = 10;

/// Number of choices offered by each room-setup grid.
pub const SETUP_OPTION_COUNT: u8 = 8;

/// Fallback room code when the bag screen is opened without navigation state.
pub const UNKNOWN_ROOM: &str = "UNKNOWN_ROOM";

/// Fallback team name when the bag screen is opened without navigation state.
pub const UNKNOWN_TEAM: &str = "UNKNOWN_TEAM";

/// Alert shown when an addition would overflow the bag.
pub const ALERT_CAPACITY_EXCEEDED: &str = "Bag capacity exceeded!";

/// Alert shown once the countdown reaches zero.
pub const ALERT_TIMES_UP: &str = "Time's up!";

/// Alert shown when the server accepts a bag without a message.
pub const ALERT_SUBMIT_OK: &str = "Bag contents submitted successfully!";

/// Alert shown when bag submission fails.
pub const ALERT_SUBMIT_FAILED: &str = "Failed to submit bag contents. Please try again.";

/// Team limit shown on the room-build screen.
pub const MAX_TEAMS: u32 = 4;
