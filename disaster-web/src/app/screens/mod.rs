//! Screen containers: hooks, backend calls and navigation around the
//! presentational pages.
pub mod host;
pub mod join;
pub mod lobby;
pub mod packing;
