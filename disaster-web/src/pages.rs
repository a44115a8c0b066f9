pub mod bag_pack;
pub mod host_notice;
pub mod landing;
pub mod lobby;
pub mod not_found;
pub mod room_build;
pub mod room_join;
pub mod scene_info;
pub mod team_name;
pub mod waiting;
