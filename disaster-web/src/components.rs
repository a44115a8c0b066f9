pub mod bag_panel;
pub mod button;
pub mod header;
pub mod item_card;
pub mod modal;
pub mod option_grid;
pub mod quantity_modal;
pub mod timer_badge;
