pub mod card;
pub mod detail_modal;
