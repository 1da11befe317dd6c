pub mod quickview;
pub mod status_badge;
