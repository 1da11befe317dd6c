pub mod forbidden;
pub mod item_form;
pub mod items;
pub mod requests;
pub mod sign_in;
pub mod sign_up;
pub mod users;
