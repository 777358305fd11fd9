pub mod delete;
pub mod patch;

pub use delete::delete_account;
pub use patch::track_activity;
