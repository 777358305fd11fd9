pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_stall;
pub use get::{get_stall, list_stalls};
pub use patch::update_stall;
pub use post::create_stall;
