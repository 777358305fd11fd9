pub mod delete;
pub mod get;
pub mod put;

pub use delete::unsave_stall;
pub use get::get_saved_stalls;
pub use put::save_stall;
