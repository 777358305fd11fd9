pub mod paths;
pub mod rating;
pub mod stall;
pub mod user;

pub use rating::{Rating, RatingEntry, RatingSummary, RatingValue};
pub use stall::{Location, NewStall, Stall, StallEntry, StallUpdate};
pub use user::UserDoc;
