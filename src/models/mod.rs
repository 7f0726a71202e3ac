pub mod chat;
pub mod trip;
pub mod user;

pub use chat::{ChatTurn, Role};
pub use trip::{Interest, Pace, TripRequest};
pub use user::{validate_username, Credentials, UserRecord};
