//! User registration system — append-only records, unique by email.

pub mod model;
pub mod routes;
pub mod store;

pub use model::UserRecord;
pub use routes::{UserRouteState, user_routes};
pub use store::UserStore;
