//! Admin config system — which onboarding page renders which input.
//!
//! The admin panel owns a single ordered list of field assignments. The
//! wizard client reads it to lay out steps 2 and 3; the admin client
//! rewrites it wholesale when an operator moves fields around.

pub mod model;
pub mod routes;
pub mod store;

pub use model::{FieldAssignment, default_layout, fields};
pub use routes::{ConfigRouteState, config_routes};
pub use store::ConfigStore;
