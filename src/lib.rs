//! Onboard API — a three-step onboarding wizard with admin-configurable
//! field placement, backed by an in-memory REST API.

pub mod admin;
pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod users;
pub mod wizard;
