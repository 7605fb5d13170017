//! Authentication - identity service contract and the login gate.

mod auth_model;
mod auth_service;
mod auth_traits;

pub use auth_model::{LoginOutcome, Session};
pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, IdentityServiceTrait};
