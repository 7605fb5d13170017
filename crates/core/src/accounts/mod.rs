//! Accounts module - profile models, lifecycle state machine, services, and traits.

pub mod accounts_lifecycle;
mod accounts_model;
mod accounts_service;
mod accounts_traits;



// Re-export the public interface
pub use accounts_lifecycle::AccountState;
pub use accounts_model::{CoachClientLink, NewUserAccount, ProfileUpdate, Role, UserAccount};
pub use accounts_service::AccountService;
pub use accounts_traits::{
    AccountRepositoryTrait, AccountServiceTrait, CoachClientRepositoryTrait,
};
