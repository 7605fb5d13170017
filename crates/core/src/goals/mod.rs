//! Goals module - domain models, progress derivation, services, and traits.

mod goals_model;
pub mod goals_progress;
mod goals_service;
mod goals_traits;


pub use goals_model::{Goal, GoalWithProgress, NewGoal};
pub use goals_progress::{GoalProgress, GoalStatus};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
