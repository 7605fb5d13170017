//! Workouts module - coach-authored workouts and workout sessions.

mod workouts_model;
mod workouts_service;
mod workouts_traits;

pub use workouts_model::{
    Difficulty, NewWorkout, Workout, WorkoutCategory, WorkoutFilter, WorkoutSession,
};
pub use workouts_service::WorkoutService;
pub use workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};
