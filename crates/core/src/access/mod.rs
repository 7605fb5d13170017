//! Access policy - role and ownership checks for lifecycle and management operations.

mod access_policy;

pub use access_policy::{
    can_create_workout, can_delete_user, can_disable, can_edit_goal, can_edit_profile,
    can_manage_users, can_view_goal, can_view_profile, can_view_progress, ensure, Caller,
};
