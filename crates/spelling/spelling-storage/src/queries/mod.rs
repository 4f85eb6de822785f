pub mod maintenance;
pub mod preference_ops;
