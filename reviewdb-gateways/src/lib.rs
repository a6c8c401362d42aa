//! Adapters that connect the use cases with the outside world.

pub mod email;
pub mod notify;
pub mod user_communication;
