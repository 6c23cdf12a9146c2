//! Enemy AI for FRONTLINE.
//!
//! Implements the enemy targeting state machine and the per-wave
//! enemy profiles.

pub mod fsm;
pub mod profiles;

pub use frontline_core as core;
