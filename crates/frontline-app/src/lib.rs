//! FRONTLINE headless host.
//!
//! Wires the catalog, the engine and console sinks together and drives the
//! engine from a dedicated frame-loop thread.

pub mod autopilot;
pub mod console;
pub mod game_loop;
pub mod loadout;

pub use frontline_core as core;
