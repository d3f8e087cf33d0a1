//! Core game types and logic (data, physics, resources, frame loop).
//!
//! Re-exports:
//! - `config`: Runtime settings and locale
//! - `level`: Corridor bounds, wall tags and the item layout
//! - `player`: Player data and defaults
//! - `physics`: Velocity integration with hard-stop bounds
//! - `items`: Pickup items and their effects
//! - `resources`: Health, battery and flashlight
//! - `dust`: Ambient dust motes
//! - `simulation`: Per-frame orchestration and UI snapshot
//! - `frame_loop`: Scheduler, clocks and the host contract

pub mod config;
pub mod level;
pub mod player;
pub mod physics;
pub mod items;
pub mod resources;
pub mod dust;
pub mod simulation;
pub mod frame_loop;
