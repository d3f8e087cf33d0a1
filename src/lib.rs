//! Hospital corridor raycaster.
//!
//! - `core`: simulation state (player, items, resources, dust) and the frame loop
//! - `render`: CPU framebuffer, ray caster, column projector and billboard sprites

pub mod core;
pub mod render;
