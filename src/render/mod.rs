//! Rendering utilities and the raycast renderer.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer and fill helpers
//! - `casters`: Fixed-step ray marching
//! - `render3d`: Column projector, wall shading, ceiling/floor bands
//! - `sprites`: Item billboards, labels and dust

pub mod framebuffer;
pub mod casters;
pub mod render3d;
pub mod sprites;
