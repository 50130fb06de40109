//! # wavefield
//!
//! An animated point-particle wave field in a native window.
//!
//! A fixed set of particles spawns in a cube; every frame the vertical
//! coordinate of each one is rewritten as a sine of elapsed time plus its
//! own horizontal position, so a wave rolls through the field. Rendering is
//! a single instanced wgpu draw of textured billboards with additive
//! blending; the mouse orbits the camera.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wavefield::Viewer;
//!
//! fn main() {
//!     Viewer::new()
//!         .with_particle_count(20_000)
//!         .with_seed(42)
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! ## Controls
//!
//! - **Left-click + drag**: rotate camera (with inertial damping)
//! - **Scroll wheel**: zoom in/out
//! - **D**: toggle the debug panel (requires the `egui` feature)
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] holds flat `f32` buffers: `(x, y, z)` position triples
//! and optional `(r, g, b)` color triples, both filled once at startup from
//! an injectable random source. Only y components ever change afterwards.
//!
//! ### The wave
//!
//! [`Waveform::Sine`] is the per-frame update: `y = sin((t + z) * 2)` for
//! every particle, in place, followed by a dirty flag so the renderer
//! re-uploads positions. [`Waveform::Still`] skips the update entirely and
//! just keeps redrawing, for a static field.
//!
//! ### The loop
//!
//! [`FrameLoop`] binds a per-frame callback to an elapsed-time source and
//! guarantees one invocation per frame; its [`LoopHandle`] cancels the loop.
//! The windowing layer drives it from redraw events.
//!
//! ## Feature Flags
//!
//! - `egui` - the hidden debug panel (tint color edit, particle count, FPS)

pub mod camera;
pub mod controls;
mod error;
pub mod field;
pub mod frame_loop;
mod gpu;
pub mod sprite;
pub mod time;
pub mod viewer;
pub mod viewport;
pub mod wave;

pub use camera::OrbitCamera;
pub use controls::OrbitControls;
pub use error::{GpuError, SpriteError, ViewerError};
pub use field::{FieldConfig, ParticleField};
pub use frame_loop::{FrameClock, FrameLoop, FrameTick, LoopHandle, ManualClock};
pub use glam::{Vec2, Vec3, Vec4};
pub use sprite::SpriteMask;
pub use time::Time;
pub use viewer::{Viewer, DEFAULT_TINT};
pub use viewport::{Viewport, MAX_PIXEL_RATIO};
pub use wave::{apply_wave, Waveform, WAVE_FREQUENCY};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use wavefield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::OrbitCamera;
    pub use crate::controls::OrbitControls;
    pub use crate::error::ViewerError;
    pub use crate::field::{FieldConfig, ParticleField};
    pub use crate::frame_loop::{FrameClock, FrameLoop, FrameTick, LoopHandle, ManualClock};
    pub use crate::sprite::SpriteMask;
    pub use crate::time::Time;
    pub use crate::viewer::Viewer;
    pub use crate::viewport::Viewport;
    pub use crate::wave::{apply_wave, Waveform, WAVE_FREQUENCY};
    pub use crate::{Vec2, Vec3, Vec4};
}
