//! Particle field storage.
//!
//! A field is a fixed-size set of point particles backed by flat `f32`
//! buffers: one `(x, y, z)` triple per particle, and optionally one
//! `(r, g, b)` triple per particle. Buffers are allocated and filled once at
//! startup; after that only the y components change, rewritten every frame by
//! a [`Waveform`](crate::wave::Waveform).
//!
//! The renderer consumes the buffers directly, so the field tracks a dirty
//! flag that tells it when the position data needs re-uploading.

use rand::Rng;

/// Configuration for building a [`ParticleField`].
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles. Fixed for the lifetime of the field.
    pub count: u32,
    /// Side length of the cube particles spawn in, centered on the origin.
    /// Coordinates are drawn uniformly from `[-spread / 2, spread / 2)`.
    pub spread: f32,
    /// Whether to generate a per-particle color buffer.
    pub vertex_colors: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 20_000,
            spread: 10.0,
            vertex_colors: true,
        }
    }
}

impl FieldConfig {
    /// A small, uncolored field. Pairs with [`Waveform::Still`] for a static
    /// scene that is still redrawn every frame.
    ///
    /// [`Waveform::Still`]: crate::wave::Waveform::Still
    pub fn minimal() -> Self {
        Self {
            count: 2_000,
            spread: 10.0,
            vertex_colors: false,
        }
    }
}

/// A fixed-size particle set backed by flat attribute buffers.
///
/// Positions are stored as `[x0, y0, z0, x1, y1, z1, ..]`, so particle `i`
/// lives at offset `3 * i` and the buffer length is always exactly
/// `3 * count`. Colors, when present, use the same layout with `(r, g, b)`
/// components in `[0, 1)`.
pub struct ParticleField {
    count: u32,
    positions: Vec<f32>,
    colors: Option<Vec<f32>>,
    dirty: bool,
}

impl ParticleField {
    /// Build a field from a configuration and a random source.
    ///
    /// The random source is an explicit parameter so callers (and tests) can
    /// supply a seeded generator for reproducible layouts.
    pub fn generate<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Self {
        let n = config.count as usize;
        let half = config.spread / 2.0;

        // All three coordinates start uniform in the spawn cube. Only y is
        // ever rewritten afterwards.
        let positions: Vec<f32> = (0..n * 3).map(|_| rng.gen_range(-half..half)).collect();

        let colors = config
            .vertex_colors
            .then(|| (0..n * 3).map(|_| rng.gen_range(0.0..1.0)).collect());

        Self {
            count: config.count,
            positions,
            colors,
            dirty: true,
        }
    }

    /// Number of particles in the field.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The flat position buffer, length `3 * count`.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Mutable access to the position buffer. Marks the positions dirty so
    /// the renderer re-uploads them before the next draw.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [f32] {
        self.dirty = true;
        &mut self.positions
    }

    /// The flat color buffer, if the field was built with vertex colors.
    #[inline]
    pub fn colors(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }

    /// Whether the position buffer changed since the last upload.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the dirty flag. Returns `true` if an upload is needed.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
