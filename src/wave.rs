//! Per-frame vertical wave animation.
//!
//! The one piece of per-frame logic in the viewer: rewrite every particle's
//! y coordinate as a sine of elapsed time plus the particle's own horizontal
//! position, producing a wave that rolls through the field. x and z are never
//! touched, so the update is idempotent for a fixed time value.

use crate::field::ParticleField;

/// Angular frequency applied to the phase term, in radians per second.
pub const WAVE_FREQUENCY: f32 = 2.0;

/// Per-frame update applied to a [`ParticleField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Roll a sine wave through the field:
    /// `y = sin((elapsed + z) * WAVE_FREQUENCY)` for every particle.
    #[default]
    Sine,
    /// No per-particle update. The field keeps its spawn positions and the
    /// scene is simply redrawn each frame.
    Still,
}

impl Waveform {
    /// Run one frame of the update against `field` at `elapsed` seconds.
    ///
    /// `Sine` mutates y components in place and marks the field dirty for
    /// re-upload; `Still` leaves the field untouched, dirty flag included.
    pub fn apply(&self, field: &mut ParticleField, elapsed: f32) {
        match self {
            Waveform::Sine => apply_wave(field.positions_mut(), elapsed),
            Waveform::Still => {}
        }
    }
}

/// Rewrite the y component of every `(x, y, z)` triple in `positions`.
///
/// The phase term reads the z component, so the wave travels along the z
/// axis. No allocation, no failure path; a trailing partial triple (which a
/// well-formed buffer never has) is ignored.
pub fn apply_wave(positions: &mut [f32], elapsed: f32) {
    for triple in positions.chunks_exact_mut(3) {
        let phase = triple[2];
        triple[1] = ((elapsed + phase) * WAVE_FREQUENCY).sin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_field(count: u32) -> ParticleField {
        let config = FieldConfig {
            count,
            spread: 10.0,
            vertex_colors: false,
        };
        ParticleField::generate(&config, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_deterministic_vertical_update() {
        let mut field = test_field(500);
        let before = field.positions().to_vec();
        let t = 1.25;

        Waveform::Sine.apply(&mut field, t);

        for (i, triple) in field.positions().chunks_exact(3).enumerate() {
            let z = before[3 * i + 2];
            assert_eq!(triple[1], ((t + z) * WAVE_FREQUENCY).sin(), "particle {}", i);
        }
    }

    #[test]
    fn test_horizontal_axes_unchanged() {
        let mut field = test_field(500);
        let before = field.positions().to_vec();

        for step in 0..10 {
            Waveform::Sine.apply(&mut field, step as f32 * 0.016);
        }

        for (i, (after, orig)) in field
            .positions()
            .iter()
            .zip(before.iter())
            .enumerate()
        {
            if i % 3 != 1 {
                assert_eq!(after, orig, "component {} drifted", i);
            }
        }
    }

    #[test]
    fn test_replay_is_idempotent() {
        let mut once = test_field(200);
        let mut twice = test_field(200);
        let t = 0.7;

        Waveform::Sine.apply(&mut once, t);
        Waveform::Sine.apply(&mut twice, t);
        Waveform::Sine.apply(&mut twice, t);

        assert_eq!(once.positions(), twice.positions());
    }

    #[test]
    fn test_still_never_mutates() {
        let mut field = test_field(200);
        field.take_dirty();
        let before = field.positions().to_vec();

        for step in 0..20 {
            Waveform::Still.apply(&mut field, step as f32 * 0.1);
        }

        assert_eq!(field.positions(), before.as_slice());
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_sine_marks_field_dirty() {
        let mut field = test_field(10);
        field.take_dirty();

        Waveform::Sine.apply(&mut field, 0.0);
        assert!(field.is_dirty());
    }

    #[test]
    fn test_known_values_along_z() {
        // Three particles at z = 1, 2, 3. At t = 0 the y values land at
        // sin(2), sin(4), sin(6), and every other component stays put.
        let mut positions = vec![0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0];
        apply_wave(&mut positions, 0.0);

        assert_eq!(positions[1], 2.0_f32.sin());
        assert_eq!(positions[4], 4.0_f32.sin());
        assert_eq!(positions[7], 6.0_f32.sin());
        for i in [0, 2, 3, 5, 6, 8] {
            assert_eq!(positions[i], if i % 3 == 2 { (i / 3 + 1) as f32 } else { 0.0 });
        }
    }
}
