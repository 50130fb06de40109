//! End-to-end properties of the particle field, its per-frame update, and
//! the surrounding plumbing (frame loop, viewport, shader source).

use rand::rngs::StdRng;
use rand::SeedableRng;
use wavefield::prelude::*;
use wavefield::MAX_PIXEL_RATIO;

// ============================================================================
// Buffer Shape
// ============================================================================

#[test]
fn test_buffers_are_three_times_count() {
    for count in [1u32, 7, 2_000, 20_000] {
        let config = FieldConfig {
            count,
            spread: 10.0,
            vertex_colors: true,
        };
        let field = ParticleField::generate(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(field.positions().len(), 3 * count as usize);
        assert_eq!(field.colors().unwrap().len(), 3 * count as usize);
    }
}

// ============================================================================
// Wave Update
// ============================================================================

#[test]
fn test_three_particle_wave() {
    // Three particles whose z coordinates are 1, 2, 3. At t = 0 the update
    // writes sin(2), sin(4), sin(6) into the y slots (offsets 1, 4, 7) and
    // leaves every other component exactly as it was.
    let mut positions = vec![0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0];
    apply_wave(&mut positions, 0.0);

    assert_eq!(positions[1], 2.0_f32.sin());
    assert_eq!(positions[4], 4.0_f32.sin());
    assert_eq!(positions[7], 6.0_f32.sin());

    assert_eq!(positions[0], 0.0);
    assert_eq!(positions[2], 1.0);
    assert_eq!(positions[3], 0.0);
    assert_eq!(positions[5], 2.0);
    assert_eq!(positions[6], 0.0);
    assert_eq!(positions[8], 3.0);
}

#[test]
fn test_wave_through_frame_loop_is_deterministic() {
    // Drive two identical fields through frame loops with manual clocks
    // reporting the same instants; the buffers must stay in lockstep.
    let config = FieldConfig {
        count: 300,
        spread: 10.0,
        vertex_colors: false,
    };
    let mut a = ParticleField::generate(&config, &mut StdRng::seed_from_u64(9));
    let mut b = ParticleField::generate(&config, &mut StdRng::seed_from_u64(9));

    let (mut loop_a, _) = FrameLoop::new(ManualClock::default());
    let (mut loop_b, _) = FrameLoop::new(ManualClock::default());

    for frame in 0..10 {
        let t = frame as f32 / 60.0;
        loop_a.clock_mut().elapsed = t;
        loop_b.clock_mut().elapsed = t;

        loop_a.step(|tick| Waveform::Sine.apply(&mut a, tick.elapsed));
        // b replays each instant twice; idempotence keeps it in lockstep.
        loop_b.step(|tick| {
            Waveform::Sine.apply(&mut b, tick.elapsed);
            Waveform::Sine.apply(&mut b, tick.elapsed);
        });
    }

    assert_eq!(loop_a.frames(), 10);
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn test_cancelled_loop_stops_updating() {
    let config = FieldConfig::minimal();
    let mut field = ParticleField::generate(&config, &mut StdRng::seed_from_u64(2));
    let (mut frame_loop, handle) = FrameLoop::new(ManualClock {
        elapsed: 1.0,
        delta: 1.0 / 60.0,
    });

    assert!(frame_loop.step(|tick| Waveform::Sine.apply(&mut field, tick.elapsed)));
    let after_one = field.positions().to_vec();

    handle.cancel();
    assert!(!frame_loop.step(|tick| Waveform::Sine.apply(&mut field, tick.elapsed + 5.0)));
    assert_eq!(field.positions(), after_one.as_slice());
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_updates_aspect_and_render_size() {
    let mut viewport = Viewport::new(1280, 720, 1.0);
    viewport.resize(1024, 768);

    assert_eq!(viewport.aspect(), 1024.0 / 768.0);
    assert_eq!(viewport.render_size(), (1024, 768));

    let camera = OrbitCamera::new();
    let vp = camera.view_proj(viewport.aspect());
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
}

#[test]
fn test_pixel_ratio_never_exceeds_two() {
    for scale in [0.5, 1.0, 1.5, 2.0, 2.5, 4.0] {
        let viewport = Viewport::new(800, 600, scale);
        assert!(viewport.pixel_ratio() <= MAX_PIXEL_RATIO);
    }

    let viewport = Viewport::new(800, 600, 3.0);
    assert_eq!(viewport.render_size(), (1600, 1200));
}

// ============================================================================
// Shader Validation
// ============================================================================

#[test]
fn test_field_shader_validates() {
    let source = include_str!("../src/gpu/field.wgsl");

    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("WGSL parse error: {:?}", e));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {:?}", e));
}
