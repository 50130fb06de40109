//! # Seeded
//!
//! A reproducible field: the same seed always yields the same particle
//! layout, which makes visual comparisons across runs meaningful. Also
//! shows loading a sprite mask from disk with the procedural fallback.
//!
//! Run with: `cargo run --example seeded -- [seed]`

use wavefield::{SpriteMask, Viewer};

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    Viewer::new()
        .with_particle_count(20_000)
        .with_seed(seed)
        .with_sprite(SpriteMask::load_or_default("assets/particle.png"))
        .with_title(format!("wavefield - seed {}", seed))
        .run()
        .unwrap();
}
