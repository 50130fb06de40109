//! # Minimal
//!
//! The smallest configuration: 2,000 uncolored particles, no per-frame
//! update. The field is static but still redrawn every frame, so orbit and
//! zoom stay live.
//!
//! Run with: `cargo run --example minimal`

use wavefield::Viewer;

fn main() {
    env_logger::init();

    Viewer::minimal()
        .with_title("wavefield - minimal")
        .run()
        .unwrap();
}
