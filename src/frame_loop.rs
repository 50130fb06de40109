//! Frame-driven run loop.
//!
//! An explicit run-loop abstraction instead of a hidden self-rescheduling
//! callback: the loop owns an elapsed-time source, `step` invokes the
//! per-frame callback exactly once, and a [`LoopHandle`] cancels the loop
//! from anywhere. The windowing layer drives `step` from its redraw event
//! and re-requests a redraw while the loop stays live, which preserves
//! single-invocation-per-frame ordering on a single thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Timing values handed to the per-frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the loop's clock started. Monotonically non-decreasing.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

/// Source of per-frame timing.
///
/// The real clock is [`Time`](crate::time::Time); tests use [`ManualClock`]
/// to feed exact elapsed values.
pub trait FrameClock {
    /// Advance the clock by one frame and report the new timing values.
    fn tick(&mut self) -> FrameTick;
}

/// A clock that reports whatever it is told to. Intended for tests and
/// offline rendering of specific instants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    pub elapsed: f32,
    pub delta: f32,
}

impl FrameClock for ManualClock {
    fn tick(&mut self) -> FrameTick {
        FrameTick {
            elapsed: self.elapsed,
            delta: self.delta,
        }
    }
}

/// Cancellation handle for a [`FrameLoop`].
///
/// Cloneable and thread-safe; once cancelled the loop refuses further steps.
/// There is no way to un-cancel.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    cancelled: Arc<AtomicBool>,
}

impl LoopHandle {
    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether the loop has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// A per-frame loop bound to a clock.
pub struct FrameLoop<C: FrameClock> {
    clock: C,
    cancelled: Arc<AtomicBool>,
    frames: u64,
}

impl<C: FrameClock> FrameLoop<C> {
    /// Create a loop around `clock`, returning the loop and its handle.
    pub fn new(clock: C) -> (Self, LoopHandle) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let handle = LoopHandle {
            cancelled: cancelled.clone(),
        };
        (
            Self {
                clock,
                cancelled,
                frames: 0,
            },
            handle,
        )
    }

    /// Run one frame: tick the clock and invoke `frame` with the result.
    ///
    /// Returns `false` without invoking the callback if the loop was
    /// cancelled; the caller should stop re-scheduling at that point.
    pub fn step<F: FnOnce(FrameTick)>(&mut self, frame: F) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return false;
        }
        let tick = self.clock.tick();
        frame(tick);
        self.frames += 1;
        true
    }

    /// Frames executed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The underlying clock.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock, mainly for manual clocks in tests.
    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
