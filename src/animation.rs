//! Frame-driven animation engine.
//!
//! An animation is a loop over host frames: on every frame the progress
//! `min(elapsed / duration, 1)` is eased and handed to a step callback, and
//! the returned future resolves once progress reaches 1. The engine owns no
//! state between calls. Two animations touching the same property simply
//! both write it every frame; pass a [`CancellationToken`] to stop one.
//!
//! The frame source is abstracted by [`FrameClock`] so the same loop runs on
//! `requestAnimationFrame` in the browser (see `dom::animate`) and on a tokio
//! timer natively.

use std::future::Future;

use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Default duration of the DOM transitions, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 300.0;

/// Source of animation frames.
pub trait FrameClock {
    /// Current time in milliseconds, on the same scale as frame timestamps.
    fn now(&self) -> f64;

    /// Resolves on the next frame with its timestamp in milliseconds.
    fn next_frame(&self) -> impl Future<Output = f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut if t < 0.5 => 2.0 * t * t,
            Easing::EaseInOut => -1.0 + (4.0 - 2.0 * t) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::Linear,
        }
    }
}

impl AnimationOptions {
    pub fn with_duration(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    Completed,
    Cancelled,
}

/// Linear progress of a transition started at `start`, clamped to `[0, 1]`.
///
/// A non-positive or non-finite duration is already complete.
pub fn progress(start: f64, now: f64, duration_ms: f64) -> f64 {
    if !(duration_ms.is_finite() && duration_ms > 0.0) {
        return 1.0;
    }
    ((now - start) / duration_ms).clamp(0.0, 1.0)
}

/// Interpolates between `from` and `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Runs `step` once per frame with eased progress until the duration
/// elapses or `token` is cancelled.
///
/// The final step always receives exactly `1.0` on completion. A cancelled
/// animation leaves whatever the last step wrote.
pub async fn animate<C, F>(
    clock: &C,
    options: &AnimationOptions,
    token: Option<&CancellationToken>,
    mut step: F,
) -> AnimationOutcome
where
    C: FrameClock,
    F: FnMut(f64),
{
    let start = clock.now();
    loop {
        let timestamp = clock.next_frame().await;
        if token.is_some_and(CancellationToken::is_cancelled) {
            #[cfg(feature = "tracing")]
            tracing::debug!("animation cancelled after {:.1}ms", timestamp - start);
            return AnimationOutcome::Cancelled;
        }

        let linear = progress(start, timestamp, options.duration_ms);
        step(options.easing.apply(linear));
        if linear >= 1.0 {
            #[cfg(feature = "tracing")]
            tracing::trace!("animation completed in {:.1}ms", timestamp - start);
            return AnimationOutcome::Completed;
        }
    }
}

/// Runs [`animate`] and reports the outcome on `tx`.
pub async fn animate_tx<C, F>(
    clock: &C,
    options: &AnimationOptions,
    token: CancellationToken,
    step: F,
    tx: mpsc::Sender<AnimationOutcome>,
) where
    C: FrameClock,
    F: FnMut(f64),
{
    let outcome = animate(clock, options, Some(&token), step).await;

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send animation outcome: {}", _e);
    }
}

/// Frame clock backed by a tokio timer, ~60 frames per second by default.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct TokioFrameClock {
    origin: tokio::time::Instant,
    frame: std::time::Duration,
}

#[cfg(not(target_arch = "wasm32"))]
impl TokioFrameClock {
    pub fn new() -> Self {
        Self::with_frame_interval(std::time::Duration::from_millis(16))
    }

    pub fn with_frame_interval(frame: std::time::Duration) -> Self {
        Self {
            origin: tokio::time::Instant::now(),
            frame,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for TokioFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameClock for TokioFrameClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    async fn next_frame(&self) -> f64 {
        tokio::time::sleep(self.frame).await;
        self.now()
    }
}
