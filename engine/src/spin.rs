use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::WheelError;

const MIN_FULL_TURNS: f64 = 5.0;
const TURN_SPREAD: f64 = 5.0;

/// Uniform randomness in [0, 1), injectable so spin targets are
/// deterministic in tests.
pub trait RandomSource {
    fn sample(&mut self) -> f64;
}

/// Adapter putting any `rand` generator behind [`RandomSource`].
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn sample(&mut self) -> f64 {
        self.0.random()
    }
}

/// Tuning knobs for a spin. Duration is the only knob the UI exposes; the
/// turn range matches the original wheel (5 to 10 full turns).
#[derive(Debug, Clone)]
pub struct SpinParams {
    pub duration: Duration,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(5000),
        }
    }
}

/// One running spin: where it started, where it will land, and when.
#[derive(Debug, Clone)]
pub struct SpinSession {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub start_time: Instant,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub enum SpinState {
    Idle,
    Spinning(SpinSession),
    Completed { final_rotation: f64 },
}

/// Rotation sample produced by [`SpinEngine::advance`]. `done` is reported on
/// exactly one frame per spin: the one that crosses the duration boundary.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub rotation: f64,
    pub done: bool,
}

/// Owns the spin state machine (`Idle -> Spinning -> Completed -> Idle`).
///
/// The engine holds no timers and never blocks: the caller feeds it the
/// current time once per animation frame and pushes the returned rotation to
/// rendering and tick sampling. Rotation accumulates across spins so the
/// wheel never snaps back visually; it is only normalized when a result is
/// resolved.
pub struct SpinEngine {
    state: SpinState,
    current_rotation: f64,
    params: SpinParams,
}

impl SpinEngine {
    pub fn new(params: SpinParams) -> Self {
        Self {
            state: SpinState::Idle,
            current_rotation: 0.0,
            params,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.current_rotation
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning(_))
    }

    /// Starts a new spin from the current rotation. Rejected while a spin is
    /// running; a completed spin is reset to a fresh one.
    pub fn request_spin<R: RandomSource + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
    ) -> Result<SpinSession, WheelError> {
        if self.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }

        let full_turns = MIN_FULL_TURNS + rng.sample() * TURN_SPREAD;
        let offset = rng.sample() * TAU;
        let session = SpinSession {
            start_rotation: self.current_rotation,
            target_rotation: self.current_rotation + full_turns * TAU + offset,
            start_time: now,
            duration: self.params.duration,
        };
        self.state = SpinState::Spinning(session.clone());
        Ok(session)
    }

    /// Advances the spin to `now` and returns the rotation to render. Calls
    /// outside an active spin just echo the resting rotation.
    pub fn advance(&mut self, now: Instant) -> Frame {
        let session = match &self.state {
            SpinState::Spinning(session) => session,
            _ => {
                return Frame {
                    rotation: self.current_rotation,
                    done: false,
                }
            }
        };

        let elapsed = now.saturating_duration_since(session.start_time);
        let progress = (elapsed.as_secs_f64() / session.duration.as_secs_f64()).min(1.0);

        if progress >= 1.0 {
            // Land on the exact target, not the eased value, so repeated
            // float rounding can never move the winning segment.
            let final_rotation = session.target_rotation;
            self.current_rotation = final_rotation;
            self.state = SpinState::Completed { final_rotation };
            return Frame {
                rotation: final_rotation,
                done: true,
            };
        }

        let eased = ease_out_cubic(progress);
        self.current_rotation =
            session.start_rotation + (session.target_rotation - session.start_rotation) * eased;
        Frame {
            rotation: self.current_rotation,
            done: false,
        }
    }
}

/// Decelerating easing: 1 - (1 - t)³, monotonic on [0, 1].
fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
