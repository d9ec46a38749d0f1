//! Spin-resolution engine for the fortune wheel: time -> angle -> segment.

pub mod angle;
pub mod config;
pub mod error;
pub mod result;
pub mod spin;
pub mod ticks;

pub use angle::POINTER_ANGLE;
pub use config::WheelConfig;
pub use error::WheelError;
pub use result::{resolve, SpinOutcome};
pub use spin::{Frame, RandomSource, RngSource, SpinEngine, SpinParams, SpinSession, SpinState};
pub use ticks::{TickSample, TickScheduler, TICK_INTERVAL};
