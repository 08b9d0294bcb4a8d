#![cfg_attr(not(test), no_std)]

pub mod analog;
pub mod average;
pub mod calibration;
pub mod convert;
pub mod converter;
pub mod design_parameters;
mod error;
pub mod frontend;
pub mod mode;
pub mod ramp;
pub mod router;
pub mod sar;
pub mod settings;
pub mod telemetry;
pub mod timers;
pub mod trigger;

pub use error::Error;
pub use frontend::{Frontend, Inputs, Output, ReferenceSample};
pub use settings::{Config, Settings};
