#![cfg_attr(not(test), no_std)]

mod boxcar;
pub use boxcar::*;
mod edge;
pub use edge::*;
mod scale;
pub use scale::*;
mod tools;
pub use tools::*;
