/// Width of the PWM and R2R channel codes.
pub const CHANNEL_BITS: u32 = 8;

/// Width of the reference channel code.
pub const REFERENCE_BITS: u32 = 16;

/// Width of every routed measurement and of the calibrated output.
pub const MEASUREMENT_BITS: u32 = 16;

/// Fast ticks per SAR engine tick.
pub const SAR_CLK_DIV: u32 = 4;

/// Minimum SAR engine ticks between a trial code change and the comparator sample.
pub const SAR_SETTLE_TICKS: u32 = 3;

/// Fast ticks per ramp step.
// A full 8 bit ramp period is then 256 * 16 fast ticks.
pub const RAMP_CLK_DIV: u32 = 16;

/// Averaging window depth, log2.
pub const WINDOW_LOG2: usize = 4;
pub const WINDOW: usize = 1 << WINDOW_LOG2;

/// Full scale of the analog inputs in millivolts.
pub const FULL_SCALE_MV: u32 = 3300;
