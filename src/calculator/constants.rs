// Constants for the calculator

/// Factor converting trigonometric operands from degrees to radians
pub const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

/// Largest n for which F(n) is finite as an `f64`
/// F(1477) exceeds `f64::MAX`, so `fib` short-circuits to infinity past this
pub const FIB_LAST_FINITE: u32 = 1476;

/// Transcript line printed between batch entries
pub const BATCH_SEPARATOR: &str = "------------------------";

pub const BATCH_START_BANNER: &str = "Batch calculation started...";

pub const BATCH_END_BANNER: &str = "Batch calculation complete";
