use log::Level;

/// Height reserved for the fixed navigation bar when jumping to a section.
pub const NAV_BAR_OFFSET: f64 = 80.0;

/// The active-section probe sits this fraction of the viewport below the top.
pub const ACTIVE_PROBE_DIVISOR: f64 = 3.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
