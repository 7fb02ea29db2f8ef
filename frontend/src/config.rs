use log::Level;

/// Vertical offset past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const BRAND_NAME: &str = "Escofilm";
pub const COPYRIGHT_YEAR: u16 = 2025;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Trunk serve / local builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_fifty_units() {
        assert_eq!(SCROLL_THRESHOLD, 50.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_log_transitions() {
        assert_eq!(log_level(), Level::Debug);
    }
}
