/// Segment label used when a company name or sector is missing
pub const UNKNOWN_SEGMENT: &str = "Unknown";

/// chrono format for monthly buckets (YYYY-MM)
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";

/// Multiplier turning a ratio into a percentage
pub const PERCENT_SCALE: u32 = 100;
