// Canvas wiring and paint tuning constants

// Fill colour for every point; per-point depth shows through global alpha.
pub const POINT_COLOR: &str = "#8b5cf6";

// Emit a frame-time debug report every this many frames.
pub const FRAME_LOG_INTERVAL: u32 = 300;

// Fallback square size bounds when the caller passes a non-positive maximum.
pub const DEFAULT_MAX_SIZE: f64 = 600.0;
