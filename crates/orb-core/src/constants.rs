// Globe geometry and animation tuning constants

/// Number of points distributed through the globe volume.
pub const POINT_COUNT: usize = 950;

/// Camera distance used by the perspective divide.
pub const CAMERA_DEPTH: f32 = 500.0;

/// Globe radius as a fraction of the square viewport size.
pub const RADIUS_FRACTION: f32 = 0.42;

// Rotation
pub const BASE_ROT_SPEED: f32 = 0.002; // radians per frame about the vertical axis
pub const AMBIENT_TILT_AMPLITUDE: f32 = 0.25;
pub const AMBIENT_TILT_FREQ: f32 = 0.0035; // per frame, applied to the slow tilt sine

// Inertial drag
pub const DRAG_SENSITIVITY: f32 = 0.00022; // radians of velocity per pixel of pointer travel
pub const DRAG_DAMPING: f32 = 0.96; // velocity multiplier per frame
pub const VELOCITY_MAX: f32 = 0.08; // radians per frame

// Pulse (slow global size modulation)
pub const PULSE_FREQ: f32 = 0.01;
pub const BASE_POINT_SIZE: f32 = 1.6;
pub const PULSE_SIZE_SPAN: f32 = 0.35;

// Travelling radial wave
pub const WAVE_LENGTH: f32 = 42.0;
pub const WAVE_SPEED: f32 = 0.035;
pub const WAVE_AMPLITUDE: f32 = 9.0;

// Density fade: points near the surface are more transparent
pub const ALPHA_BASE: f32 = 0.35;
pub const ALPHA_SPAN: f32 = 0.5;

/// Lower bound for the perspective scale; keeps the divide finite and positive
/// even when a point crosses the camera plane.
pub const SCALE_FLOOR: f32 = 1e-3;
