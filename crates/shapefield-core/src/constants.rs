use glam::Vec3;

// Shared tuning constants for the shape field and its camera.

// Field layout
pub const DEFAULT_SHAPE_COUNT: i32 = 40;
pub const SHAPE_COUNT_MIN: i32 = 10; // UI slider bounds
pub const SHAPE_COUNT_MAX: i32 = 80;
pub const SHAPE_COUNT_STEP: i32 = 5;
pub const DEFAULT_SPREAD: f32 = 8.0; // radius of the outermost spiral slot
pub const LAYOUT_Y_FREQUENCY: f32 = 0.5;
pub const LAYOUT_Y_AMPLITUDE: f32 = 2.0;

// Whole-field sway
pub const FIELD_SWAY_Y_FREQ: f32 = 0.1;
pub const FIELD_SWAY_Y_AMP: f32 = 0.1;
pub const FIELD_SWAY_X_FREQ: f32 = 0.05;
pub const FIELD_SWAY_X_AMP: f32 = 0.05;

// Per-shape motion
pub const INFLUENCE_RADIUS: f32 = 8.0; // world units
pub const PUSH_STRENGTH: f32 = 2.0; // push at full influence
pub const HOVER_PUSH: f32 = 3.0; // extra push while hovered
pub const POSITION_LERP: f32 = 0.1;
pub const SCALE_LERP: f32 = 0.15;
pub const HOVER_SCALE: f32 = 1.8;
pub const INFLUENCE_SCALE_GAIN: f32 = 0.5; // 1 + influence * gain
pub const ROTATION_CLOCK_RATE: f32 = 0.2; // rotation clock advances dt * rate
pub const ROTATION_OFFSET_PER_INDEX: f32 = 0.01;
pub const ROTATION_Z_RATE: f32 = 0.5;

// Vertex colours
pub const HUE_BASE: f32 = 0.3;
pub const HUE_PER_X: f32 = 0.15;
pub const SATURATION_BASE: f32 = 0.8;
pub const SATURATION_SWING: f32 = 0.2;
pub const SATURATION_Y_FREQ: f32 = 2.0;
pub const LIGHTNESS_MIN: f32 = 0.1;
pub const LIGHTNESS_PER_INDEX: f32 = 0.015; // unclamped; saturates to white past index 66

// Point sprites
pub const POINT_SIZE_MIN: f32 = 0.1;
pub const POINT_SIZE_PER_INDEX: f32 = 0.0015;
pub const HOVER_POINT_SIZE_MULTIPLIER: f32 = 3.0;
pub const POINT_OPACITY: f32 = 0.8;
pub const HOVER_POINT_OPACITY: f32 = 1.0;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 5.0, 15.0);
pub const FOLLOW_RANGE: f32 = 2.0; // pointer ndc -> camera offset
pub const FOLLOW_LERP: f32 = 0.01;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Post-processing
pub const BLOOM_THRESHOLD: f32 = 0.1;
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const CHROMATIC_OFFSET: f32 = 0.002;

// Background
pub const DEFAULT_BACKGROUND: &str = "#000010";
