// Shared tuning constants used by both web and native frontends.

// Camera
pub const FOV_DEGREES: f32 = 45.0; // vertical field of view
pub const CAMERA_Z: f32 = 5.0; // eye distance to the focal plane at z = 0
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Scroll integration
pub const SCROLL_EASE: f32 = 0.05; // per-frame lerp fraction toward the target
pub const WHEEL_SENSITIVITY: f32 = 0.5; // normalized wheel pixels -> scroll pixels
pub const DRAG_SENSITIVITY: f32 = 2.0; // drag distance from anchor -> scroll pixels
pub const AUTOPLAY_SPEED: f32 = 2.0; // scroll pixels added per frame in autoplay

// Wheel normalization (same line/page sizes as normalize-wheel)
pub const WHEEL_LINE_HEIGHT_PX: f32 = 40.0;
pub const WHEEL_PAGE_HEIGHT_PX: f32 = 800.0;

// Plane bend driven by scroll velocity
pub const STRENGTH_FACTOR: f32 = 15.0;

// Upper bound on wrap corrections applied to one item in one frame
pub const MAX_WRAPS_PER_FRAME: u32 = 64;
