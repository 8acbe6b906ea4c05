// Host-page wiring for the web front-end.

// Element ids looked up when the page does not pass its own
pub const DEFAULT_CANVAS_ID: &str = "ambient-canvas";
pub const DEFAULT_SPOTLIGHT_ID: &str = "ambient-spotlight";

// DOM events
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const RESIZE_EVENT: &str = "resize";

// Canvas backing store never shrinks below one pixel per side
pub const MIN_BACKING_PX: u32 = 1;

// Mode names accepted by `setMode`
pub const MODE_NAMES: [&str; 2] = ["abstract", "scene"];
