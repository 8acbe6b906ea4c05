// Simulation tuning shared by the web and native front-ends.
//
// Every per-tick constant assumes one tick per display frame. Nothing here is
// scaled by elapsed wall-clock time.

// Global clock
pub const TIME_STEP: f64 = 0.05; // added to the animation clock every tick

// Pointer
pub const POINTER_START: [f64; 2] = [-100.0, -100.0]; // off-screen until the first move

// Trail
pub const TRAIL_AGE_STEP: f64 = 0.03; // age lost per tick; ~33 ticks of life
pub const TRAIL_LINE_WIDTH: f64 = 1.5;

// Fireworks: launch
pub const TRIGGER_COOLDOWN_MS: u64 = 800;
pub const ROCKETS_PER_BURST: usize = 25;
pub const ROCKET_LAUNCH_BAND: f64 = 0.7; // central share of the viewport width
pub const ROCKET_VX_SPREAD: f64 = 1.5; // vx in (-spread, spread)
pub const ROCKET_VY_BASE: f64 = 4.0;
pub const ROCKET_VY_EXTRA: f64 = 5.0;
pub const ROCKET_SIZE_MIN: f64 = 1.5;
pub const ROCKET_SIZE_MAX: f64 = 3.5;

// Fireworks: flight
pub const ROCKET_GRAVITY: f64 = 0.12;
pub const ROCKET_FADE: f64 = 0.01;
pub const ROCKET_APEX_VY: f64 = -0.5; // explode once vy climbs to this value

// Fireworks: sparks
pub const SPARKS_MIN: usize = 30;
pub const SPARKS_MAX: usize = 49; // inclusive
pub const SPARK_SPEED_MIN: f64 = 0.5;
pub const SPARK_SPEED_MAX: f64 = 3.5;
pub const SPARK_SIZE_MIN: f64 = 0.5;
pub const SPARK_SIZE_MAX: f64 = 2.0;
pub const SPARK_GRAVITY: f64 = 0.08;
pub const SPARK_DRAG: f64 = 0.95;
pub const SPARK_FADE: f64 = 0.015;

// Star field
pub const STAR_COUNT: usize = 100;
pub const STAR_SIZE_MIN: f64 = 0.5;
pub const STAR_SIZE_MAX: f64 = 2.5;
pub const STAR_TWINKLE_MIN: f64 = 0.005;
pub const STAR_TWINKLE_MAX: f64 = 0.025;
pub const STAR_TWINKLE_RATE: f64 = 2.0; // multiplies the clock inside sin()
pub const STAR_ALPHA_MIN: f64 = 0.2;
pub const STAR_ALPHA_MAX: f64 = 1.0;
pub const STAR_FADE_RATE: f64 = 0.05; // crossfade lag per tick
pub const STAR_VISIBLE_EPSILON: f64 = 0.01; // below this the field is not drawn

// Hover intent
pub const HOVER_HIDE_DELAY_MS: u64 = 3000;

// Spotlight
pub const SPOTLIGHT_RADIUS_BASE: f64 = 45.0;
pub const SPOTLIGHT_RADIUS_SWING: f64 = 5.0;
pub const SPOTLIGHT_OPACITY_BASE: f64 = 0.2;
pub const SPOTLIGHT_OPACITY_SWING: f64 = 0.05;
