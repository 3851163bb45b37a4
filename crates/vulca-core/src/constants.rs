// Shared tuning constants for the particle gallery.

// Timing
pub const REFERENCE_FPS: f32 = 60.0; // per-frame rates below are expressed at this rate
pub const DEFAULT_FRAME_DELTA: f32 = 1.0 / REFERENCE_FPS;
pub const FPS_UPDATE_INTERVAL_SEC: f32 = 0.5;

// Scores
pub const SCORE_MIN: f32 = 0.0;
pub const SCORE_MAX: f32 = 10.0;
pub const SCORE_MIDPOINT: f32 = 5.0;

// Particle pool
pub const MIN_PARTICLES: usize = 80;
pub const DEFAULT_MAX_PARTICLES: usize = 300;
pub const PARTICLES_PER_REPRESENTATION: f32 = 20.0;
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_MAX: f32 = 10.0;
pub const PARTICLE_SIZE_JITTER: f32 = 0.2; // spawned size in [size * (1 - jitter), size]
pub const PARTICLE_MAX_AGE_MIN: f32 = 100.0; // frames
pub const PARTICLE_MAX_AGE_MAX: f32 = 200.0; // frames
pub const SPAWN_SPEED: f32 = 1.0;
pub const REFERENCE_SPEED: f32 = 5.5; // mapped speed at technique 5, motion gain 1
pub const DEFAULT_TRAIL_LENGTH: usize = 15;

// Mapper
pub const DEFAULT_BURST_THRESHOLD: f32 = 6.0;
pub const HUE_SHIFT_PER_POINT: f32 = 8.0; // degrees per aesthetics point away from midpoint
pub const IDENTITY_TINT: f32 = 0.35; // share of the evaluator's primary color in the mapped color

// Physics
pub const DEFAULT_ATTRACTION_STRENGTH: f32 = 5000.0;
pub const DEFAULT_ATTRACTION_RANGE: f32 = 300.0;
pub const ATTRACTION_GAIN: f32 = 0.01;
pub const DEFAULT_WIND_SCALE: f32 = 100.0;
pub const DEFAULT_WIND_STRENGTH: f32 = 0.5;
pub const DEFAULT_WIND_SPEED: f32 = 1.0;
pub const WIND_GAIN: f32 = 0.1;
pub const WIND_Y_TIME_OFFSET: f32 = 1000.0; // decorrelates the y channel from x
pub const DEFAULT_DAMPING: f32 = 0.98;

// Interaction
pub const HOVER_SCALE: f32 = 1.05;
pub const HOVER_ACTIVITY_BOOST: f32 = 1.2;
pub const CLICK_IMPULSE_SPEED: f32 = 5.0;
pub const BURST_MULTIPLIER: f32 = 1.6;
pub const DRAG_GAIN: f32 = 0.01;
pub const DRAG_STRENGTH_DIVISOR: f32 = 100.0;
pub const IDLE_RESUME_MS: u64 = 3000;

// Prominence
pub const DEFAULT_BASE_PROMINENCE: f32 = 0.05;
pub const RENDER_ALPHA_EPSILON: f32 = 0.01;
pub const FADE_IN_PER_FRAME: f32 = 0.02; // ~800 ms at 60 fps
pub const FADE_OUT_PER_FRAME: f32 = 0.01; // ~1600 ms at 60 fps
pub const PROMINENCE_RAMP_PER_FRAME: f32 = 0.02;
pub const AUTOPLAY_PHASE_MS: f32 = 15_000.0;

// Motion
pub const MOTION_GAIN: f32 = 0.02; // scales generator output into per-tick velocity
pub const ORBIT_PULL: f32 = 0.05;
pub const DEPTH_LAYERS: u8 = 3;
pub const DRIFT_GAIN: f32 = 0.01;
pub const ALPHA_OSCILLATION_RATE: f32 = 0.02; // radians per second per unit of alpha speed
pub const GLOW_TINT: f32 = 0.25;

// Layout
pub const MIN_REGION_EXTENT: f32 = 16.0;
