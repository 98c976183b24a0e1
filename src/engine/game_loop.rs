// Frame timing driven by the host's per-frame callback
//
// The host hands us the time since its last frame. `GameLoop` turns that
// into a bounded number of fixed-size simulation steps, and `FixedTick`
// throttles slower consumers (the HUD refresh) to their own rate.

use std::time::Duration;

/// Target simulation rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of simulation steps per frame to prevent spiral of death
const MAX_UPDATE_STEPS: u32 = 5;

/// Interval of the HUD refresh tick (~30 Hz)
pub const HUD_TICK_INTERVAL: f32 = 0.033;

/// Game loop timing state
#[derive(Debug)]
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Total host time fed into the loop
    elapsed: Duration,

    /// Whether the game is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total updates executed
    update_count: u64,

    /// Delta time of the last frame (in seconds)
    frame_delta_time: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            elapsed: Duration::ZERO,
            paused: false,
            frame_count: 0,
            update_count: 0,
            frame_delta_time: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.elapsed += frame_time;
        self.frame_delta_time = frame_time.as_secs_f32();

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_UPDATE_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Drop the backlog we refused to simulate
        if updates == MAX_UPDATE_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!(
                "Frame of {:?} exceeded {} steps, dropping backlog",
                frame_time,
                MAX_UPDATE_STEPS
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Get the fixed timestep for simulation updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get the delta time of the last frame (in seconds)
    pub fn frame_delta_time(&self) -> f32 {
        self.frame_delta_time
    }

    /// Total host time fed into the loop
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get total number of frames seen
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Fires at most once per frame when enough delta has piled up.
///
/// Leftover time is carried, so a steady frame rate yields a steady tick
/// rate even when the interval does not divide the frame time.
#[derive(Debug, Clone)]
pub struct FixedTick {
    interval: f32,
    delay: f32,
}

impl FixedTick {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            delay: 0.0,
        }
    }

    /// Feed a frame delta, returns true when the tick fires
    pub fn advance(&mut self, delta: f32) -> bool {
        self.delay += delta;

        if self.delay > self.interval {
            self.delay -= self.interval;
            return true;
        }

        false
    }

    /// Time accumulated towards the next tick
    pub fn pending(&self) -> f32 {
        self.delay
    }
}

impl Default for FixedTick {
    fn default() -> Self {
        Self::new(HUD_TICK_INTERVAL)
    }
}
