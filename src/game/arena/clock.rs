// Round countdown

/// Countdown for a round. Only ticks while active and only ever removes
/// whole seconds; the sub-second remainder waits in an accumulator.
#[derive(Debug, Clone, Default)]
pub struct RoundClock {
    remaining: f32,
    second_counter: f32,
    active: bool,
}

impl RoundClock {
    /// Inactive clock holding `seconds`
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            second_counter: 0.0,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining time in seconds. Not clamped; overshoots below zero if
    /// nobody stops the clock.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Feed frame time. Returns the number of whole seconds removed
    pub fn advance(&mut self, delta: f32) -> u32 {
        if !self.active {
            return 0;
        }

        self.second_counter += delta;

        let whole = self.second_counter.floor();
        if whole < 1.0 {
            return 0;
        }

        self.second_counter -= whole;
        self.remaining -= whole;
        whole as u32
    }

    /// `MM:SS` view of the remaining time, `00:00` once expired
    pub fn time_text(&self) -> String {
        time_format(self.remaining.max(0.0) as u32)
    }
}

/// Format seconds as zero padded `MM:SS`
pub fn time_format(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
