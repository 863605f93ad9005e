use anchor_lang::prelude::*;

pub const DAY_SECONDS: i64 = 86_400;

/// Harvesting reopens every 14 days.
pub const DEFAULT_HARVEST_CYCLE_SECS: i64 = 14 * DAY_SECONDS;

/// Harvesting stays open for the first day of each cycle.
pub const DEFAULT_HARVEST_WINDOW_SECS: i64 = DAY_SECONDS;

/// Recurring harvesting window aligned to multiples of `cycle_secs` since the epoch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarvestSchedule {
    pub cycle_secs: i64,
    pub window_secs: i64,
}

impl Default for HarvestSchedule {
    fn default() -> Self {
        Self {
            cycle_secs: DEFAULT_HARVEST_CYCLE_SECS,
            window_secs: DEFAULT_HARVEST_WINDOW_SECS,
        }
    }
}

impl HarvestSchedule {
    pub fn is_valid(&self) -> bool {
        self.cycle_secs > 0 && self.window_secs > 0 && self.window_secs <= self.cycle_secs
    }

    fn offset_in_cycle(&self, timestamp: i64) -> i64 {
        timestamp.rem_euclid(self.cycle_secs)
    }

    pub fn is_harvesting_period(&self, timestamp: i64) -> bool {
        self.offset_in_cycle(timestamp) < self.window_secs
    }

    /// Seconds until the next window opens; 0 while a window is open.
    pub fn time_until_next_window(&self, timestamp: i64) -> i64 {
        if self.is_harvesting_period(timestamp) {
            return 0;
        }
        self.cycle_secs - self.offset_in_cycle(timestamp)
    }

    /// Seconds until the current window closes, or `None` outside a window.
    pub fn window_closes_in(&self, timestamp: i64) -> Option<i64> {
        if !self.is_harvesting_period(timestamp) {
            return None;
        }
        Some(self.window_secs - self.offset_in_cycle(timestamp))
    }
}
