use crate::policy::HarvestSchedule;

/// Source of the current block height and timestamp. Both must be non-decreasing.
pub trait ChainClock {
    fn current_block(&self) -> u64;

    /// Seconds since the Unix epoch.
    fn current_timestamp(&self) -> i64;
}

/// Clock driven by hand, for local runs and tests.
///
/// Mirrors the controls a development chain exposes: mining empty blocks and
/// jumping the next block's timestamp forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    block: u64,
    timestamp: i64,
}

impl ManualClock {
    pub fn new(block: u64, timestamp: i64) -> Self {
        Self { block, timestamp }
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.block = self.block.saturating_add(blocks);
    }

    /// Negative offsets are ignored; time never runs backwards.
    pub fn advance_time(&mut self, seconds: i64) {
        self.timestamp = self.timestamp.saturating_add(seconds.max(0));
    }

    pub fn advance_time_and_block(&mut self, seconds: i64) {
        self.advance_time(seconds);
        self.advance_blocks(1);
    }

    /// Jumps to the opening of the next harvesting window (no-op inside one).
    pub fn advance_until_harvesting(&mut self, schedule: &HarvestSchedule) {
        self.advance_time(schedule.time_until_next_window(self.timestamp));
    }
}

impl ChainClock for ManualClock {
    fn current_block(&self) -> u64 {
        self.block
    }

    fn current_timestamp(&self) -> i64 {
        self.timestamp
    }
}
