//! Per-tick performance metrics for the simulation driver.

/// Timing and size data collected during a single tick.
///
/// All durations are in microseconds. The driver overwrites these fields
/// after each committed tick; consumers read them from the most recent tick
/// (or from a published [`WorldSnapshot`](crate::WorldSnapshot) in realtime
/// mode).
///
/// `apply_us` matches `last_tick_duration()` — the commit phase only. The
/// rule phase and the whole tick are reported under their own names so the
/// narrower measurement keeps its original meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Time spent computing the rule's delta, in microseconds.
    pub rule_us: u64,
    /// Time spent committing the delta into the live set, in microseconds.
    pub apply_us: u64,
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Coordinates actually inserted this tick.
    pub births: usize,
    /// Coordinates actually removed this tick.
    pub deaths: usize,
    /// Population size after the commit.
    pub population: usize,
}
