use core::time::Duration;

/// Pacing authority used to space calibration samples evenly in time.
///
pub trait SlotTimer
{
    /// Monotonic time since an arbitrary, fixed origin.
    fn now(&mut self) -> Duration;

    /// Blocks until the next slot boundary, see [`next_slot_boundary`]. Taking the reference
    /// before doing any bus I/O makes the wait absorb the time that I/O took.
    fn wait_for_slot(&mut self, slot: Duration, reference: Duration);
}

/// The first boundary `reference + k * slot` (with `k >= 1`) that is not earlier than `now`.
///
/// When the work done since `reference` overran one or more slots the missed boundaries are
/// skipped instead of being caught up on. A zero length slot never waits.
///
pub fn next_slot_boundary(slot: Duration, reference: Duration, now: Duration) -> Duration {
    if slot.is_zero() {
        return now;
    }
    let slot_ns = slot.as_nanos();
    let elapsed_ns = now.saturating_sub(reference).as_nanos();
    let slots = elapsed_ns.div_ceil(slot_ns).max(1);
    let offset = u64::try_from(slots * slot_ns).unwrap_or(u64::MAX);
    reference.saturating_add(Duration::from_nanos(offset))
}

/// [`SlotTimer`] backed by the operating system's monotonic clock.
///
#[cfg(any(test, feature = "std"))]
pub struct StdSlotTimer
{
    origin: std::time::Instant,
}

#[cfg(any(test, feature = "std"))]
impl StdSlotTimer
{
    pub fn new() -> Self {
        StdSlotTimer { origin: std::time::Instant::now() }
    }
}

#[cfg(any(test, feature = "std"))]
impl Default for StdSlotTimer {
    fn default() -> Self {
        StdSlotTimer::new()
    }
}

#[cfg(any(test, feature = "std"))]
impl SlotTimer for StdSlotTimer
{
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }

    fn wait_for_slot(&mut self, slot: Duration, reference: Duration) {
        let now = self.now();
        let boundary = next_slot_boundary(slot, reference, now);
        if boundary > now {
            std::thread::sleep(boundary - now);
        }
    }
}
