//! Coalesces refresh requests into single layout passes.
//!
//! Handlers only mark a refresh as wanted. The event loop runs one pass once the current batch
//! of events has been applied, so a burst of mutations (e.g. many windows mapping during a
//! workspace switch) costs a single layout pass.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshScheduler {
    pending: bool,
    in_flight: bool,
    coalesced: usize,
}

impl RefreshScheduler {
    /// Marks a refresh as wanted. Returns true if this created the pending pass, false if it
    /// was folded into one already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Takes the pending pass. Fails while another pass is running; the request then stays
    /// pending for the next turn.
    pub fn begin(&mut self) -> bool {
        if self.in_flight || !self.pending {
            return false;
        }
        if self.coalesced > 0 {
            tracing::trace!("Coalesced {} refresh requests", self.coalesced);
        }
        self.pending = false;
        self.in_flight = true;
        self.coalesced = 0;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_requests_make_one_pass() {
        let mut scheduler = RefreshScheduler::default();
        assert!(scheduler.request());
        assert!(!scheduler.request());
        assert!(!scheduler.request());
        assert!(scheduler.begin());
        scheduler.finish();
        assert!(!scheduler.begin());
    }

    #[test]
    fn nothing_requested_means_no_pass() {
        let mut scheduler = RefreshScheduler::default();
        assert!(!scheduler.begin());
    }

    #[test]
    fn requests_during_a_pass_wait_for_the_next_one() {
        let mut scheduler = RefreshScheduler::default();
        scheduler.request();
        assert!(scheduler.begin());
        assert!(scheduler.is_in_flight());
        assert!(scheduler.request());
        assert!(!scheduler.begin(), "passes must not overlap");
        scheduler.finish();
        assert!(scheduler.begin());
        scheduler.finish();
        assert!(!scheduler.is_pending());
    }
}
