//! Trailing-edge debounce for the free-text search field.
//!
//! Every new value takes out a fresh ticket and supersedes the previous
//! one; a timer that comes back with a stale ticket finds nothing to emit.
//! Only the final value of a burst survives, emitted once the quiet
//! interval elapses.

/// Ticket-based debounce state. The caller owns the clock: it calls
/// [`submit`](Self::submit) on each input, waits out the interval, then
/// redeems the ticket with [`take_if_current`](Self::take_if_current).
#[derive(Debug, Clone, Default)]
pub struct TrailingDebounce<T> {
    pending: Option<(T, u64)>,
    next_ticket: u64,
}

impl<T> TrailingDebounce<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            next_ticket: 0,
        }
    }

    /// Record a new value, superseding any pending one, and return the
    /// ticket that redeems it.
    pub fn submit(&mut self, value: T) -> u64 {
        self.next_ticket += 1;
        self.pending = Some((value, self.next_ticket));
        self.next_ticket
    }

    /// Drop the pending value without emitting it. Outstanding tickets all
    /// become stale.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Redeem a ticket. Yields the pending value only if no newer submit
    /// happened in the meantime; stale tickets yield nothing.
    pub fn take_if_current(&mut self, ticket: u64) -> Option<T> {
        match &self.pending {
            Some((_, current)) if *current == ticket => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_keystrokes_emits_only_the_final_value() {
        // "p", "pi", "piz", "pizz", "pizza" typed 100ms apart with a 300ms
        // interval: each keystroke lands before the previous ticket is
        // redeemed, so only the last one survives.
        let mut debounce = TrailingDebounce::new();
        let mut emitted = Vec::new();

        let tickets: Vec<u64> = ["p", "pi", "piz", "pizz", "pizza"]
            .iter()
            .map(|value| debounce.submit(value.to_string()))
            .collect();

        // Timers fire in submission order; all but the last are stale.
        for ticket in tickets {
            if let Some(value) = debounce.take_if_current(ticket) {
                emitted.push(value);
            }
        }

        assert_eq!(emitted, vec!["pizza".to_string()]);
    }

    #[test]
    fn quiet_interval_emits_the_value() {
        let mut debounce = TrailingDebounce::new();
        let ticket = debounce.submit("sushi".to_string());
        assert_eq!(debounce.take_if_current(ticket), Some("sushi".to_string()));
    }

    #[test]
    fn ticket_redeems_at_most_once() {
        let mut debounce = TrailingDebounce::new();
        let ticket = debounce.submit(1);
        assert_eq!(debounce.take_if_current(ticket), Some(1));
        assert_eq!(debounce.take_if_current(ticket), None);
    }

    #[test]
    fn revert_to_the_settled_value_cancels_the_pending_emission() {
        // "a" typed then deleted within the interval: the input is back at
        // the settled value, so the outstanding "a" ticket must not emit
        // when its timer fires.
        let mut debounce = TrailingDebounce::new();
        let ticket = debounce.submit("a".to_string());
        debounce.cancel();
        assert_eq!(debounce.take_if_current(ticket), None);

        // a later change still goes through normally
        let ticket = debounce.submit("ab".to_string());
        assert_eq!(debounce.take_if_current(ticket), Some("ab".to_string()));
    }

    #[test]
    fn stale_ticket_after_newer_submit_yields_nothing() {
        let mut debounce = TrailingDebounce::new();
        let old = debounce.submit("a");
        let new = debounce.submit("b");
        assert_eq!(debounce.take_if_current(old), None);
        assert_eq!(debounce.take_if_current(new), Some("b"));
    }
}
