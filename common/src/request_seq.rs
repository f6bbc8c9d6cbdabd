//! Supersession guard for in-flight listing requests.
//!
//! Exactly one request is authoritative at a time. Issuing a new request
//! hands out a fresh sequence number and silently retires every earlier
//! one; a completion presents the number it was issued with and is only
//! applied while that number is still current.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSequence {
    current: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Start a new request, superseding all earlier ones. Returns the
    /// number the completion must present.
    pub fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a completion carrying `seq` is still authoritative.
    pub fn is_current(&self, seq: u64) -> bool {
        self.current == seq
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_issuance_is_authoritative() {
        let mut sequence = RequestSequence::new();
        let seq = sequence.issue();
        assert!(sequence.is_current(seq));
    }

    #[test]
    fn older_completion_is_discarded_after_a_newer_issuance() {
        // page 2 requested, then the filters change before it lands: the
        // late page 2 response must not overwrite the newer results
        let mut sequence = RequestSequence::new();
        let stale = sequence.issue();
        let fresh = sequence.issue();
        assert!(!sequence.is_current(stale));
        assert!(sequence.is_current(fresh));
    }

    #[test]
    fn completions_arriving_out_of_order_keep_only_the_newest() {
        let mut sequence = RequestSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();
        let third = sequence.issue();
        // whatever order they land in, only the third applies
        assert!(sequence.is_current(third));
        assert!(!sequence.is_current(second));
        assert!(!sequence.is_current(first));
    }
}
