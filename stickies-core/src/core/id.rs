//! Time-derived note id assignment.

/// Issues opaque, time-derived note ids.
///
/// An id is the note's creation time in Unix milliseconds rendered as a
/// decimal string. Calls landing on the same millisecond get a `-N`
/// sequence suffix, and a clock reading earlier than the last issued stamp
/// is clamped forward, so ids stay unique even under rapid successive
/// creates.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_ms: i64,
    sequence: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id for a note created at `now_ms`.
    pub fn next(&mut self, now_ms: i64) -> String {
        let stamp = now_ms.max(self.last_ms);
        if stamp == self.last_ms {
            self.sequence += 1;
            format!("{}-{}", stamp, self.sequence)
        } else {
            self.last_ms = stamp;
            self.sequence = 0;
            stamp.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_milliseconds_yield_plain_stamps() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(1_000), "1000");
        assert_eq!(ids.next(1_001), "1001");
    }

    #[test]
    fn test_same_millisecond_gets_sequence_suffix() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(1_000), "1000");
        assert_eq!(ids.next(1_000), "1000-1");
        assert_eq!(ids.next(1_000), "1000-2");
        assert_eq!(ids.next(1_001), "1001");
    }

    #[test]
    fn test_backwards_clock_never_collides() {
        let mut ids = IdGenerator::new();
        let a = ids.next(2_000);
        let b = ids.next(1_500);
        let c = ids.next(1_500);
        assert_eq!(a, "2000");
        assert_eq!(b, "2000-1");
        assert_eq!(c, "2000-2");
    }

    #[test]
    fn test_rapid_calls_are_unique() {
        let mut ids = IdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..1_000 {
            // Exercise both repeated and advancing stamps.
            assert!(seen.insert(ids.next(5_000 + i / 10)));
        }
    }
}
