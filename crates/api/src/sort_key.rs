//! Monotonic sort key generation for manually ordered records.

use std::sync::Mutex;

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

/// Produces opaque, strictly lexicographically increasing keys.
///
/// Keys concatenate a zero-padded millisecond timestamp, a per-millisecond
/// counter, and a short random suffix to avoid collisions across processes.
/// The timestamp never moves backwards even if the wall clock does, so keys
/// from one generator always sort in generation order.
pub struct SortKeyGenerator {
    state: Mutex<GenState>,
}

// Largest value the zero-padded counter field can hold.
const MAX_COUNTER: u32 = 999_999;

struct GenState {
    last_ms: i64,
    counter: u32,
}

impl SortKeyGenerator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GenState {
                last_ms: 0,
                counter: 0,
            }),
        }
    }

    pub fn generate(&self) -> String {
        let now_ms = Utc::now().timestamp_millis();
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if now_ms > state.last_ms {
            state.last_ms = now_ms;
            state.counter = 0;
        } else if state.counter < MAX_COUNTER {
            state.counter += 1;
        } else {
            // A full counter would widen past its padding and break the
            // lexicographic order; borrow the next millisecond instead.
            state.last_ms += 1;
            state.counter = 0;
        }
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(4)
            .map(char::from)
            .collect();
        format!(
            "{:013}.{:06}.{}",
            state.last_ms,
            state.counter,
            suffix.to_lowercase()
        )
    }
}

impl Default for SortKeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_strictly_increasing() {
        let gen = SortKeyGenerator::new();
        let keys: Vec<String> = (0..1_000).map(|_| gen.generate()).collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn burst_within_one_millisecond_stays_ordered() {
        let gen = SortKeyGenerator::new();
        // 50 keys comfortably fit in one millisecond on any machine; the
        // counter component must keep them ordered regardless.
        let keys: Vec<String> = (0..50).map(|_| gen.generate()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn full_counter_borrows_the_next_millisecond() {
        let gen = SortKeyGenerator::new();
        // Pin the state far enough ahead that the wall clock cannot advance
        // past it, with the counter already at its ceiling.
        let future_ms = Utc::now().timestamp_millis() + 60_000;
        {
            let mut state = gen.state.lock().unwrap();
            state.last_ms = future_ms;
            state.counter = MAX_COUNTER;
        }
        let last_full = format!("{:013}.{:06}.zzzz", future_ms, MAX_COUNTER);
        let key = gen.generate();
        assert!(key > last_full, "{} !> {}", key, last_full);
        assert!(key.starts_with(&format!("{:013}.000000.", future_ms + 1)));
    }

    #[test]
    fn keys_have_fixed_width_prefix() {
        let gen = SortKeyGenerator::new();
        let key = gen.generate();
        let parts: Vec<&str> = key.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 13);
        assert_eq!(parts[1].len(), 6);
        assert_eq!(parts[2].len(), 4);
    }
}
