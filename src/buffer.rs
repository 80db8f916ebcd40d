//! Fixed-capacity circular history buffer.
//!
//! Supplies the "oldest retained value" that windowed filters need without
//! ever growing. Every push is O(1): overwrite the slot under the cursor,
//! hand back the previous occupant, advance modulo capacity.
//!
//! Priming: on the very first push, every slot is filled with that first
//! value before the real insertion. A zero-initialized buffer would bias a
//! running sum toward zero for the first `capacity` samples; a primed buffer
//! behaves as if the stream had always carried the first value.

use crate::error::ConfigError;

/// Ring buffer of scalar samples with eager first-push priming.
///
/// Once primed, all slots hold valid values at all times, so the buffer is
/// logically full from the first push onward and eviction order is strictly
/// FIFO.
#[derive(Debug, Clone)]
pub struct CircularHistoryBuffer {
    slots: Vec<f32>,
    cursor: usize,
    pushes: u64,
    primed: bool,
}

impl CircularHistoryBuffer {
    /// Creates a buffer with the given fixed capacity.
    ///
    /// Fails with `ConfigError::InvalidCapacity` for capacity 0. Capacity
    /// never changes after construction.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(Self {
            slots: vec![0.0; capacity],
            cursor: 0,
            pushes: 0,
            primed: false,
        })
    }

    /// Inserts `value` at the cursor and returns the evicted occupant.
    ///
    /// The first push ever primes the whole buffer with `value`, so the
    /// first `capacity` evictions all return the priming value.
    pub fn push(&mut self, value: f32) -> f32 {
        // Explicit flag rather than a count comparison keeps the priming
        // branch testable in isolation.
        if !self.primed {
            self.prime(value);
        }

        let evicted = self.slots[self.cursor];
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.pushes += 1;
        evicted
    }

    /// Fills every slot with `value`.
    fn prime(&mut self, value: f32) {
        self.slots.fill(value);
        self.primed = true;
    }

    /// The fixed capacity. The buffer is logically full once primed, so
    /// length and capacity coincide.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// A buffer never reports empty; it exists to always hold history.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the first push has happened yet.
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// Total number of pushes so far.
    pub fn pushes(&self) -> u64 {
        self.pushes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            CircularHistoryBuffer::new(0).unwrap_err(),
            ConfigError::InvalidCapacity
        );
    }

    #[test]
    fn test_len_is_constant() {
        let mut buffer = CircularHistoryBuffer::new(4).unwrap();
        assert_eq!(buffer.len(), 4);
        buffer.push(1.0);
        buffer.push(2.0);
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn test_first_push_primes_all_slots() {
        let mut buffer = CircularHistoryBuffer::new(3).unwrap();
        assert!(!buffer.is_primed());

        // The priming push evicts the priming value itself.
        assert_eq!(buffer.push(7.0), 7.0);
        assert!(buffer.is_primed());

        // Remaining primed slots evict 7.0 before anything newer shows up.
        assert_eq!(buffer.push(1.0), 7.0);
        assert_eq!(buffer.push(2.0), 7.0);
        assert_eq!(buffer.push(3.0), 1.0);
    }

    #[test]
    fn test_fifo_eviction_after_priming() {
        // Prime with v, then push v2 repeatedly: v comes back exactly
        // `capacity` times, then v2 forever.
        let capacity = 5;
        let mut buffer = CircularHistoryBuffer::new(capacity).unwrap();

        buffer.push(1.0); // priming push, evicts 1.0

        for _ in 0..capacity {
            assert_eq!(buffer.push(2.0), 1.0);
        }
        for _ in 0..capacity * 2 {
            assert_eq!(buffer.push(2.0), 2.0);
        }
    }

    #[test]
    fn test_push_count() {
        let mut buffer = CircularHistoryBuffer::new(2).unwrap();
        assert_eq!(buffer.pushes(), 0);
        buffer.push(0.5);
        buffer.push(0.5);
        buffer.push(0.5);
        assert_eq!(buffer.pushes(), 3);
    }

    #[test]
    fn test_capacity_one() {
        let mut buffer = CircularHistoryBuffer::new(1).unwrap();
        assert_eq!(buffer.push(4.0), 4.0);
        assert_eq!(buffer.push(5.0), 4.0);
        assert_eq!(buffer.push(6.0), 5.0);
    }
}
