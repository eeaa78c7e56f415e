//! Bounded sample history for the rolling charts
//!
//! Samples live in a fixed ring: `head` points at the oldest sample and
//! appends overwrite it once the ring is full.

/// Fixed-capacity FIFO of scalar samples
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: Box<[f32]>,
    /// Index of the oldest sample
    head: usize,
    len: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer. Capacity is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: vec![0.0; capacity.max(1)].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append a sample, evicting the oldest one when full.
    /// Returns the evicted sample, if any.
    pub fn push(&mut self, value: f32) -> Option<f32> {
        let cap = self.capacity();
        if self.len < cap {
            let tail = (self.head + self.len) % cap;
            self.samples[tail] = value;
            self.len += 1;
            None
        } else {
            let evicted = self.samples[self.head];
            self.samples[self.head] = value;
            self.head = (self.head + 1) % cap;
            Some(evicted)
        }
    }

    /// Sample at `index`, counted from the oldest
    pub fn get(&self, index: usize) -> Option<f32> {
        (index < self.len).then(|| self.samples[(self.head + index) % self.capacity()])
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<f32> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.len).map(move |i| self.samples[(self.head + i) % self.capacity()])
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

/// Velocity and acceleration histories, always appended together
#[derive(Debug, Clone)]
pub struct History {
    velocity: HistoryBuffer,
    acceleration: HistoryBuffer,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            velocity: HistoryBuffer::new(capacity),
            acceleration: HistoryBuffer::new(capacity),
        }
    }

    /// Record one tick's samples
    pub fn record(&mut self, velocity: f32, acceleration: f32) {
        self.velocity.push(velocity);
        self.acceleration.push(acceleration);
    }

    pub fn velocity(&self) -> &HistoryBuffer {
        &self.velocity
    }

    pub fn acceleration(&self) -> &HistoryBuffer {
        &self.acceleration
    }

    /// Number of ticks currently held (same for both series)
    pub fn len(&self) -> usize {
        self.velocity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocity.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_until_full() {
        let mut buf = HistoryBuffer::new(3);
        assert!(buf.is_empty());
        assert_eq!(buf.push(1.0), None);
        assert_eq!(buf.push(2.0), None);
        assert_eq!(buf.push(3.0), None);
        assert!(buf.is_full());
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_wraparound_evicts_oldest() {
        let mut buf = HistoryBuffer::new(3);
        for v in [1.0, 2.0, 3.0] {
            buf.push(v);
        }
        assert_eq!(buf.push(4.0), Some(1.0));
        assert_eq!(buf.push(5.0), Some(2.0));
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
        assert_eq!(buf.get(0), Some(3.0));
        assert_eq!(buf.latest(), Some(5.0));
        assert_eq!(buf.get(3), None);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut buf = HistoryBuffer::new(0);
        assert_eq!(buf.capacity(), 1);
        buf.push(7.0);
        assert_eq!(buf.push(8.0), Some(7.0));
        assert_eq!(buf.latest(), Some(8.0));
    }

    #[test]
    fn test_clear() {
        let mut buf = HistoryBuffer::new(2);
        buf.push(1.0);
        buf.push(2.0);
        buf.push(3.0);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.latest(), None);
        buf.push(9.0);
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![9.0]);
    }

    #[test]
    fn test_history_lockstep() {
        let mut history = History::new(300);
        for i in 0..450 {
            history.record(i as f32, 9.81);
        }
        assert_eq!(history.velocity().len(), 300);
        assert_eq!(history.acceleration().len(), 300);
        assert_eq!(history.velocity().get(0), Some(150.0));
        assert!(history.acceleration().iter().all(|a| a == 9.81));
    }

    proptest! {
        #[test]
        fn prop_matches_tail_of_input(
            capacity in 1usize..64,
            values in prop::collection::vec(-1000.0f32..1000.0, 0..256),
        ) {
            let mut buf = HistoryBuffer::new(capacity);
            for &v in &values {
                buf.push(v);
                prop_assert!(buf.len() <= capacity);
            }
            let start = values.len().saturating_sub(capacity);
            prop_assert_eq!(buf.iter().collect::<Vec<_>>(), values[start..].to_vec());
        }

        #[test]
        fn prop_full_push_evicts_exactly_oldest(
            capacity in 1usize..32,
            values in prop::collection::vec(-1000.0f32..1000.0, 1..128),
            next in -1000.0f32..1000.0,
        ) {
            let mut buf = HistoryBuffer::new(capacity);
            for &v in &values {
                buf.push(v);
            }
            let oldest = buf.get(0);
            let evicted = buf.push(next);
            if values.len() >= capacity {
                prop_assert_eq!(evicted, oldest);
            } else {
                prop_assert_eq!(evicted, None);
            }
            prop_assert_eq!(buf.latest(), Some(next));
        }
    }
}
