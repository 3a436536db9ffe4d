//! Bounded FIFO of recent performance samples
//!
//! Each player owns one history. The engine never shares a history between
//! sessions.

use crate::core::constants::HISTORY_CAPACITY;
use crate::core::types::PerformanceSample;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHistory {
    samples: VecDeque<PerformanceSample>,
    capacity: usize,
}

impl PerformanceHistory {
    /// Create an empty history holding at most `HISTORY_CAPACITY` samples
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest ones beyond capacity
    pub fn push(&mut self, sample: PerformanceSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples in arrival order, oldest first
    pub fn samples(&self) -> Vec<PerformanceSample> {
        self.samples.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PerformanceSample> + ExactSizeIterator {
        self.samples.iter()
    }

    /// Contiguous view of the samples, oldest first
    pub fn as_slice(&mut self) -> &[PerformanceSample] {
        self.samples.make_contiguous()
    }

    pub fn latest(&self) -> Option<&PerformanceSample> {
        self.samples.back()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for PerformanceHistory {
    fn default() -> Self {
        Self::new()
    }
}
