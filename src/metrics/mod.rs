//! Password metrics
//!
//! Each metric analyzes a specific statistical aspect of the password.

mod repetition;
mod sequence;

pub use repetition::max_repetition_count;
pub use sequence::max_sequence_length;

/// Metrics computed from a password analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordMetrics {
    /// Occurrence count of the most repeated character (case-sensitive).
    pub max_repetition_count: usize,
    /// Longest ascending/descending alphanumeric run (case-insensitive).
    pub max_sequence_length: usize,
}

impl PasswordMetrics {
    /// Checks both metrics against the supplied maximums.
    pub fn is_within(&self, max_repetition: usize, max_sequence: usize) -> bool {
        self.max_repetition_count <= max_repetition && self.max_sequence_length <= max_sequence
    }
}
