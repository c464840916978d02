use crate::expression::Step;

/// Outcome of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: u32,
    /// `None` when no derivation was ever recorded
    pub closest_result: Option<u32>,
    /// Steps in the order they were applied
    pub expression: Vec<Step>,
    /// Every best-so-far value, in the order it was recorded
    pub improvements: Vec<u32>,
    /// Search states visited; branches cut off by an exact match are not counted
    pub nodes_explored: u64,
}

impl Solution {
    pub fn is_exact(&self) -> bool {
        self.closest_result == Some(self.target)
    }

    pub fn difference(&self) -> Option<u32> {
        self.closest_result.map(|value| value.abs_diff(self.target))
    }
}
