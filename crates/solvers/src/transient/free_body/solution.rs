use super::Sample;

/// The result of a free-body run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Samples from each step, including the initial state, in time order.
    pub history: Vec<Sample>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// The last sample of the run.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.history.last()
    }
}
