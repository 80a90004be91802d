use std::fmt;

/// Every horizon allowed by a [`GrowthPolicy`](crate::GrowthPolicy) was
/// tried without finding a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// The largest multiplier that was tried.
    pub ceiling: u32,
    /// How many attempts were made.
    pub attempts: usize,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no route found after {} attempts (multiplier ceiling {})",
            self.attempts, self.ceiling
        )
    }
}

impl std::error::Error for CapacityExceeded {}
