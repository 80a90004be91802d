//! Retry policy for searches over a bounded time horizon.
//!
//! A time-expanded field only covers a finite number of ticks. When a
//! search over it is exhausted, the caller rebuilds the field with a larger
//! multiplier and tries again, up to a ceiling.

use crate::error::CapacityExceeded;

/// How the horizon multiplier grows between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthPolicy {
    /// Multiplier for the first attempt.
    pub initial: u32,
    /// Factor applied after each failed attempt. Values below 2 are
    /// treated as 2.
    pub factor: u32,
    /// No attempt is made beyond the first multiplier `>= ceiling`.
    pub ceiling: u32,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::crossing()
    }
}

impl GrowthPolicy {
    /// Policy for a single crossing: 4, 16, ... up to 1024.
    pub const fn crossing() -> Self {
        Self {
            initial: 4,
            factor: 4,
            ceiling: 1024,
        }
    }

    /// Policy for a multi-leg round trip: 16, 64, ... up to 4096.
    pub const fn round_trip() -> Self {
        Self {
            initial: 16,
            factor: 4,
            ceiling: 4096,
        }
    }

    /// The multipliers that will be tried, in order.
    pub fn multipliers(&self) -> impl Iterator<Item = u32> {
        let factor = self.factor.max(2);
        let ceiling = self.ceiling;
        std::iter::successors(Some(self.initial.max(1)), move |&m| {
            (m < ceiling).then(|| m.saturating_mul(factor))
        })
    }

    /// Call `attempt` with each multiplier until it returns `Some`.
    pub fn run<T>(
        &self,
        mut attempt: impl FnMut(u32) -> Option<T>,
    ) -> Result<T, CapacityExceeded> {
        let mut attempts = 0;
        let mut last = self.initial;
        for m in self.multipliers() {
            if attempts > 0 {
                log::info!("growth: no route at multiplier {last}, retrying with {m}");
            }
            attempts += 1;
            last = m;
            if let Some(found) = attempt(m) {
                return Ok(found);
            }
        }
        log::warn!("growth: gave up after {attempts} attempts at multiplier {last}");
        Err(CapacityExceeded {
            ceiling: last,
            attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_multipliers() {
        let ms: Vec<_> = GrowthPolicy::crossing().multipliers().collect();
        assert_eq!(ms, [4, 16, 64, 256, 1024]);
    }

    #[test]
    fn round_trip_multipliers() {
        let ms: Vec<_> = GrowthPolicy::round_trip().multipliers().collect();
        assert_eq!(ms, [16, 64, 256, 1024, 4096]);
    }

    #[test]
    fn ceiling_need_not_be_a_power_of_the_factor() {
        let p = GrowthPolicy {
            initial: 3,
            factor: 4,
            ceiling: 20,
        };
        let ms: Vec<_> = p.multipliers().collect();
        assert_eq!(ms, [3, 12, 48]);
    }

    #[test]
    fn initial_above_ceiling_still_tries_once() {
        let p = GrowthPolicy {
            initial: 8,
            factor: 4,
            ceiling: 2,
        };
        assert_eq!(p.multipliers().count(), 1);
    }

    #[test]
    fn degenerate_factor_still_grows() {
        let p = GrowthPolicy {
            initial: 1,
            factor: 1,
            ceiling: 8,
        };
        let ms: Vec<_> = p.multipliers().collect();
        assert_eq!(ms, [1, 2, 4, 8]);
    }

    #[test]
    fn run_stops_at_first_success() {
        let mut seen = Vec::new();
        let got = GrowthPolicy::crossing().run(|m| {
            seen.push(m);
            (m >= 64).then_some(m * 10)
        });
        assert_eq!(got, Ok(640));
        assert_eq!(seen, [4, 16, 64]);
    }

    #[test]
    fn run_reports_capacity_exceeded() {
        let err = GrowthPolicy::crossing().run(|_| None::<()>).unwrap_err();
        assert_eq!(
            err,
            CapacityExceeded {
                ceiling: 1024,
                attempts: 5
            }
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn policy_round_trip() {
        let p = GrowthPolicy::round_trip();
        let json = serde_json::to_string(&p).unwrap();
        let back: GrowthPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
