//! The clock puzzle: turn the hand of an `hours`-hour clock from one hour to another.

use std::fmt::{self, Display};

use breadthwise_solver::Configuration;

/// Errors that can occur when setting up a clock puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClockError {
    /// The clock has no hours.
    #[display("a clock needs at least one hour")]
    NoHours,
    /// The start or goal hour is not on the dial.
    #[display("{what} hour {hour} is not between 1 and {hours}")]
    HourOutOfRange {
        /// Which hour was invalid (`"start"` or `"goal"`).
        what: &'static str,
        /// The invalid hour.
        hour: u32,
        /// The number of hours on the clock.
        hours: u32,
    },
}

/// The hand of a clock with hours `1..=hours`.
///
/// Each move turns the hand back or forward by one hour, wrapping around the
/// dial.
///
/// # Examples
///
/// ```
/// use breadthwise_puzzles::ClockConfiguration;
///
/// let start = ClockConfiguration::new(12, 2, 11)?;
/// let path = breadthwise_solver::solve(start).into_path().unwrap();
/// let hours: Vec<u32> = path.iter().map(ClockConfiguration::current).collect();
/// assert_eq!(hours, vec![2, 1, 12, 11]);
/// # Ok::<(), breadthwise_puzzles::ClockError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockConfiguration {
    hours: u32,
    goal: u32,
    current: u32,
}

impl ClockConfiguration {
    /// Creates a clock showing `start` that is solved when it shows `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::NoHours`] if `hours` is zero, or
    /// [`ClockError::HourOutOfRange`] if `start` or `goal` is not in `1..=hours`.
    pub fn new(hours: u32, start: u32, goal: u32) -> Result<Self, ClockError> {
        if hours == 0 {
            return Err(ClockError::NoHours);
        }
        for (what, hour) in [("start", start), ("goal", goal)] {
            if !(1..=hours).contains(&hour) {
                return Err(ClockError::HourOutOfRange { what, hour, hours });
            }
        }
        Ok(Self {
            hours,
            goal,
            current: start,
        })
    }

    /// Returns the number of hours on the dial.
    #[must_use]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the hour the hand points at.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Returns the hour the hand must reach.
    #[must_use]
    pub fn goal(&self) -> u32 {
        self.goal
    }

    fn pointing_at(&self, current: u32) -> Self {
        Self {
            current,
            ..self.clone()
        }
    }
}

impl Configuration for ClockConfiguration {
    fn neighbors(&self) -> Vec<Self> {
        let back = if self.current == 1 {
            self.hours
        } else {
            self.current - 1
        };
        let forward = if self.current == self.hours {
            1
        } else {
            self.current + 1
        };

        let mut neighbors = Vec::with_capacity(2);
        for hour in [back, forward] {
            if hour != self.current && neighbors.iter().all(|n: &Self| n.current != hour) {
                neighbors.push(self.pointing_at(hour));
            }
        }
        neighbors
    }

    fn is_goal(&self) -> bool {
        self.current == self.goal
    }
}

impl Display for ClockConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.current, f)
    }
}

#[cfg(test)]
mod tests {
    use breadthwise_solver::{solve, testing::assert_contract_within};
    use proptest::prelude::*;

    use super::*;

    fn hours_of(path: &[ClockConfiguration]) -> Vec<u32> {
        path.iter().map(ClockConfiguration::current).collect()
    }

    #[test]
    fn test_rejects_invalid_setup() {
        assert_eq!(ClockConfiguration::new(0, 1, 1), Err(ClockError::NoHours));
        assert_eq!(
            ClockConfiguration::new(12, 0, 5),
            Err(ClockError::HourOutOfRange {
                what: "start",
                hour: 0,
                hours: 12
            })
        );
        assert_eq!(
            ClockConfiguration::new(12, 5, 13),
            Err(ClockError::HourOutOfRange {
                what: "goal",
                hour: 13,
                hours: 12
            })
        );
    }

    #[test]
    fn test_neighbors_wrap_around() {
        let twelve = ClockConfiguration::new(12, 12, 1).unwrap();
        assert_eq!(hours_of(&twelve.neighbors()), vec![11, 1]);

        let one = ClockConfiguration::new(12, 1, 5).unwrap();
        assert_eq!(hours_of(&one.neighbors()), vec![12, 2]);
    }

    #[test]
    fn test_tiny_dials_have_no_duplicate_neighbors() {
        let single = ClockConfiguration::new(1, 1, 1).unwrap();
        assert!(single.neighbors().is_empty());

        let double = ClockConfiguration::new(2, 1, 2).unwrap();
        assert_eq!(hours_of(&double.neighbors()), vec![2]);
    }

    #[test]
    fn test_solve_twelve_hours_two_to_eleven() {
        let start = ClockConfiguration::new(12, 2, 11).unwrap();
        let outcome = solve(start);
        assert_eq!(outcome.moves(), Some(3));
        assert_eq!(hours_of(outcome.path().unwrap()), vec![2, 1, 12, 11]);
    }

    #[test]
    fn test_solve_forward_when_shorter() {
        let start = ClockConfiguration::new(12, 2, 4).unwrap();
        let outcome = solve(start);
        assert_eq!(hours_of(outcome.path().unwrap()), vec![2, 3, 4]);
    }

    #[test]
    fn test_start_on_goal() {
        let start = ClockConfiguration::new(12, 6, 6).unwrap();
        let outcome = solve(start);
        assert_eq!(outcome.moves(), Some(0));
        assert_eq!(outcome.stats().total_expansions(), 0);
    }

    #[test]
    fn test_render() {
        assert_eq!(ClockConfiguration::new(12, 7, 1).unwrap().to_string(), "7");
    }

    #[test]
    fn test_contract() {
        let start = ClockConfiguration::new(7, 3, 1).unwrap();
        assert_eq!(assert_contract_within(&start, 7), 7);
    }

    proptest! {
        #[test]
        fn prop_moves_are_circular_distance(hours in 1u32..60, start in 1u32..60, goal in 1u32..60) {
            prop_assume!(start <= hours && goal <= hours);
            let config = ClockConfiguration::new(hours, start, goal).unwrap();
            let diff = start.abs_diff(goal);
            let expected = diff.min(hours - diff);
            prop_assert_eq!(solve(config).moves(), Some(expected as usize));
        }
    }
}
