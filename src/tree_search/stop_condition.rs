use std::fmt;
use std::time::{Duration, Instant};

/// Decides, between expansion steps, whether an expansion run should halt.
#[derive(Clone, Debug, PartialEq)]
pub enum StopCondition {
    /// Stop once this many frontier nodes have been sampled.
    MaxSamples(usize),
    /// Stop once `limit` has elapsed since the last call to `start`.
    MaxTime {
        limit: Duration,
        started_at: Option<Instant>,
    },
    /// Stop as soon as any frontier node is deeper than this many plies.
    MaxDepth(usize),
}

impl StopCondition {
    pub fn max_time(limit: Duration) -> Self {
        StopCondition::MaxTime {
            limit,
            started_at: None,
        }
    }

    /// Resets per-run state. Called once at the beginning of every expansion run.
    pub fn start(&mut self) {
        if let StopCondition::MaxTime { started_at, .. } = self {
            *started_at = Some(Instant::now());
        }
    }

    pub fn should_stop<I>(&self, samples: usize, mut frontier_depths: I) -> bool
    where
        I: Iterator<Item = usize>,
    {
        match self {
            StopCondition::MaxSamples(max) => samples >= *max,
            StopCondition::MaxTime { limit, started_at } => match started_at {
                Some(started_at) => started_at.elapsed() >= *limit,
                None => false,
            },
            StopCondition::MaxDepth(max) => frontier_depths.any(|depth| depth > *max),
        }
    }
}

impl fmt::Display for StopCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopCondition::MaxSamples(max) => write!(f, "{} samples", max),
            StopCondition::MaxTime { limit, .. } => write!(f, "{:?}", limit),
            StopCondition::MaxDepth(max) => write!(f, "depth {}", max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_samples() {
        let stop = StopCondition::MaxSamples(3);
        assert!(!stop.should_stop(2, std::iter::empty()));
        assert!(stop.should_stop(3, std::iter::empty()));
        assert!(stop.should_stop(4, std::iter::empty()));
    }

    #[test]
    fn test_max_depth_checks_frontier() {
        let stop = StopCondition::MaxDepth(2);
        assert!(!stop.should_stop(100, vec![0, 1, 2].into_iter()));
        assert!(stop.should_stop(0, vec![1, 3].into_iter()));
        assert!(!stop.should_stop(0, std::iter::empty()));
    }

    #[test]
    fn test_max_time_waits_for_start() {
        let mut stop = StopCondition::max_time(Duration::from_secs(0));
        assert!(!stop.should_stop(0, std::iter::empty()));
        stop.start();
        assert!(stop.should_stop(0, std::iter::empty()));
    }

    #[test]
    fn test_max_time_restarts_clock() {
        let mut stop = StopCondition::max_time(Duration::from_secs(3600));
        stop.start();
        let first = match stop {
            StopCondition::MaxTime { started_at, .. } => started_at,
            _ => unreachable!(),
        };
        std::thread::sleep(Duration::from_millis(2));
        stop.start();
        let second = match stop {
            StopCondition::MaxTime { started_at, .. } => started_at,
            _ => unreachable!(),
        };
        assert!(second > first);
        assert!(!stop.should_stop(0, std::iter::empty()));
    }
}
