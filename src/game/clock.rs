use std::time::{Duration, Instant};

/// Fixed-interval gate decoupling gameplay ticks from render frames.
///
/// `poll` fires at most once per interval of wall-clock time, however often
/// the frame loop calls it. The firing time is carried as explicit state
/// rather than a process-wide global.
#[derive(Debug)]
pub struct TickGate {
    interval: Duration,
    last_update: Option<Instant>,
}

impl TickGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_update: None,
        }
    }

    /// True once `interval` has elapsed since the previous firing. The
    /// first poll only arms the gate.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_update {
            None => {
                self.last_update = Some(now);
                false
            }
            Some(last) if now.duration_since(last) >= self.interval => {
                self.last_update = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_arms_without_firing() {
        let mut gate = TickGate::new(Duration::from_millis(200));
        assert!(!gate.poll(Instant::now()));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut gate = TickGate::new(Duration::from_millis(200));
        let t0 = Instant::now();

        gate.poll(t0);
        assert!(!gate.poll(t0 + Duration::from_millis(199)));
        assert!(gate.poll(t0 + Duration::from_millis(200)));
        assert!(!gate.poll(t0 + Duration::from_millis(201)));
        assert!(gate.poll(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn test_rebases_on_fire_not_on_poll() {
        let mut gate = TickGate::new(Duration::from_millis(100));
        let t0 = Instant::now();

        gate.poll(t0);
        // Polls between firings must not push the next firing back
        assert!(!gate.poll(t0 + Duration::from_millis(50)));
        assert!(!gate.poll(t0 + Duration::from_millis(99)));
        assert!(gate.poll(t0 + Duration::from_millis(100)));
    }
}
