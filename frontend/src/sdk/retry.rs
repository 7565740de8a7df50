use std::rc::Rc;

use futures::channel::oneshot;

use super::host::ScriptHost;

/// Exponential backoff for readiness checks against third-party globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub first_delay_ms: u32,
    pub factor: u32,
    pub max_delay_ms: u32,
    /// Number of delayed re-checks after the immediate one.
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> u32 {
        let mut delay = self.first_delay_ms;
        for _ in 0..attempt {
            delay = delay.saturating_mul(self.factor);
            if delay >= self.max_delay_ms {
                return self.max_delay_ms;
            }
        }
        delay.min(self.max_delay_ms)
    }

    /// Worst-case time spent waiting before giving up.
    pub fn total_wait_ms(&self) -> u32 {
        (0..self.max_attempts).fold(0u32, |acc, attempt| acc.saturating_add(self.delay_for(attempt)))
    }
}

/// Checks `ready` now and then on the policy's schedule, reporting whether it
/// ever held. Timers go through `host` so tests can drive them by hand.
pub fn poll_until(
    host: Rc<dyn ScriptHost>,
    policy: RetryPolicy,
    ready: Rc<dyn Fn() -> bool>,
    done: Box<dyn FnOnce(bool)>,
) {
    attempt(host, policy, ready, done, 0);
}

fn attempt(
    host: Rc<dyn ScriptHost>,
    policy: RetryPolicy,
    ready: Rc<dyn Fn() -> bool>,
    done: Box<dyn FnOnce(bool)>,
    tries: u32,
) {
    if ready() {
        done(true);
        return;
    }
    if tries >= policy.max_attempts {
        done(false);
        return;
    }

    let delay = policy.delay_for(tries);
    let next_host = host.clone();
    host.set_timeout(
        delay,
        Box::new(move || attempt(next_host, policy, ready, done, tries + 1)),
    );
}

/// Future flavour of [`poll_until`].
pub async fn wait_until(
    host: Rc<dyn ScriptHost>,
    policy: RetryPolicy,
    ready: Rc<dyn Fn() -> bool>,
) -> bool {
    let (tx, rx) = oneshot::channel();
    poll_until(
        host,
        policy,
        ready,
        Box::new(move |ok| {
            let _ = tx.send(ok);
        }),
    );
    rx.await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::testing::FakeHost;
    use std::cell::Cell;

    fn policy() -> RetryPolicy {
        RetryPolicy {
            first_delay_ms: 100,
            factor: 2,
            max_delay_ms: 1_600,
            max_attempts: 8,
        }
    }

    #[test]
    fn test_delays_grow_and_cap() {
        let p = policy();
        let delays: Vec<u32> = (0..p.max_attempts).map(|a| p.delay_for(a)).collect();
        assert_eq!(delays, vec![100, 200, 400, 800, 1_600, 1_600, 1_600, 1_600]);
        assert_eq!(p.total_wait_ms(), 7_900);
    }

    #[test]
    fn test_ready_immediately_schedules_nothing() {
        let host = FakeHost::new();
        let result = Rc::new(Cell::new(None));
        let sink = result.clone();
        poll_until(
            host.clone(),
            policy(),
            Rc::new(|| true),
            Box::new(move |ok| sink.set(Some(ok))),
        );
        assert_eq!(result.get(), Some(true));
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let host = FakeHost::new();
        let checks = Rc::new(Cell::new(0u32));
        let result = Rc::new(Cell::new(None));

        let counter = checks.clone();
        let sink = result.clone();
        poll_until(
            host.clone(),
            policy(),
            Rc::new(move || {
                counter.set(counter.get() + 1);
                false
            }),
            Box::new(move |ok| sink.set(Some(ok))),
        );

        let waited = host.run_all_timers();
        assert_eq!(result.get(), Some(false));
        assert_eq!(checks.get(), policy().max_attempts + 1);
        assert_eq!(waited, policy().total_wait_ms());
    }

    #[test]
    fn test_stops_as_soon_as_predicate_holds() {
        let host = FakeHost::new();
        let checks = Rc::new(Cell::new(0u32));
        let result = Rc::new(Cell::new(None));

        let counter = checks.clone();
        let sink = result.clone();
        poll_until(
            host.clone(),
            policy(),
            Rc::new(move || {
                counter.set(counter.get() + 1);
                counter.get() == 3
            }),
            Box::new(move |ok| sink.set(Some(ok))),
        );

        host.run_all_timers();
        assert_eq!(result.get(), Some(true));
        assert_eq!(checks.get(), 3);
    }
}
