//-
// Copyright (c) 2026, the gwgate developers
//
// This file is part of gwgate.
//
// gwgate is free software: you can  redistribute it and/or modify it under the
// terms of  the GNU General Public  License as published by  the Free Software
// Foundation, either version  3 of the License, or (at  your option) any later
// version.
//
// gwgate is distributed  in the hope that  it will be useful,  but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// gwgate. If not, see <http://www.gnu.org/licenses/>.

//! Adaptive throttling of backend connections.
//!
//! The throttle is a pool of timers. Taking a connection means checking
//! an expired timer out; finishing a request re-arms one. While requests
//! succeed the pool holds `max_requests_per_second` timers armed one
//! second out. Consecutive failures shrink the pool to a single timer
//! and double its delay per failure up to about 41 seconds, and one
//! success resets everything.

use std::cmp;
use std::collections::BinaryHeap;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rand::Rng;

use crate::support::error::Error;
use crate::support::system_config::ThrottleConfig;

// Consecutive-failure thresholds and the timer delay they escalate to.
const ESCALATION: &[(i32, i64)] = &[
    (1, 10),
    (2, 20),
    (3, 40),
    (4, 80),
    (5, 160),
    (6, 320),
    (7, 640),
    (8, 1280),
    (9, 2560),
    (10, 5120),
    (11, 10240),
    (12, 20480),
    (13, 40960),
];

const BASE_DELAY_MILLIS: i64 = 1000;

/// A time source, replaceable for tests.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis() as i64,
            Err(_) => 0,
        }
    }
}

struct State {
    // Expiry instants in epoch millis, earliest first
    timers: BinaryHeap<cmp::Reverse<i64>>,
    errors: i32,
}

pub struct ConnectionThrottle {
    state: Mutex<State>,
    available: Condvar,
    clock: Box<dyn Clock>,
    max_rps: usize,
    block_timeout: Duration,
    jitter_percent: f64,
}

fn delay_millis(errors: i32) -> i64 {
    if errors < 0 {
        // The error counter wrapped; assume the worst
        return ESCALATION[ESCALATION.len() - 1].1;
    }
    let mut result = BASE_DELAY_MILLIS;
    for &(threshold, delay) in ESCALATION {
        if threshold > errors {
            return result;
        }
        result = delay;
    }
    result
}

impl ConnectionThrottle {
    pub fn new(config: &ThrottleConfig) -> ConnectionThrottle {
        ConnectionThrottle::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(
        config: &ThrottleConfig,
        clock: Box<dyn Clock>,
    ) -> ConnectionThrottle {
        let max_rps = config.max_requests_per_second;
        let now = clock.now_millis();

        let mut timers = BinaryHeap::new();
        for _ in 0..max_rps {
            timers.push(cmp::Reverse(now));
        }

        ConnectionThrottle {
            state: Mutex::new(State { timers, errors: 0 }),
            available: Condvar::new(),
            clock,
            max_rps,
            block_timeout: Duration::from_millis(config.block_timeout_ms),
            jitter_percent: config.max_random_deviation_percent,
        }
    }

    /// True if the throttle was configured away entirely.
    pub fn disabled(&self) -> bool {
        self.max_rps == 0
    }

    fn target_size(&self, errors: i32) -> usize {
        if errors < 0 {
            return 1;
        }
        if errors < ESCALATION[0].0 {
            return self.max_rps;
        }
        1
    }

    /// Arms one more timer, unless the pool is already at its target
    /// size.
    fn rewind(&self, state: &mut State) {
        if state.timers.len() >= self.target_size(state.errors) {
            return;
        }

        let delay = delay_millis(state.errors);
        let jitter = (delay as f64
            * self.jitter_percent
            * (0.5 - rand::thread_rng().gen::<f64>())
            / 50.0) as i64;
        state
            .timers
            .push(cmp::Reverse(self.clock.now_millis() + delay + jitter));
        self.available.notify_one();
    }

    fn rebuild(&self, state: &mut State, refill_after_error: bool) {
        info!(
            "changing connection throttle to {} ms",
            delay_millis(state.errors)
        );

        let num = if refill_after_error {
            if state.timers.is_empty() {
                self.target_size(state.errors) - 1
            } else {
                self.target_size(state.errors)
            }
        } else {
            cmp::min(state.timers.len(), self.target_size(state.errors))
        };

        state.timers.clear();
        for _ in 0..num {
            self.rewind(state);
        }
    }

    /// Arms one timer back after a request, restoring the pool towards
    /// its target size.
    pub fn rewind_timer(&self) {
        if self.disabled() {
            return;
        }
        let mut state = self.state.lock().unwrap();
        self.rewind(&mut state);
    }

    /// Takes one expired timer, blocking while none is available. Gives
    /// up after the configured block timeout.
    pub fn checkout_timer(&self) -> Result<(), Error> {
        if self.disabled() {
            return Ok(());
        }

        let started = Instant::now();
        let mut state = self.state.lock().unwrap();
        loop {
            let now = self.clock.now_millis();

            if let Some(&cmp::Reverse(head)) = state.timers.peek() {
                if head <= now {
                    state.timers.pop();
                    debug!(
                        "checkout took {} ms",
                        started.elapsed().as_millis()
                    );
                    return Ok(());
                }
            }

            let remaining = match self
                .block_timeout
                .checked_sub(started.elapsed())
            {
                Some(r) if r > Duration::from_millis(0) => r,
                _ => return Err(Error::ThrottleTimeout),
            };

            // Wake when the nearest timer could have expired, or when
            // the block timeout runs out
            let wait = match state.timers.peek() {
                Some(&cmp::Reverse(head)) => cmp::min(
                    remaining,
                    Duration::from_millis(cmp::max(head - now, 1) as u64),
                ),
                None => remaining,
            };
            let (next, _) =
                self.available.wait_timeout(state, wait).unwrap();
            state = next;
        }
    }

    /// Resets the error counter; if the delay level changes, the pool is
    /// rebuilt at full size.
    pub fn report_success(&self) {
        if self.disabled() {
            return;
        }

        let mut state = self.state.lock().unwrap();
        let old_delay = delay_millis(state.errors);
        state.errors = 0;
        if delay_millis(state.errors) != old_delay {
            self.rebuild(&mut state, true);
        }
    }

    /// Counts one more consecutive failure; if the delay level changes,
    /// the pool is rebuilt (shrunk) at the new delay.
    pub fn report_failure(&self) {
        if self.disabled() {
            return;
        }

        let mut state = self.state.lock().unwrap();
        let old_delay = delay_millis(state.errors);
        state.errors = state.errors.wrapping_add(1);
        if delay_millis(state.errors) != old_delay {
            self.rebuild(&mut state, false);
        }
    }

    #[cfg(test)]
    fn timers_len(&self) -> usize {
        self.state.lock().unwrap().timers.len()
    }

    #[cfg(test)]
    fn head_delay_millis(&self) -> i64 {
        let state = self.state.lock().unwrap();
        match state.timers.peek() {
            Some(&cmp::Reverse(head)) => {
                cmp::max(head - self.clock.now_millis(), 0)
            },
            None => panic!("no timers in pool"),
        }
    }

    #[cfg(test)]
    fn set_errors(&self, errors: i32) {
        self.state.lock().unwrap().errors = errors;
    }
}
