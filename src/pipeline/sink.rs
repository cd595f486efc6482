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

use std::marker::PhantomData;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, Receiver, Sender};
use log::warn;

use crate::support::error::Error;

/// A queue between two pipeline stages.
///
/// `accept` never blocks. `check_out` blocks briefly and answers `None`
/// when nothing arrived, so that worker threads regularly come up for air
/// and can notice shutdown. The stage that checked an item out reports
/// the outcome back; what a failure means is the sink's decision.
pub trait Sink<T>: Send + Sync {
    fn accept(&self, item: T);

    fn check_out(&self) -> Option<T>;

    fn report_success(&self, _item: T) {}

    fn report_failure(&self, _item: T, _error: &Error) {}
}

/// The standard sink: an unbounded FIFO channel. A failed item goes to
/// the back of the queue after a penalty pause, giving whatever caused
/// the failure time to recover.
pub struct SimpleSink<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
    checkout_timeout: Duration,
    penalty: Duration,
}

impl<T> SimpleSink<T> {
    pub fn new() -> SimpleSink<T> {
        SimpleSink::with_timings(
            Duration::from_millis(500),
            Duration::from_millis(5000),
        )
    }

    pub fn with_timings(
        checkout_timeout: Duration,
        penalty: Duration,
    ) -> SimpleSink<T> {
        let (tx, rx) = channel::unbounded();
        SimpleSink {
            tx,
            rx,
            checkout_timeout,
            penalty,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rx.len()
    }
}

impl<T> Default for SimpleSink<T> {
    fn default() -> Self {
        SimpleSink::new()
    }
}

impl<T: Send + 'static> Sink<T> for SimpleSink<T> {
    fn accept(&self, item: T) {
        // The channel is unbounded; send only fails when the sink itself
        // is gone, and then there is nobody left to care.
        let _ = self.tx.send(item);
    }

    fn check_out(&self) -> Option<T> {
        self.rx.recv_timeout(self.checkout_timeout).ok()
    }

    fn report_failure(&self, item: T, error: &Error) {
        warn!(
            "processing failed, re-enqueueing in {}ms: {}",
            self.penalty.as_millis(),
            error
        );

        let tx = self.tx.clone();
        let penalty = self.penalty;
        thread::spawn(move || {
            thread::sleep(penalty);
            let _ = tx.send(item);
        });
    }
}

/// The end of the line: swallows everything it is given.
pub struct NullSink<T> {
    _marker: PhantomData<fn(T)>,
}

impl<T> NullSink<T> {
    pub fn new() -> NullSink<T> {
        NullSink {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for NullSink<T> {
    fn default() -> Self {
        NullSink::new()
    }
}

impl<T: Send> Sink<T> for NullSink<T> {
    fn accept(&self, _item: T) {}

    fn check_out(&self) -> Option<T> {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fifo_order() {
        let sink = SimpleSink::new();
        sink.accept(1);
        sink.accept(2);
        sink.accept(3);
        assert_eq!(Some(1), sink.check_out());
        assert_eq!(Some(2), sink.check_out());
        assert_eq!(Some(3), sink.check_out());
    }

    #[test]
    fn check_out_times_out_when_empty() {
        let sink: SimpleSink<u32> = SimpleSink::with_timings(
            Duration::from_millis(10),
            Duration::from_millis(10),
        );
        assert_eq!(None, sink.check_out());
    }

    #[test]
    fn failed_items_return_after_the_penalty() {
        let sink = SimpleSink::with_timings(
            Duration::from_millis(10),
            Duration::from_millis(50),
        );
        sink.accept(42);
        let item = sink.check_out().unwrap();
        sink.report_failure(item, &Error::ProcessingPanic);

        // Not back yet
        assert_eq!(None, sink.check_out());
        // But it comes back
        assert_eq!(
            Ok(42),
            sink.rx.recv_timeout(Duration::from_millis(1000))
        );
    }

    #[test]
    fn null_sink_discards() {
        let sink: NullSink<u32> = NullSink::new();
        sink.accept(42);
        assert_eq!(None, sink.check_out());
    }
}
