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

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::warn;

use super::sink::Sink;
use crate::support::error::Error;

pub type Processor<S, T> =
    Arc<dyn Fn(&S) -> Result<T, Error> + Send + Sync>;

/// One step of the pipeline: checks items out of its input sink, runs
/// them through the processor, and feeds the results to its output sink.
///
/// The stage never lets a processor take a worker down: errors and even
/// panics are reported back to the input sink, which re-enqueues the
/// item. No item is ever silently dropped.
pub struct Stage<S, T> {
    name: String,
    input: Arc<dyn Sink<S>>,
    output: Arc<dyn Sink<T>>,
    processor: Processor<S, T>,
}

impl<S: Send + 'static, T: Send + 'static> Stage<S, T> {
    pub fn new(
        name: impl Into<String>,
        input: Arc<dyn Sink<S>>,
        output: Arc<dyn Sink<T>>,
        processor: Processor<S, T>,
    ) -> Stage<S, T> {
        Stage {
            name: name.into(),
            input,
            output,
            processor,
        }
    }

    /// Processes at most one element. Answers false if the input sink
    /// had nothing, so the caller knows to idle.
    pub fn process_single_element(&self) -> bool {
        let item = match self.input.check_out() {
            Some(item) => item,
            None => return false,
        };

        let outcome =
            match panic::catch_unwind(AssertUnwindSafe(|| {
                (self.processor)(&item)
            })) {
                Ok(result) => result,
                Err(_) => Err(Error::ProcessingPanic),
            };

        match outcome {
            Ok(output) => {
                self.output.accept(output);
                self.input.report_success(item);
            },
            Err(e) => {
                warn!("{}: processing failed: {}", self.name, e);
                self.input.report_failure(item, &e);
            },
        }
        true
    }

    /// Starts `workers` named threads that process until `cancel` is
    /// raised, sleeping `idle_sleep` whenever the input runs dry.
    pub fn start(
        self: &Arc<Self>,
        workers: usize,
        idle_sleep: Duration,
        cancel: Arc<AtomicBool>,
    ) -> Result<Vec<thread::JoinHandle<()>>, Error> {
        let mut handles = Vec::with_capacity(workers);
        for i in 0..workers {
            let stage = Arc::clone(self);
            let cancel = Arc::clone(&cancel);
            let handle = thread::Builder::new()
                .name(format!("{}@{}", self.name, i))
                .spawn(move || {
                    while !cancel.load(Ordering::Relaxed) {
                        if !stage.process_single_element() {
                            thread::sleep(idle_sleep);
                        }
                    }
                })?;
            handles.push(handle);
        }
        Ok(handles)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pipeline::sink::{NullSink, SimpleSink};

    fn quick_sink<T: Send + 'static>() -> Arc<SimpleSink<T>> {
        Arc::new(SimpleSink::with_timings(
            Duration::from_millis(10),
            Duration::from_millis(20),
        ))
    }

    #[test]
    fn processes_and_forwards() {
        let input = quick_sink::<u32>();
        let output = quick_sink::<u32>();
        let stage = Stage::new(
            "double",
            Arc::clone(&input) as Arc<dyn Sink<u32>>,
            Arc::clone(&output) as Arc<dyn Sink<u32>>,
            Arc::new(|n: &u32| Ok(n * 2)),
        );

        input.accept(21);
        assert!(stage.process_single_element());
        assert_eq!(Some(42), output.check_out());
        assert!(!stage.process_single_element());
    }

    #[test]
    fn failed_items_are_not_dropped() {
        let input = quick_sink::<u32>();
        let output = quick_sink::<u32>();
        let stage = Stage::new(
            "flaky",
            Arc::clone(&input) as Arc<dyn Sink<u32>>,
            Arc::clone(&output) as Arc<dyn Sink<u32>>,
            Arc::new(|n: &u32| {
                if *n == 0 {
                    Err(Error::ProcessingPanic)
                } else {
                    Ok(*n)
                }
            }),
        );

        input.accept(0);
        assert!(stage.process_single_element());
        assert_eq!(None, output.check_out());

        // The failed item returns to the input after the penalty
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(1, input.len());
    }

    #[test]
    fn a_panicking_processor_is_contained() {
        let input = quick_sink::<u32>();
        let output: Arc<NullSink<u32>> = Arc::new(NullSink::new());
        let stage = Stage::new(
            "explosive",
            Arc::clone(&input) as Arc<dyn Sink<u32>>,
            output as Arc<dyn Sink<u32>>,
            Arc::new(|_: &u32| -> Result<u32, Error> {
                panic!("boom")
            }),
        );

        input.accept(7);
        assert!(stage.process_single_element());

        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(1, input.len());
    }

    #[test]
    fn workers_can_be_cancelled() {
        let input = quick_sink::<u32>();
        let output = quick_sink::<u32>();
        let stage = Arc::new(Stage::new(
            "pool",
            Arc::clone(&input) as Arc<dyn Sink<u32>>,
            Arc::clone(&output) as Arc<dyn Sink<u32>>,
            Arc::new(|n: &u32| Ok(*n + 1)),
        ));

        let cancel = Arc::new(AtomicBool::new(false));
        let handles = stage
            .start(3, Duration::from_millis(5), Arc::clone(&cancel))
            .unwrap();

        for n in 0..10 {
            input.accept(n);
        }
        for _ in 0..10 {
            assert!(output
                .check_out()
                .map(|n| n >= 1 && n <= 10)
                .unwrap_or(false));
        }

        cancel.store(true, Ordering::Relaxed);
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
