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

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use super::sink::Sink;
use crate::store::{Folder, GwStore};
use crate::support::error::Error;

/// Feeds the pipeline: polls the inbound header folder and enqueues the
/// names that were not there on the previous pass.
///
/// A name is forgotten once it disappears from the folder, so a client
/// that re-drops a file under the same name gets it processed again.
pub struct InputScanner {
    store: Arc<dyn GwStore>,
    sink: Arc<dyn Sink<String>>,
    known: Mutex<HashSet<String>>,
}

impl InputScanner {
    pub fn new(
        store: Arc<dyn GwStore>,
        sink: Arc<dyn Sink<String>>,
    ) -> InputScanner {
        InputScanner {
            store,
            sink,
            known: Mutex::new(HashSet::new()),
        }
    }

    /// One polling pass.
    pub fn scan(&self) -> Result<(), Error> {
        let names = self.store.list(Folder::HeadersIn)?;

        let mut known = self.known.lock().unwrap();
        let mut current = HashSet::with_capacity(names.len());
        for name in names {
            if !known.contains(&name) {
                debug!("new inbound header: {}", name);
                self.sink.accept(name.clone());
            }
            current.insert(name);
        }
        *known = current;
        Ok(())
    }

    /// Polls every `interval` until `cancel` is raised. Scan failures
    /// are logged and the polling continues.
    pub fn scan_until(&self, interval: Duration, cancel: &AtomicBool) {
        debug!("scanning process begun");
        while !cancel.load(Ordering::Relaxed) {
            if let Err(e) = self.scan() {
                warn!("scanning input directory failed: {}", e);
            }
            thread::sleep(interval);
        }
        debug!("scanning process stopped");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pipeline::sink::SimpleSink;
    use crate::store::MemStore;

    fn fixture() -> (Arc<MemStore>, Arc<SimpleSink<String>>, InputScanner)
    {
        let store = Arc::new(MemStore::new());
        let sink = Arc::new(SimpleSink::with_timings(
            Duration::from_millis(10),
            Duration::from_millis(10),
        ));
        let scanner = InputScanner::new(
            Arc::clone(&store) as Arc<dyn GwStore>,
            Arc::clone(&sink) as Arc<dyn Sink<String>>,
        );
        (store, sink, scanner)
    }

    #[test]
    fn enqueues_only_new_names() {
        let (store, sink, scanner) = fixture();
        store.seed(Folder::HeadersIn, "a.api", b"x");
        store.seed(Folder::HeadersIn, "b.api", b"x");

        scanner.scan().unwrap();
        let mut seen = vec![
            sink.check_out().unwrap(),
            sink.check_out().unwrap(),
        ];
        seen.sort();
        assert_eq!(vec!["a.api".to_owned(), "b.api".to_owned()], seen);

        // Unchanged folder, nothing new
        scanner.scan().unwrap();
        assert_eq!(None, sink.check_out());

        // One new file
        store.seed(Folder::HeadersIn, "c.api", b"x");
        scanner.scan().unwrap();
        assert_eq!(Some("c.api".to_owned()), sink.check_out());
        assert_eq!(None, sink.check_out());
    }

    #[test]
    fn a_deleted_and_redropped_name_is_new_again() {
        let (store, sink, scanner) = fixture();
        store.seed(Folder::HeadersIn, "a.api", b"x");
        scanner.scan().unwrap();
        assert_eq!(Some("a.api".to_owned()), sink.check_out());

        store.delete(Folder::HeadersIn, "a.api");
        scanner.scan().unwrap();
        assert_eq!(None, sink.check_out());

        store.seed(Folder::HeadersIn, "a.api", b"y");
        scanner.scan().unwrap();
        assert_eq!(Some("a.api".to_owned()), sink.check_out());
    }

    #[test]
    fn non_header_names_are_ignored() {
        let (store, sink, scanner) = fixture();
        store.seed(Folder::HeadersIn, "notes.txt", b"x");
        scanner.scan().unwrap();
        assert_eq!(None, sink.check_out());
    }
}
