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

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{error, info};

use crate::backend::{
    AdminHandler, CalendarBackend, MockCalendar, SearchHandler,
};
use crate::gateway::command::{GwCommand, MessageType};
use crate::gateway::dispatch::Dispatcher;
use crate::gateway::parser::Parser;
use crate::gateway::response::GwResponse;
use crate::pipeline::{
    Cleaner, ConnectionThrottle, InputScanner, NullSink, Responder,
    SimpleSink, Sink, Stage,
};
use crate::store::{FsStore, GwStore};
use crate::support::error::Error;
use crate::support::system_config::SystemConfig;

// Need to use this and not eprintln+exit so that errors go to the
// configured log
macro_rules! fatal {
    ($ex:ident, $($stuff:tt)*) => {{
        error!($($stuff)*);
        crate::support::sysexits::$ex.exit()
    }}
}

pub fn serve(system_config: SystemConfig) {
    let store: Arc<dyn GwStore> =
        match FsStore::new(&system_config.gateway.home) {
            Ok(store) => Arc::new(store),
            Err(e) => fatal!(
                EX_CONFIG,
                "Cannot open gateway home '{}': {}",
                system_config.gateway.home.display(),
                e
            ),
        };

    // No real calendar transport is compiled in; the stub answers
    // directory syncs with an empty listing and fails free/busy queries,
    // which the pipeline reports as invalid commands.
    let backend: Arc<dyn CalendarBackend> = Arc::new(MockCalendar::new());

    let cancel = Arc::new(AtomicBool::new(false));
    let (scanner, handles) = match start_pipeline(
        &system_config,
        Arc::clone(&store),
        backend,
        Arc::clone(&cancel),
    ) {
        Ok(parts) => parts,
        Err(e) => fatal!(EX_OSERR, "Cannot start pipeline: {}", e),
    };

    info!(
        "gateway serving '{}'",
        system_config.gateway.home.display()
    );

    // The scanner runs on the main thread; it only returns once cancel
    // is raised, which nothing does in serve mode short of a signal
    // killing the whole process.
    scanner.scan_until(
        Duration::from_millis(system_config.pipeline.scan_interval_ms),
        &cancel,
    );

    for handle in handles {
        let _ = handle.join();
    }
}

/// Wires the four pipeline stages and starts their worker pools. The
/// returned scanner still needs to be driven by the caller.
pub(super) fn start_pipeline(
    config: &SystemConfig,
    store: Arc<dyn GwStore>,
    backend: Arc<dyn CalendarBackend>,
    cancel: Arc<AtomicBool>,
) -> Result<(InputScanner, Vec<thread::JoinHandle<()>>), Error> {
    let timings = (
        Duration::from_millis(config.pipeline.checkout_timeout_ms),
        Duration::from_millis(config.pipeline.retry_penalty_ms),
    );
    let filename_sink: Arc<SimpleSink<String>> =
        Arc::new(SimpleSink::with_timings(timings.0, timings.1));
    let command_sink: Arc<SimpleSink<GwCommand>> =
        Arc::new(SimpleSink::with_timings(timings.0, timings.1));
    let response_sink: Arc<SimpleSink<Box<dyn GwResponse>>> =
        Arc::new(SimpleSink::with_timings(timings.0, timings.1));
    let cleanup_sink: Arc<SimpleSink<GwCommand>> =
        Arc::new(SimpleSink::with_timings(timings.0, timings.1));

    let throttle =
        Arc::new(ConnectionThrottle::new(&config.throttle));
    let search_handler =
        SearchHandler::new(Arc::clone(&backend), throttle);
    let admin_handler =
        AdminHandler::new(backend, config.directory_filter.clone());

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        MessageType::Search,
        Box::new(move |cmd| search_handler.apply(cmd)),
    );
    dispatcher.register(
        MessageType::Admin,
        Box::new(move |cmd| admin_handler.apply(cmd)),
    );
    let dispatcher = Arc::new(dispatcher);

    let parser = Parser::new(Arc::clone(&store));
    let responder =
        Responder::new(Arc::clone(&store), config.gateway.log_messages);
    let cleaner = Cleaner::new(Arc::clone(&store));

    let parse_stage = Arc::new(Stage::new(
        "messageParsing",
        Arc::clone(&filename_sink) as Arc<dyn Sink<String>>,
        Arc::clone(&command_sink) as Arc<dyn Sink<GwCommand>>,
        Arc::new(move |name: &String| Ok(parser.apply(name))),
    ));
    let handle_stage = Arc::new(Stage::new(
        "messageExecution",
        Arc::clone(&command_sink) as Arc<dyn Sink<GwCommand>>,
        Arc::clone(&response_sink) as Arc<dyn Sink<Box<dyn GwResponse>>>,
        Arc::new(move |cmd: &GwCommand| dispatcher.apply(cmd.clone())),
    ));
    let respond_stage = Arc::new(Stage::new(
        "responseCreation",
        Arc::clone(&response_sink) as Arc<dyn Sink<Box<dyn GwResponse>>>,
        Arc::clone(&cleanup_sink) as Arc<dyn Sink<GwCommand>>,
        Arc::new(move |response: &Box<dyn GwResponse>| {
            responder.apply(response.as_ref())
        }),
    ));
    let cleanup_stage = Arc::new(Stage::new(
        "cleanup",
        Arc::clone(&cleanup_sink) as Arc<dyn Sink<GwCommand>>,
        Arc::new(NullSink::new()) as Arc<dyn Sink<()>>,
        Arc::new(move |cmd: &GwCommand| cleaner.apply(cmd)),
    ));

    let idle = Duration::from_millis(config.pipeline.idle_sleep_ms);
    let mut handles = Vec::new();
    handles.extend(parse_stage.start(
        config.pipeline.parse_workers,
        idle,
        Arc::clone(&cancel),
    )?);
    handles.extend(handle_stage.start(
        config.pipeline.handle_workers,
        idle,
        Arc::clone(&cancel),
    )?);
    handles.extend(respond_stage.start(
        config.pipeline.respond_workers,
        idle,
        Arc::clone(&cancel),
    )?);
    handles.extend(cleanup_stage.start(
        config.pipeline.cleanup_workers,
        idle,
        cancel,
    )?);

    let scanner = InputScanner::new(
        store,
        filename_sink as Arc<dyn Sink<String>>,
    );
    Ok((scanner, handles))
}
