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

//! `gwgate check`: runs two canned exchanges (a free/busy probe and a
//! real free/busy query) through the full pipeline against an in-memory
//! store and a canned backend, then prints what the client would have
//! picked up. Useful to confirm a build works at all without touching a
//! GroupWise installation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::backend::MockCalendar;
use crate::gateway::wire::DsUser;
use crate::store::{Folder, GwStore, MemStore};
use crate::support::sysexits::*;
use crate::support::system_config::{PipelineConfig, SystemConfig};

const PROBE_NAME: &str = "selfcheck_probe.api";
const PROBE_HEADER: &str = "\
WPC-API= 1.2;
MSG-TYPE= Search;
Msg-ID= 3FCD7DD9.2A0A.000B.000;
From=
    WPD= ExternalDom;
    WPPO= ExternalPO;
    WPU= ..FB-PROBE;
    CDBA= ExternalDom.ExternalPO...FB-PROBE; ;
To=
    WPD= dom;
    WPPO= po;
    WPU= user1;
    CDBA= dom.po..user1; ;
Begin-Time= 21/5/03 0:0;
End-Time= 28/5/03 23:59;
-END-
";

const SEARCH_NAME: &str = "selfcheck_busy.api";
const SEARCH_HEADER: &str = "\
WPC-API= 1.2;
MSG-TYPE= Search;
Msg-ID= 3FCD7DD9.2A0A.000C.000;
From=
    WPD= ExternalDom;
    WPPO= ExternalPO;
    WPU= gateway;
    CDBA= ExternalDom.ExternalPO.gateway; ;
To=
    WPD= dom;
    WPPO= po;
    WPU= user1;
    CDBA= dom.po..user1; ;
Begin-Time= 21/5/03 0:0;
End-Time= 23/5/03 0:0;
-END-
";

// 2003-05-21 10:00 to 11:00 UTC, inside the canned query window
const BUSY_START: i64 = 1_053_511_200_000;
const BUSY_END: i64 = 1_053_514_800_000;

pub fn check() {
    let config = SystemConfig {
        pipeline: PipelineConfig {
            parse_workers: 2,
            handle_workers: 2,
            respond_workers: 2,
            cleanup_workers: 1,
            idle_sleep_ms: 10,
            checkout_timeout_ms: 10,
            retry_penalty_ms: 100,
            scan_interval_ms: 10,
        },
        ..SystemConfig::default()
    };

    let store = Arc::new(MemStore::new());
    store.seed(Folder::HeadersIn, PROBE_NAME, PROBE_HEADER.as_bytes());
    store.seed(Folder::HeadersIn, SEARCH_NAME, SEARCH_HEADER.as_bytes());

    let mut backend = MockCalendar::new();
    backend.add_user(DsUser::new(
        "user1", "dom", "po", "user1", "One", "User",
    ));
    backend.add_busy("user1", BUSY_START, BUSY_END);

    let cancel = Arc::new(AtomicBool::new(false));
    let (scanner, handles) = super::serve::start_pipeline(
        &config,
        Arc::clone(&store) as Arc<dyn GwStore>,
        Arc::new(backend),
        Arc::clone(&cancel),
    )
    .expect("Failed to start pipeline");

    scanner.scan().expect("Failed to scan inbound folder");

    // Done once both responses are out and both inbound headers are gone
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let responded = store.names(Folder::HeadersOut).len();
        let pending = store.names(Folder::HeadersIn).len();
        if responded >= 2 && 0 == pending {
            break;
        }
        if Instant::now() > deadline {
            cancel.store(true, Ordering::Relaxed);
            eprintln!(
                "self-check FAILED: {} responses, {} headers still \
                 pending after 10s",
                responded, pending
            );
            EX_SOFTWARE.exit()
        }
        thread::sleep(Duration::from_millis(20));
    }

    cancel.store(true, Ordering::Relaxed);
    for handle in handles {
        let _ = handle.join();
    }

    for name in store.names(Folder::HeadersOut) {
        if let Some(data) = store.peek(Folder::HeadersOut, &name) {
            println!("=== {} ===", name);
            println!("{}", String::from_utf8_lossy(&data));
        }
    }
    for name in store.names(Folder::Log) {
        println!("--- log: {} ---", name);
    }
    println!("self-check passed");
}
