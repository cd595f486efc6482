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

use std::sync::Arc;

use log::{info, warn};

use super::CalendarBackend;
use crate::gateway::command::{CommandBody, GwCommand, SearchCommand};
use crate::gateway::response::{
    FreeBusyResponse, GwResponse, ProbeResponse, VoidResponse,
};
use crate::pipeline::ConnectionThrottle;
use crate::support::error::Error;

/// Answers `SEARCH` commands with free/busy data from the backend.
///
/// An incomplete command (missing message id, time window, or either
/// address) is answered with an "invalid" void response instead of being
/// retried. The busy search proper is a probe response when the subject
/// marks the message as an FB-PROBE, and a throttled backend query
/// otherwise.
pub struct SearchHandler {
    backend: Arc<dyn CalendarBackend>,
    throttle: Arc<ConnectionThrottle>,
}

impl SearchHandler {
    pub fn new(
        backend: Arc<dyn CalendarBackend>,
        throttle: Arc<ConnectionThrottle>,
    ) -> SearchHandler {
        SearchHandler { backend, throttle }
    }

    pub fn apply(
        &self,
        command: GwCommand,
    ) -> Result<Box<dyn GwResponse>, Error> {
        let search = match command.body {
            CommandBody::Search(ref s) => s.clone(),
            _ => {
                warn!(
                    "Search handler got a {:?} command",
                    command.message_type()
                );
                return Ok(Box::new(VoidResponse::invalid(command)));
            },
        };

        if let Some(missing) = first_missing_field(&search) {
            info!(
                "Rejecting command {}: no {}",
                command.header_name(),
                missing
            );
            return Ok(Box::new(VoidResponse::invalid(command)));
        }

        if command.header_content().to_uppercase().contains("FB-PROBE") {
            info!("Answering probe {}", command.header_name());
            return Ok(Box::new(ProbeResponse::new(command)));
        }

        // Every required field was checked above.
        let cdba = search
            .to
            .as_ref()
            .and_then(|to| to.first())
            .and_then(|a| a.cdba())
            .unwrap_or("");
        let user = match cdba.find("..") {
            Some(delim) if delim + 2 < cdba.len() => &cdba[delim + 2..],
            _ => {
                info!(
                    "Rejecting command {}: no user name in '{}'",
                    command.header_name(),
                    cdba
                );
                return Ok(Box::new(VoidResponse::invalid(command)));
            },
        };
        let user = user.to_owned();
        // first_missing_field guarantees both bounds are set
        let (from, until) = match (&search.begin_time, &search.end_time) {
            (Some(b), Some(e)) => (b.utc_millis(), e.utc_millis()),
            _ => return Ok(Box::new(VoidResponse::invalid(command))),
        };

        self.throttle.checkout_timer()?;
        let slots = self.backend.retrieve_free_busy(&user, from, until);
        self.throttle.rewind_timer();

        match slots {
            Some(slots) => {
                self.throttle.report_success();
                info!(
                    "Answering {} with {} busy slots for {}",
                    command.header_name(),
                    slots.len(),
                    user
                );
                Ok(Box::new(FreeBusyResponse::new(command, &slots)))
            },
            None => {
                self.throttle.report_failure();
                warn!(
                    "Backend could not answer free/busy query for {}",
                    user
                );
                Ok(Box::new(VoidResponse::invalid(command)))
            },
        }
    }
}

/// The wire name of the first required field `search` lacks, if any.
fn first_missing_field(search: &SearchCommand) -> Option<&'static str> {
    if search.msg_id.is_none() {
        Some("Msg-Id")
    } else if search.begin_time.is_none() {
        Some("Begin-Time")
    } else if search.end_time.is_none() {
        Some("End-Time")
    } else if search.from.is_none() {
        Some("From")
    } else if search.to.is_none() {
        Some("To")
    } else if search.to.as_ref().and_then(|to| to.first()).is_none() {
        Some("To address")
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::backend::MockCalendar;
    use crate::gateway::parser::parse_header;
    use crate::support::system_config::ThrottleConfig;

    const SEARCH_HEADER: &str = "WPC-API= 1.2; \r\n\
                                 Header-Char= T50; \r\n\
                                 Msg-Type= Search; \r\n\
                                 Msg-ID= HQ..4711; \r\n\
                                 From= \r\n\
                                 \x20   WPD= exch; \r\n\
                                 \x20   WPPO= first; \r\n\
                                 \x20   WPU= gateway; \r\n\
                                 \x20   CDBA= exch.first.gateway; ; \r\n\
                                 To= \r\n\
                                 \x20   WPD= hq; \r\n\
                                 \x20   WPU= gw; \r\n\
                                 \x20   CDBA= hq.gw..jdoe; ; \r\n\
                                 Begin-Time= 21/5/03 0:0; \r\n\
                                 End-Time= 23/5/03 0:0; \r\n\
                                 -END-\r\n";

    fn handler_with(
        busy: HashMap<String, Vec<(i64, i64)>>,
    ) -> SearchHandler {
        let mut mock = MockCalendar::new();
        for (user, slots) in busy {
            for (start, end) in slots {
                mock.add_busy(&user, start, end);
            }
        }
        let throttle = ConnectionThrottle::new(&ThrottleConfig {
            max_requests_per_second: 0,
            ..ThrottleConfig::default()
        });
        SearchHandler::new(Arc::new(mock), Arc::new(throttle))
    }

    fn search_command(header: &str) -> GwCommand {
        parse_header("search1.api", header)
    }

    #[test]
    fn free_busy_query_is_answered_from_the_backend() {
        let mut busy = HashMap::new();
        busy.insert(
            "jdoe".to_owned(),
            vec![(1_053_511_200_000, 1_053_514_800_000)],
        );
        let handler = handler_with(busy);

        let response =
            handler.apply(search_command(SEARCH_HEADER)).unwrap();
        let text = response.render().unwrap().unwrap();
        assert!(text.contains("Start-Time= 21/05/03 10:00"), "{}", text);
        assert!(text.contains("Orig-Msg-ID= HQ..4711"), "{}", text);
    }

    #[test]
    fn unknown_user_gets_an_invalid_response() {
        let handler = handler_with(HashMap::new());
        let response =
            handler.apply(search_command(SEARCH_HEADER)).unwrap();
        assert!(response.render().unwrap().is_none());
        assert_eq!(
            "invalid_search1.api",
            response.suggest_log_filename()
        );
    }

    #[test]
    fn missing_begin_time_is_rejected_before_the_backend_is_asked() {
        let header = SEARCH_HEADER.replace("Begin-Time", "X-Begin-Time");
        let handler = handler_with(HashMap::new());
        let response = handler.apply(search_command(&header)).unwrap();
        assert_eq!(
            "invalid_search1.api",
            response.suggest_log_filename()
        );
    }

    #[test]
    fn recipient_without_user_part_is_rejected() {
        let header = SEARCH_HEADER
            .replace("CDBA= hq.gw..jdoe", "CDBA= hq.gw.jdoe");
        let handler = handler_with(HashMap::new());
        let response = handler.apply(search_command(&header)).unwrap();
        assert_eq!(
            "invalid_search1.api",
            response.suggest_log_filename()
        );
    }

    #[test]
    fn probe_is_answered_without_touching_the_backend() {
        let header = SEARCH_HEADER.replace(
            "CDBA= exch.first.gateway",
            "CDBA= exch.first..FB-PROBE",
        );
        let handler = handler_with(HashMap::new());
        let response = handler.apply(search_command(&header)).unwrap();
        let text = response.render().unwrap().unwrap();
        assert!(text.contains("(FB-PROBE)"), "{}", text);
    }
}
