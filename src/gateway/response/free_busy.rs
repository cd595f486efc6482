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

use super::GwResponse;
use crate::gateway::command::{CommandBody, GwCommand};
use crate::gateway::template::MacroTable;
use crate::gateway::wire::GwDate;
use crate::support::error::Error;

/// Answer to a free/busy search: the queried user's busy time slots.
const TEMPLATE: &str = "WPC-API= 1.2; \r\n\
                        Header-Char= T50; \r\n\
                        Msg-Type= SEARCH; \r\n\
                        Orig-Msg-ID= $(msg_id); \r\n\
                        To= \r\n\
                        ${to_block}\
                        \x20   ;\r\n\
                        Busy-For= \r\n\
                        ${busy_for_block}\
                        Busy-Report=  \r\n\
                        ${times_block}\
                        \x20   ;\r\n\
                        Send-Options= None; \r\n\
                        -END-\r\n";

pub struct FreeBusyResponse {
    command: GwCommand,
    on_self: MacroTable,
    on_command: MacroTable,
}

/// Epoch milliseconds rendered the way the wire format writes dates.
fn render_time(millis: i64) -> String {
    GwDate::from_utc_millis(millis).to_string()
}

impl FreeBusyResponse {
    /// Builds the response for `command` from the backend's busy slots,
    /// given as half-open `(start, end)` epoch-millisecond intervals.
    pub fn new(
        command: GwCommand,
        timeslots: &[(i64, i64)],
    ) -> FreeBusyResponse {
        let (msg_id, from_cdba, to_cdba) = match command.body {
            CommandBody::Search(ref s) => (
                super::escape(s.msg_id.as_deref().unwrap_or("")),
                super::escape(
                    s.from.as_ref().and_then(|a| a.cdba()).unwrap_or(""),
                ),
                super::escape(
                    s.to
                        .as_ref()
                        .and_then(|to| to.first())
                        .and_then(|a| a.cdba())
                        .unwrap_or(""),
                ),
            ),
            _ => (String::new(), String::new(), String::new()),
        };

        let mut times_block = String::new();
        for (ix, (start, end)) in timeslots.iter().enumerate() {
            let sep = if ix + 1 < timeslots.len() { ", " } else { "" };
            times_block.push_str(&format!(
                "    Start-Time= {}; \r\n\
                 \x20   End-Time= {}; {}\r\n",
                render_time(*start),
                render_time(*end),
                sep,
            ));
        }

        let mut on_self = MacroTable::new();
        on_self.set(
            "to_block",
            format!("    CDBA= {}; \r\n", from_cdba),
        );
        on_self.set(
            "busy_for_block",
            format!("        CDBA= {}; \r\n", to_cdba),
        );
        on_self.set("times_block", times_block);

        let mut on_command = MacroTable::new();
        on_command.set("msg_id", msg_id);

        FreeBusyResponse {
            command,
            on_self,
            on_command,
        }
    }
}

impl GwResponse for FreeBusyResponse {
    fn command(&self) -> &GwCommand {
        &self.command
    }

    fn render(&self) -> Result<Option<String>, Error> {
        super::render_template(TEMPLATE, &self.on_self, &self.on_command)
    }
}
