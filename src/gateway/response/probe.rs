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
use crate::gateway::wire::{Address, GwDate};
use crate::support::error::Error;

/// Answer to a free/busy probe.
///
/// A probe is a search whose sender wants to know the gateway is alive;
/// the answer is another search, bounced back with sender and recipient
/// swapped and the probe marker rewritten so it is not mistaken for a
/// second probe.
const TEMPLATE: &str = "WPC-API= 1.2; \r\n\
                        Header-Char= T50; \r\n\
                        Msg-Type= SEARCH; \r\n\
                        From-Text= ${from_text}; \r\n\
                        From= \r\n\
                        ${from_block}\
                        To= \r\n\
                        ${to_block}\
                        All-To= \r\n\
                        ${all_to_block}\
                        Msg-Id= 3FCD7DD9.2A0A.000B.000; \r\n\
                        To-Text= ${to_text}; \r\n\
                        Date-Sent= ${date_sent}; \r\n\
                        Send-Options= None; \r\n\
                        Status-Request= None; \r\n\
                        Begin-Time= $(begin_time); \r\n\
                        End-Time= $(end_time); \r\n\
                        -END-\r\n";

pub struct ProbeResponse {
    command: GwCommand,
    on_self: MacroTable,
    on_command: MacroTable,
}

fn field(value: &Option<String>) -> String {
    super::escape(value.as_deref().unwrap_or(""))
}

impl ProbeResponse {
    pub fn new(command: GwCommand) -> ProbeResponse {
        let (from, to_first, begin, end) = match command.body {
            CommandBody::Search(ref s) => (
                s.from.clone().unwrap_or_default(),
                s.to
                    .as_ref()
                    .and_then(|to| to.first())
                    .cloned()
                    .unwrap_or_default(),
                s.begin_time.clone(),
                s.end_time.clone(),
            ),
            _ => (
                Address::new(),
                Address::new(),
                None,
                None,
            ),
        };

        let mut on_self = MacroTable::new();
        on_self.set("from_text", field(&to_first.cdba));
        on_self.set(
            "from_block",
            format!(
                "    WPD= {}; \r\n\
                 \x20   WPPO= {}; \r\n\
                 \x20   WPU= {}; ; \r\n",
                field(&to_first.wpd),
                field(&to_first.wppo),
                field(&to_first.wpu),
            ),
        );
        on_self.set(
            "to_block",
            format!(
                "    WPD= {}; \r\n\
                 \x20   WPPO= {}; \r\n\
                 \x20   WPU= {}; \r\n\
                 \x20   WPPONUM= 1; \r\n\
                 \x20   WPUNUM= 1; \r\n\
                 \x20   CDBA= {}; ; \r\n",
                field(&from.wpd),
                field(&from.wppo),
                field(&from.wpu),
                field(&from.cdba),
            ),
        );
        on_self.set(
            "all_to_block",
            format!(
                "    WPD= {}; \r\n\
                 \x20   WPPO= {}; \r\n\
                 \x20   WPU= {}; \r\n\
                 \x20   WPPONUM= 1; \r\n\
                 \x20   WPUNUM= 1; ; \r\n",
                field(&from.wpd),
                field(&from.wppo),
                field(&from.wpu),
            ),
        );
        on_self.set(
            "to_text",
            field(&from.cdba).replace(".FB-PROBE", "(FB-PROBE)"),
        );
        on_self.set("date_sent", GwDate::now().to_string());

        let mut on_command = MacroTable::new();
        on_command.set(
            "begin_time",
            begin.map(|d| d.to_string()).unwrap_or_default(),
        );
        on_command.set(
            "end_time",
            end.map(|d| d.to_string()).unwrap_or_default(),
        );

        ProbeResponse {
            command,
            on_self,
            on_command,
        }
    }
}

impl GwResponse for ProbeResponse {
    fn command(&self) -> &GwCommand {
        &self.command
    }

    fn render(&self) -> Result<Option<String>, Error> {
        super::render_template(TEMPLATE, &self.on_self, &self.on_command)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gateway::parser::parse_header;

    static PROBE_HEADER: &str = "\
WPC-API= 1.2;
MSG-TYPE= Search;
From=
    WPD= GoogleDom;
    WPPO= GooglePO;
    WPU= ..FB-PROBE;
    CDBA= GoogleDom.GooglePO...FB-PROBE; ;
To=
    WPD= dom;
    WPPO= po;
    WPU= user1;
    CDBA= dom.po.user1; ;
Begin-Time= 21/5/03 0:0;
End-Time= 28/5/03 23:59;
-END-
";

    #[test]
    fn bounces_probe_with_swapped_addresses() {
        let cmd = parse_header("probe.001", PROBE_HEADER);
        let resp = ProbeResponse::new(cmd);
        let text = resp.render().unwrap().unwrap();

        assert!(text.starts_with("WPC-API= 1.2; \r\n"));
        assert!(text.contains("From-Text= dom.po.user1; \r\n"));
        assert!(text
            .contains("To-Text= GoogleDom.GooglePO..(FB-PROBE); \r\n"));
        assert!(text.contains("Begin-Time= 21/05/03 00:00; \r\n"));
        assert!(text.contains("End-Time= 28/05/03 23:59; \r\n"));
        assert!(text.ends_with("-END-\r\n"));

        // From block reflects the probed recipient
        assert!(text.contains("    WPU= user1; ; \r\n"));
        // To block reflects the probing sender, with CDBA
        assert!(text.contains("    CDBA= GoogleDom.GooglePO...FB-PROBE; ; \r\n"));
    }

    #[test]
    fn keeps_the_answered_command() {
        let cmd = parse_header("probe.001", PROBE_HEADER);
        let resp = ProbeResponse::new(cmd);
        assert_eq!("probe.001", resp.command().header_name());
        assert_eq!("probe.001", resp.suggest_filename());
        assert_eq!("processed_probe.001", resp.suggest_log_filename());
    }
}
