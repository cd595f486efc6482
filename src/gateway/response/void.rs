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
use crate::gateway::command::GwCommand;

/// A response that sends nothing back to the client. The log record
/// carries the reason, and the reason's kind selects the log filename
/// prefix so that silently dropped headers are easy to find.
pub struct VoidResponse {
    command: GwCommand,
    reason: String,
    prefix: String,
}

impl VoidResponse {
    pub fn new(command: GwCommand, reason: impl Into<String>) -> Self {
        VoidResponse::with_prefix(command, reason, "nonrespond")
    }

    pub fn with_prefix(
        command: GwCommand,
        reason: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        VoidResponse {
            command,
            reason: reason.into(),
            prefix: prefix.into(),
        }
    }

    /// For commands that arrived with missing or inconsistent arguments.
    pub fn invalid(command: GwCommand) -> Self {
        VoidResponse::with_prefix(command, "invalid command", "invalid")
    }
}

impl GwResponse for VoidResponse {
    fn command(&self) -> &GwCommand {
        &self.command
    }

    fn render_log(&self) -> String {
        format!(
            "INCOMING COMMAND:\n\
             =================\n\
             {}\n\n\
             REASON FOR NOT RESPONDING:\n\
             ==========================\n\
             {}\n",
            self.command.header_content(),
            self.reason
        )
    }

    fn suggest_log_filename(&self) -> String {
        format!("{}_{}", self.prefix, self.command.header_name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_no_client_response() {
        let resp = VoidResponse::new(
            GwCommand::unknown("in.001", "garbage"),
            "testing",
        );
        assert!(resp.render().unwrap().is_none());
    }

    #[test]
    fn log_carries_reason_and_command_text() {
        let resp = VoidResponse::new(
            GwCommand::unknown("in.001", "garbage"),
            "nothing to say",
        );
        let log = resp.render_log();
        assert!(log.contains("garbage"));
        assert!(log.contains("REASON FOR NOT RESPONDING:"));
        assert!(log.contains("nothing to say"));
    }

    #[test]
    fn log_filename_prefixes() {
        let cmd = GwCommand::unknown("in.001", "x");
        assert_eq!(
            "nonrespond_in.001",
            VoidResponse::new(cmd.clone(), "r").suggest_log_filename()
        );
        assert_eq!(
            "invalid_in.001",
            VoidResponse::invalid(cmd).suggest_log_filename()
        );
    }
}
