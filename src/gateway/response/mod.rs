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

//! Typed responses and their wire rendering.
//!
//! A response owns the command it answers, so that the command travels
//! with it through the respond and cleanup stages. Rendering is optional;
//! a response that renders to `None` produces no file for the client, but
//! still appears in the message log.

mod directory;
mod free_busy;
mod probe;
mod void;

pub use self::directory::DirectoryResponse;
pub use self::free_busy::FreeBusyResponse;
pub use self::probe::ProbeResponse;
pub use self::void::VoidResponse;

use log::error;

use super::command::GwCommand;
use super::template::{expand, MacroTable};
use crate::support::error::Error;

/// A response to one inbound command.
pub trait GwResponse: Send + Sync {
    /// The command this response answers.
    fn command(&self) -> &GwCommand;

    /// Renders the client-facing text, or `None` if the client gets
    /// nothing back.
    fn render(&self) -> Result<Option<String>, Error> {
        Ok(None)
    }

    /// The filename to store the rendered response under.
    fn suggest_filename(&self) -> String {
        self.command().header_name().to_owned()
    }

    /// Renders the log record for this exchange.
    fn render_log(&self) -> String {
        match self.render() {
            Ok(Some(ref resp)) => format!(
                "INCOMING COMMAND:\n\
                 =================\n\
                 {}\n\n\
                 RESPONSE:\n\
                 =========\n\
                 {}\n",
                self.command().header_content(),
                resp
            ),
            _ => format!(
                "INCOMING COMMAND:\n\
                 =================\n\
                 {}\n\n\
                 ==========================\n\
                 (NO RESPONSE TO GROUPWISE)\n\
                 ==========================\n",
                self.command().header_content()
            ),
        }
    }

    /// The filename to store the log record under.
    fn suggest_log_filename(&self) -> String {
        format!("processed_{}", self.command().header_name())
    }
}

/// Expands a response template. An unknown macro means "no response",
/// not a retryable failure.
fn render_template(
    template: &str,
    on_self: &MacroTable,
    on_command: &MacroTable,
) -> Result<Option<String>, Error> {
    match expand(template, on_self, on_command) {
        Ok(text) => Ok(Some(text)),
        Err(Error::UnknownMacro(name)) => {
            error!("response template references unknown macro {}", name);
            Ok(None)
        },
        Err(e) => Err(e),
    }
}

/// Escapes a value for embedding in a response: backslash, comma and
/// semicolon get a backslash prefix.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if '\\' == c || ',' == c || ';' == c {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_template_macro_means_no_response() {
        let result = render_template(
            "a ${nonexistent} b",
            &MacroTable::new(),
            &MacroTable::new(),
        );
        assert_matches!(Ok(None), result);
    }

    #[test]
    fn escape_prefixes_special_characters() {
        assert_eq!("a\\,b\\;c\\\\d", escape("a,b;c\\d"));
        assert_eq!("plain", escape("plain"));
        assert_eq!("", escape(""));
    }
}
