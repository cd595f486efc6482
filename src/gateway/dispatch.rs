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

//! Routing of parsed commands to their handlers.

use std::collections::HashMap;

use log::debug;

use super::command::{GwCommand, MessageType};
use super::response::{GwResponse, VoidResponse};
use crate::support::error::Error;

pub type Handler = Box<
    dyn Fn(GwCommand) -> Result<Box<dyn GwResponse>, Error> + Send + Sync,
>;

/// Maps message kinds to handlers. Kinds without a handler get a void
/// response; a handler mapping is exact, there is no fallback chain.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<MessageType, Handler>,
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher::default()
    }

    pub fn register(&mut self, tag: MessageType, handler: Handler) {
        self.handlers.insert(tag, handler);
    }

    pub fn apply(
        &self,
        command: GwCommand,
    ) -> Result<Box<dyn GwResponse>, Error> {
        let tag = command.message_type();

        if let Some(handler) = self.handlers.get(&tag) {
            debug!("dispatching {} as {:?}", command.header_name(), tag);
            return handler(command);
        }

        if MessageType::Unknown == tag {
            return Ok(Box::new(VoidResponse::with_prefix(
                command,
                "Unable to parse command",
                "unknown",
            )));
        }

        Ok(Box::new(VoidResponse::with_prefix(
            command,
            format!("No handler registered for {:?}", tag),
            "unsupported",
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gateway::parser::parse_header;

    #[test]
    fn routes_to_registered_handler() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(
            MessageType::Phone,
            Box::new(|cmd| {
                Ok(Box::new(VoidResponse::new(cmd, "handled"))
                    as Box<dyn GwResponse>)
            }),
        );

        let cmd = parse_header("h", "MSG-TYPE= Phone;\n-END-\n");
        let resp = dispatcher.apply(cmd).unwrap();
        assert!(resp.render_log().contains("handled"));
    }

    #[test]
    fn unparsable_commands_get_the_unknown_prefix() {
        let dispatcher = Dispatcher::new();
        let cmd = parse_header("h", "From= \n    WPD= dom;");
        let resp = dispatcher.apply(cmd).unwrap();
        assert_eq!("unknown_h", resp.suggest_log_filename());
        assert!(resp.render_log().contains("Unable to parse command"));
    }

    #[test]
    fn unregistered_kinds_get_the_unsupported_prefix() {
        let dispatcher = Dispatcher::new();
        let cmd = parse_header("h", "MSG-TYPE= Task;\n-END-\n");
        let resp = dispatcher.apply(cmd).unwrap();
        assert_eq!("unsupported_h", resp.suggest_log_filename());
        assert!(resp.render_log().contains("No handler registered"));
    }
}
