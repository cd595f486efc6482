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

use log::warn;

use crate::gateway::command::GwCommand;
use crate::gateway::response::GwResponse;
use crate::store::{Folder, GwStore};
use crate::support::error::Error;

/// Writes a response back into the outbound folder and, optionally, a
/// log record of the exchange. Passes the answered command on, so the
/// cleanup stage knows which inbound header is done.
pub struct Responder {
    store: Arc<dyn GwStore>,
    log_messages: bool,
}

impl Responder {
    pub fn new(store: Arc<dyn GwStore>, log_messages: bool) -> Responder {
        Responder {
            store,
            log_messages,
        }
    }

    pub fn apply(
        &self,
        response: &dyn GwResponse,
    ) -> Result<GwCommand, Error> {
        if let Some(text) = response.render()? {
            let name = response.suggest_filename();
            if !self.store.store(
                Folder::HeadersOut,
                &name,
                text.as_bytes(),
            ) {
                return Err(Error::StoreFailed(name));
            }
        }

        // Logging is best effort; a name collision here is not worth a
        // retry of the whole response
        if self.log_messages {
            let name = response.suggest_log_filename();
            if !self.store.store(
                Folder::Log,
                &name,
                response.render_log().as_bytes(),
            ) {
                warn!("could not write message log {}", name);
            }
        }

        Ok(response.command().clone())
    }
}

/// Tail of the pipeline: deletes the inbound header of a fully handled
/// command.
pub struct Cleaner {
    store: Arc<dyn GwStore>,
}

impl Cleaner {
    pub fn new(store: Arc<dyn GwStore>) -> Cleaner {
        Cleaner { store }
    }

    pub fn apply(&self, command: &GwCommand) -> Result<(), Error> {
        let name = command.header_name();
        if !self.store.delete(Folder::HeadersIn, name) {
            return Err(Error::DeleteFailed(name.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gateway::response::VoidResponse;
    use crate::store::MemStore;

    struct FixedResponse {
        command: GwCommand,
        text: String,
    }

    impl GwResponse for FixedResponse {
        fn command(&self) -> &GwCommand {
            &self.command
        }

        fn render(&self) -> Result<Option<String>, Error> {
            Ok(Some(self.text.clone()))
        }
    }

    #[test]
    fn stores_response_and_log() {
        let store = Arc::new(MemStore::new());
        let responder =
            Responder::new(Arc::clone(&store) as Arc<dyn GwStore>, true);

        let resp = FixedResponse {
            command: GwCommand::unknown("in.api", "text"),
            text: "RESPONSE".to_owned(),
        };
        let cmd = responder.apply(&resp).unwrap();
        assert_eq!("in.api", cmd.header_name());

        assert_eq!(
            Some(b"RESPONSE".to_vec()),
            store.peek(Folder::HeadersOut, "in.api")
        );
        assert!(store.peek(Folder::Log, "processed_in.api").is_some());
    }

    #[test]
    fn void_responses_write_only_the_log() {
        let store = Arc::new(MemStore::new());
        let responder =
            Responder::new(Arc::clone(&store) as Arc<dyn GwStore>, true);

        let resp = VoidResponse::new(
            GwCommand::unknown("in.api", "text"),
            "nothing to say",
        );
        responder.apply(&resp).unwrap();

        assert!(store.names(Folder::HeadersOut).is_empty());
        assert!(store
            .peek(Folder::Log, "nonrespond_in.api")
            .is_some());
    }

    #[test]
    fn a_store_collision_is_an_error() {
        let store = Arc::new(MemStore::new());
        store.seed(Folder::HeadersOut, "in.api", b"already there");
        let responder = Responder::new(
            Arc::clone(&store) as Arc<dyn GwStore>,
            false,
        );

        let resp = FixedResponse {
            command: GwCommand::unknown("in.api", "text"),
            text: "RESPONSE".to_owned(),
        };
        match responder.apply(&resp) {
            Err(Error::StoreFailed(name)) => assert_eq!("in.api", name),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn cleaner_deletes_the_inbound_header() {
        let store = Arc::new(MemStore::new());
        store.seed(Folder::HeadersIn, "in.api", b"header");
        let cleaner = Cleaner::new(Arc::clone(&store) as Arc<dyn GwStore>);

        cleaner
            .apply(&GwCommand::unknown("in.api", "header"))
            .unwrap();
        assert!(!store.exists(Folder::HeadersIn, "in.api"));
    }
}
