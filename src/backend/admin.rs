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

use super::{user_filter, CalendarBackend};
use crate::gateway::command::{CommandBody, GwCommand};
use crate::gateway::response::{
    DirectoryResponse, GwResponse, VoidResponse,
};
use crate::support::error::Error;
use crate::support::system_config::DirectoryFilterConfig;

/// Answers `ADMIN` commands.
///
/// The only administrative request understood is a directory sync
/// (`Get-Directory`); its answer lists every backend user that survives
/// the configured directory filter. All other admin commands get an
/// "unsupported" void response.
pub struct AdminHandler {
    backend: Arc<dyn CalendarBackend>,
    filter: DirectoryFilterConfig,
}

impl AdminHandler {
    pub fn new(
        backend: Arc<dyn CalendarBackend>,
        filter: DirectoryFilterConfig,
    ) -> AdminHandler {
        AdminHandler { backend, filter }
    }

    pub fn apply(
        &self,
        command: GwCommand,
    ) -> Result<Box<dyn GwResponse>, Error> {
        let get_directory = match command.body {
            CommandBody::Admin(ref a) => a.get_directory,
            _ => false,
        };
        if !get_directory {
            info!(
                "Ignoring admin command {} without Get-Directory",
                command.header_name()
            );
            return Ok(Box::new(VoidResponse::with_prefix(
                command,
                "unsupported admin command",
                "unsupported",
            )));
        }

        match self.backend.retrieve_all_users() {
            Some(users) => {
                let users =
                    user_filter::filter_identities(&self.filter, users);
                info!(
                    "Answering {} with a directory of {} users",
                    command.header_name(),
                    users.len()
                );
                Ok(Box::new(DirectoryResponse::new(command, &users)))
            },
            None => {
                warn!("Backend could not list users for a directory sync");
                Ok(Box::new(VoidResponse::invalid(command)))
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::MockCalendar;
    use crate::gateway::parser::parse_header;
    use crate::gateway::wire::DsUser;

    const DIRECTORY_HEADER: &str = "WPC-API= 1.2; \r\n\
                                    MSG-TYPE= ADMIN; \r\n\
                                    -GET-DIRECTORY-\r\n\
                                    -END-\r\n";

    fn handler(filter: DirectoryFilterConfig) -> AdminHandler {
        let mut mock = MockCalendar::new();
        mock.add_user(DsUser::new(
            "jdoe", "dom", "po", "jdoe", "Doe", "Jane",
        ));
        mock.add_user(DsUser::new(
            "rroe", "dom", "po", "rroe", "Roe", "Rich",
        ));
        AdminHandler::new(Arc::new(mock), filter)
    }

    #[test]
    fn directory_sync_lists_backend_users() {
        let handler = handler(DirectoryFilterConfig::default());
        let cmd = parse_header("admin1.api", DIRECTORY_HEADER);
        let response = handler.apply(cmd).unwrap();
        let text = response.render().unwrap().unwrap();
        assert!(text.contains("Network-ID= jdoe;"), "{}", text);
        assert!(text.contains("Network-ID= rroe;"), "{}", text);
    }

    #[test]
    fn directory_filter_is_applied() {
        let handler = handler(DirectoryFilterConfig {
            blacklist: Some(vec!["rroe".to_owned()]),
            whitelist: None,
        });
        let cmd = parse_header("admin1.api", DIRECTORY_HEADER);
        let response = handler.apply(cmd).unwrap();
        let text = response.render().unwrap().unwrap();
        assert!(text.contains("jdoe"), "{}", text);
        assert!(!text.contains("rroe"), "{}", text);
    }

    #[test]
    fn other_admin_commands_are_unsupported() {
        let header = DIRECTORY_HEADER.replace("-GET-DIRECTORY-\r\n", "");
        let handler = handler(DirectoryFilterConfig::default());
        let cmd = parse_header("admin1.api", &header);
        let response = handler.apply(cmd).unwrap();
        assert!(response.render().unwrap().is_none());
        assert_eq!(
            "unsupported_admin1.api",
            response.suggest_log_filename()
        );
    }
}
