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
use crate::gateway::template::MacroTable;
use crate::gateway::wire::DsUser;
use crate::gateway::command::GwCommand;
use crate::support::error::Error;

/// Answer to a directory synchronisation request: one `DS-USER` record
/// per exported user.
const TEMPLATE: &str = "WPC-API= 1.2;  \r\n\
                        Header-Char= T50;  \r\n\
                        MSG-TYPE= ADMIN;  \r\n\
                        ${users_block}\
                        -END-\r\n";

pub struct DirectoryResponse {
    command: GwCommand,
    on_self: MacroTable,
    user_count: usize,
}

fn render_user(user: &DsUser) -> String {
    format!(
        "DS-USER=  \r\n\
         \x20   Operation= List;  \r\n\
         \x20   Domain= {};  \r\n\
         \x20   Post-Office= {};  \r\n\
         \x20   Object= {};  \r\n\
         \x20   Visibility= System;  \r\n\
         \x20   Last-Name= {};  \r\n\
         \x20   First-Name= {};  \r\n\
         \x20   Network-ID= {};  \r\n\
         ;  \r\n",
        super::escape(&user.domain),
        super::escape(&user.post_office),
        super::escape(&user.object_name),
        super::escape(&user.last_name),
        super::escape(&user.first_name),
        super::escape(&user.network_id),
    )
}

impl DirectoryResponse {
    pub fn new(command: GwCommand, users: &[DsUser]) -> DirectoryResponse {
        let mut users_block = String::new();
        for user in users {
            users_block.push_str(&render_user(user));
        }

        let mut on_self = MacroTable::new();
        on_self.set("users_block", users_block);

        DirectoryResponse {
            command,
            on_self,
            user_count: users.len(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.user_count
    }
}

impl GwResponse for DirectoryResponse {
    fn command(&self) -> &GwCommand {
        &self.command
    }

    fn render(&self) -> Result<Option<String>, Error> {
        super::render_template(TEMPLATE, &self.on_self, &MacroTable::new())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn jdoe() -> DsUser {
        DsUser::new("jdoe@dom.po", "dom", "po", "jdoe", "Doe", "Jane")
    }

    #[test]
    fn renders_user_records() {
        let cmd = GwCommand::unknown("adm.001", "-GET-DIRECTORY-");
        let resp = DirectoryResponse::new(cmd, &[jdoe()]);
        assert_eq!(1, resp.user_count());

        let text = resp.render().unwrap().unwrap();
        assert!(text.starts_with("WPC-API= 1.2;  \r\n"));
        assert!(text.contains("MSG-TYPE= ADMIN;  \r\n"));
        assert!(text.contains("DS-USER=  \r\n"));
        assert!(text.contains("    Domain= dom;  \r\n"));
        assert!(text.contains("    Post-Office= po;  \r\n"));
        assert!(text.contains("    Object= jdoe;  \r\n"));
        assert!(text.contains("    Last-Name= Doe;  \r\n"));
        assert!(text.contains("    First-Name= Jane;  \r\n"));
        assert!(text.contains("    Network-ID= jdoe@dom.po;  \r\n"));
        assert!(text.ends_with("-END-\r\n"));
    }

    #[test]
    fn escapes_separator_characters_in_user_fields() {
        let cmd = GwCommand::unknown("adm.001", "-GET-DIRECTORY-");
        let user =
            DsUser::new("jdoe@dom.po", "dom", "po", "jdoe", "Doe; Jr", "Jane");
        let resp = DirectoryResponse::new(cmd, &[user]);

        let text = resp.render().unwrap().unwrap();
        assert!(text.contains("    Last-Name= Doe\\; Jr;  \r\n"));
    }

    #[test]
    fn empty_directory_still_renders() {
        let cmd = GwCommand::unknown("adm.001", "-GET-DIRECTORY-");
        let resp = DirectoryResponse::new(cmd, &[]);
        let text = resp.render().unwrap().unwrap();
        assert!(!text.contains("DS-USER"));
        assert!(text.contains("MSG-TYPE= ADMIN;  \r\n-END-\r\n"));
    }
}
