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

use std::collections::HashMap;

use super::CalendarBackend;
use crate::gateway::wire::DsUser;

/// A canned in-process backend.
///
/// Users and busy slots are fixed at construction; queries for users the
/// mock does not know fail (return `None`), the way a real backend fails
/// for an unprovisioned mailbox. Used by the self-check command and by
/// tests.
#[derive(Default)]
pub struct MockCalendar {
    users: Vec<DsUser>,
    busy: HashMap<String, Vec<(i64, i64)>>,
}

impl MockCalendar {
    pub fn new() -> MockCalendar {
        MockCalendar::default()
    }

    pub fn add_user(&mut self, user: DsUser) {
        self.busy.entry(user.network_id.to_uppercase()).or_default();
        self.users.push(user);
    }

    /// Registers a busy slot, implicitly making the user known.
    pub fn add_busy(&mut self, user: &str, start: i64, end: i64) {
        self.busy
            .entry(user.to_uppercase())
            .or_default()
            .push((start, end));
    }
}

impl CalendarBackend for MockCalendar {
    fn retrieve_all_users(&self) -> Option<Vec<DsUser>> {
        Some(self.users.clone())
    }

    fn retrieve_free_busy(
        &self,
        user: &str,
        from: i64,
        until: i64,
    ) -> Option<Vec<(i64, i64)>> {
        let slots = self.busy.get(&user.to_uppercase())?;
        Some(
            slots
                .iter()
                .copied()
                .filter(|&(start, end)| end > from && start < until)
                .collect(),
        )
    }
}
