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

//! The calendar backend and the handlers that bridge commands to it.

pub mod admin;
pub mod mock;
pub mod search;
pub mod user_filter;

pub use self::admin::AdminHandler;
pub use self::mock::MockCalendar;
pub use self::search::SearchHandler;

use crate::gateway::wire::DsUser;

/// The calendar system free/busy data and user listings come from.
///
/// Both operations are best-effort: `None` means the backend could not
/// answer, and the caller decides whether to retry or give up. Slots and
/// query bounds are epoch-millisecond intervals.
pub trait CalendarBackend: Send + Sync {
    /// All users that should be exported in a directory sync.
    fn retrieve_all_users(&self) -> Option<Vec<DsUser>>;

    /// The busy intervals of one user between `from` and `until`.
    fn retrieve_free_busy(
        &self,
        user: &str,
        from: i64,
        until: i64,
    ) -> Option<Vec<(i64, i64)>>;
}
