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

use log::info;

use crate::gateway::wire::DsUser;
use crate::support::system_config::DirectoryFilterConfig;

/// Removes users the operator does not want exported in a directory sync.
///
/// A user is matched by its network id, case-insensitively. If a whitelist
/// is configured, users not on it are dropped; if a blacklist is configured,
/// users on it are dropped. A list that is absent from the configuration
/// imposes no constraint at all, which is distinct from an empty list (an
/// empty whitelist drops everyone).
pub fn filter_identities(
    config: &DirectoryFilterConfig,
    users: Vec<DsUser>,
) -> Vec<DsUser> {
    let whitelist = normalise(&config.whitelist);
    let blacklist = normalise(&config.blacklist);

    let before = users.len();
    let retained: Vec<DsUser> = users
        .into_iter()
        .filter(|user| {
            let id = user.network_id.to_uppercase();
            if let Some(ref allowed) = whitelist {
                if !allowed.contains(&id) {
                    return false;
                }
            }
            if let Some(ref denied) = blacklist {
                if denied.contains(&id) {
                    return false;
                }
            }
            true
        })
        .collect();

    if retained.len() != before {
        info!(
            "Directory filter removed {} of {} users",
            before - retained.len(),
            before
        );
    }
    retained
}

fn normalise(list: &Option<Vec<String>>) -> Option<Vec<String>> {
    list.as_ref()
        .map(|entries| entries.iter().map(|e| e.to_uppercase()).collect())
}
