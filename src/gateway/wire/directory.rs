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

/// One user entry of a `DS-USER` directory listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DsUser {
    pub network_id: String,
    pub domain: String,
    pub post_office: String,
    pub object_name: String,
    pub last_name: String,
    pub first_name: String,
}

impl DsUser {
    pub fn new(
        network_id: impl Into<String>,
        domain: impl Into<String>,
        post_office: impl Into<String>,
        object_name: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> DsUser {
        DsUser {
            network_id: network_id.into(),
            domain: domain.into(),
            post_office: post_office.into(),
            object_name: object_name.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }
}
