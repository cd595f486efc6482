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

use super::date::GwDate;

/// A `Status-Report=` block: an action name and the time it happened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub action: Option<String>,
    pub time: Option<GwDate>,
}

impl StatusReport {
    pub fn new() -> StatusReport {
        StatusReport::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if "ACTION".eq_ignore_ascii_case(key) {
            self.action = Some(value.to_owned());
        } else if "TIME".eq_ignore_ascii_case(key) {
            self.time = GwDate::parse(value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let mut report = StatusReport::new();
        report.set("action", "Delivered");
        report.set("Time", "28/11/07 10:00");
        assert_eq!(Some("Delivered"), report.action.as_deref());
        assert!(report.time.is_some());
    }
}
