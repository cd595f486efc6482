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

use std::fmt;

use super::date::GwDate;

/// An ordered list of busy intervals, `(start, end)` pairs.
///
/// The order is whatever the producer supplied; overlapping intervals are
/// not merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusyReport {
    busy_times: Vec<(GwDate, GwDate)>,
}

impl BusyReport {
    pub fn new() -> BusyReport {
        BusyReport::default()
    }

    pub fn push(&mut self, start: GwDate, end: GwDate) {
        self.busy_times.push((start, end));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(GwDate, GwDate)> {
        self.busy_times.iter()
    }

    pub fn len(&self) -> usize {
        self.busy_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.busy_times.is_empty()
    }
}

impl fmt::Display for BusyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BUSY-REPORT=")?;
        if self.busy_times.is_empty() {
            return write!(f, "\n    ;");
        }
        let mut first = true;
        for (start, end) in &self.busy_times {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "\n    {};\n    {};", start, end)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preserves_caller_order_without_merging() {
        let mut report = BusyReport::new();
        report.push(
            GwDate::parse("28/11/07 12:00").unwrap(),
            GwDate::parse("28/11/07 13:00").unwrap(),
        );
        report.push(
            GwDate::parse("28/11/07 09:00").unwrap(),
            GwDate::parse("28/11/07 12:30").unwrap(),
        );
        assert_eq!(2, report.len());
        let starts: Vec<_> =
            report.iter().map(|(s, _)| s.to_string()).collect();
        assert_eq!(vec!["28/11/07 12:00", "28/11/07 09:00"], starts);
    }

    #[test]
    fn empty_report_renders_terminator_only() {
        assert_eq!("BUSY-REPORT=\n    ;", BusyReport::new().to_string());
    }
}
