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

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// A calendar instant in the GroupWise wire form.
///
/// The textual format is `DD/MM/YY[YY] HH:MM[:SS] [+/-HH[:MM]]`. Two-digit
/// years 00-69 fall in the 2000s, 70-99 in the 1900s.
///
/// The UTC offset suffix, when present, is parsed and retained but NOT
/// applied to the stored instant. The legacy endpoint emits and expects
/// unshifted instants, so the offset is carried only so that nothing is
/// silently lost.
#[derive(Clone, Debug)]
pub struct GwDate {
    instant: NaiveDateTime,
    offset_hours: i32,
    offset_mins: i32,
}

impl GwDate {
    /// Parses the GroupWise textual form. Returns `None` for anything that
    /// does not resolve to a calendar instant.
    pub fn parse(text: &str) -> Option<GwDate> {
        let mut parts = text.trim().split_whitespace();
        let date_part = parts.next()?;
        let time_part = parts.next()?;
        let offset_part = parts.next();

        let mut dmy = date_part.split('/');
        let day: u32 = dmy.next()?.parse().ok()?;
        let month: u32 = dmy.next()?.parse().ok()?;
        let mut year: i32 = dmy.next()?.parse().ok()?;
        if dmy.next().is_some() {
            return None;
        }
        if year < 70 {
            year += 2000;
        } else if year < 100 {
            year += 1900;
        }

        let hms: Vec<&str> = time_part.split(':').collect();
        if hms.len() != 2 && hms.len() != 3 {
            return None;
        }
        let hour: u32 = hms[0].parse().ok()?;
        let minute: u32 = hms[1].parse().ok()?;
        let second: u32 = if hms.len() == 3 {
            hms[2].parse().ok()?
        } else {
            0
        };

        let (offset_hours, offset_mins) = match offset_part {
            None => (0, 0),
            Some(offset) => {
                let offset = offset.strip_prefix('+').unwrap_or(offset);
                let hm: Vec<&str> = offset.split(':').collect();
                if hm.len() != 1 && hm.len() != 2 {
                    return None;
                }
                let hours: i32 = hm[0].parse().ok()?;
                let mins: i32 =
                    if hm.len() == 2 { hm[1].parse().ok()? } else { 0 };
                (hours, mins)
            },
        };

        let instant = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, second)?;
        Some(GwDate {
            instant,
            offset_hours,
            offset_mins,
        })
    }

    /// The current wall-clock time, offset-free.
    pub fn now() -> GwDate {
        GwDate::from_utc_millis(Utc::now().timestamp_millis())
    }

    pub fn from_utc_millis(millis: i64) -> GwDate {
        let secs = millis.div_euclid(1000);
        let nanos = (millis.rem_euclid(1000) * 1_000_000) as u32;
        GwDate {
            instant: NaiveDateTime::from_timestamp(secs, nanos),
            offset_hours: 0,
            offset_mins: 0,
        }
    }

    pub fn utc_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// The parsed-but-unapplied UTC offset suffix, `(hours, minutes)`.
    pub fn offset(&self) -> (i32, i32) {
        (self.offset_hours, self.offset_mins)
    }
}

impl fmt::Display for GwDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:02} {:02}:{:02}",
            self.instant.day(),
            self.instant.month(),
            self.instant.year() % 100,
            self.instant.hour(),
            self.instant.minute(),
        )
    }
}

// Equality and ordering consider the instant only; the unapplied offset is
// carried verbatim and is not part of the value's identity.
impl PartialEq for GwDate {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for GwDate {}

impl PartialOrd for GwDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GwDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl std::hash::Hash for GwDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_two_digit_years_with_century_window() {
        let d = GwDate::parse("28/11/07 10:31").unwrap();
        assert_eq!("28/11/07 10:31", d.to_string());
        assert_eq!(
            2007,
            NaiveDateTime::from_timestamp(d.utc_millis() / 1000, 0).year()
        );

        let d = GwDate::parse("28/11/85 10:31").unwrap();
        assert_eq!(
            1985,
            NaiveDateTime::from_timestamp(d.utc_millis() / 1000, 0).year()
        );
    }

    #[test]
    fn parses_four_digit_years() {
        let d = GwDate::parse("01/02/2034 23:59").unwrap();
        assert_eq!("01/02/34 23:59", d.to_string());
    }

    #[test]
    fn optional_seconds_are_accepted() {
        let with = GwDate::parse("28/11/07 10:31:22").unwrap();
        let without = GwDate::parse("28/11/07 10:31").unwrap();
        assert_eq!(22_000, with.utc_millis() - without.utc_millis());
    }

    #[test]
    fn offset_is_kept_but_not_applied() {
        let plain = GwDate::parse("28/11/07 10:31").unwrap();
        let offset = GwDate::parse("28/11/07 10:31 +05:30").unwrap();
        assert_eq!(plain, offset);
        assert_eq!((5, 30), offset.offset());

        let negative = GwDate::parse("28/11/07 10:31 -08:00").unwrap();
        assert_eq!((-8, 0), negative.offset());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(GwDate::parse("").is_none());
        assert!(GwDate::parse("28/11/07").is_none());
        assert!(GwDate::parse("28/11 10:31").is_none());
        assert!(GwDate::parse("99/99/99 10:31").is_none());
        assert!(GwDate::parse("28/11/07 10").is_none());
    }

    #[test]
    fn ordering_is_by_instant() {
        let earlier = GwDate::parse("28/11/07 10:31").unwrap();
        let later = GwDate::parse("28/11/07 10:32 -11:00").unwrap();
        assert!(earlier < later);
    }
}
