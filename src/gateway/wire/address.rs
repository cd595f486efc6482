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

/// A GroupWise address block.
///
/// `WPD` is the domain, `WPPO` the post office, `WPU` the user, and `CDBA`
/// the combined display form (`domain.postoffice..user`). A sender that
/// could not produce the structured form supplies a raw string instead,
/// which takes precedence when the address is rendered back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Address {
    pub wpd: Option<String>,
    pub wppo: Option<String>,
    pub wpu: Option<String>,
    pub cdba: Option<String>,
    pub raw_fallback: Option<String>,
}

impl Address {
    pub fn new() -> Address {
        Address::default()
    }

    pub fn raw(fallback: impl Into<String>) -> Address {
        Address {
            raw_fallback: Some(fallback.into()),
            ..Address::default()
        }
    }

    /// Ingests one `key= value` continuation-line pair. Unrecognised keys
    /// are ignored.
    pub fn add_pair(&mut self, key: &str, value: &str) {
        if "WPD".eq_ignore_ascii_case(key) {
            self.wpd = Some(value.to_owned());
        } else if "WPPO".eq_ignore_ascii_case(key) {
            self.wppo = Some(value.to_owned());
        } else if "WPU".eq_ignore_ascii_case(key) {
            self.wpu = Some(value.to_owned());
        } else if "CDBA".eq_ignore_ascii_case(key) {
            self.cdba = Some(value.to_owned());
        }
    }

    pub fn cdba(&self) -> Option<&str> {
        self.cdba.as_deref()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref raw) = self.raw_fallback {
            return write!(f, "{}", raw);
        }
        if let Some(ref wpd) = self.wpd {
            writeln!(f, "    WPD = {};", wpd)?;
        }
        if let Some(ref wppo) = self.wppo {
            writeln!(f, "    WPPO = {};", wppo)?;
        }
        if let Some(ref wpu) = self.wpu {
            writeln!(f, "    WPU = {};", wpu)?;
        }
        if let Some(ref cdba) = self.cdba {
            write!(f, "    CDBA = {};", cdba)?;
        }
        Ok(())
    }
}

/// An insertion-ordered, duplicate-free collection of addresses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressList {
    recipients: Vec<Address>,
}

impl AddressList {
    pub fn new() -> AddressList {
        AddressList::default()
    }

    /// Appends an address unless an equal one is already present.
    pub fn push(&mut self, address: Address) {
        if !self.recipients.contains(&address) {
            self.recipients.push(address);
        }
    }

    pub fn first(&self) -> Option<&Address> {
        self.recipients.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.recipients.iter()
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}

impl fmt::Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for address in &self.recipients {
            if !first {
                write!(f, "  ,\n{}", address)?;
            } else {
                write!(f, "{}", address)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_pair_is_case_insensitive() {
        let mut a = Address::new();
        a.add_pair("wpd", "GOOGLE");
        a.add_pair("WPPO", "GOOGLEPO");
        a.add_pair("Wpu", "jdoe");
        a.add_pair("CDBA", "GOOGLE.GOOGLEPO..jdoe");
        a.add_pair("BOGUS", "ignored");
        assert_eq!(Some("GOOGLE.GOOGLEPO..jdoe"), a.cdba());
        assert_eq!(Some("jdoe"), a.wpu.as_deref());
    }

    #[test]
    fn raw_fallback_wins_over_structured_fields() {
        let a = Address::raw("Some Unparsed Name");
        assert_eq!("Some Unparsed Name", a.to_string());

        let mut b = Address::raw("still raw");
        b.add_pair("WPD", "DOM");
        b.add_pair("CDBA", "DOM..u");
        assert_eq!("still raw", b.to_string());
    }

    #[test]
    fn structured_rendering_skips_unset_fields() {
        let mut a = Address::new();
        a.add_pair("WPD", "DOM");
        a.add_pair("CDBA", "DOM..u");
        assert_eq!("    WPD = DOM;\n    CDBA = DOM..u;", a.to_string());
    }

    #[test]
    fn list_preserves_order_and_drops_duplicates() {
        let mut list = AddressList::new();
        for name in &["a", "b", "a", "c"] {
            let mut addr = Address::new();
            addr.add_pair("WPU", name);
            list.push(addr);
        }
        assert_eq!(3, list.len());
        let users: Vec<_> =
            list.iter().map(|a| a.wpu.clone().unwrap()).collect();
        assert_eq!(vec!["a", "b", "c"], users);
    }
}
