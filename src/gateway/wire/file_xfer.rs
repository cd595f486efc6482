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
use crate::support::error::Error;

/// One attached file as described in an `Attach-File=` block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileDescriptor {
    pub conversion_allowed: bool,
    pub current_file: Option<String>,
    pub original_file: Option<String>,
    pub size: i64,
    pub date: Option<GwDate>,
}

impl FileDescriptor {
    pub fn new() -> FileDescriptor {
        FileDescriptor::default()
    }

    /// Ingests one `key= value` continuation-line pair.
    ///
    /// A malformed `Size` value is a hard parse error; a malformed `Date`
    /// leaves the date unset.
    pub fn add_pair(&mut self, key: &str, value: &str) -> Result<(), Error> {
        if "-CONVERSION-ALLOWED-".eq_ignore_ascii_case(key) {
            self.conversion_allowed = value.eq_ignore_ascii_case("true");
        } else if "Current-File".eq_ignore_ascii_case(key) {
            self.current_file = Some(value.to_owned());
        } else if "Original-File".eq_ignore_ascii_case(key) {
            self.original_file = Some(value.to_owned());
        } else if "Size".eq_ignore_ascii_case(key) {
            self.size = value.parse().map_err(|_| {
                Error::Config(format!("bad attachment size: {}", value))
            })?;
        } else if "Date".eq_ignore_ascii_case(key) {
            self.date = GwDate::parse(value);
        }
        Ok(())
    }
}

/// An insertion-ordered, duplicate-free collection of file descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileDescriptorList {
    descriptors: Vec<FileDescriptor>,
}

impl FileDescriptorList {
    pub fn new() -> FileDescriptorList {
        FileDescriptorList::default()
    }

    pub fn push(&mut self, descriptor: FileDescriptor) {
        if !self.descriptors.contains(&descriptor) {
            self.descriptors.push(descriptor);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
