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

//! Access to the GroupWise API directory structure.
//!
//! The client exchanges messages through five well-known folders under a
//! shared root. Each folder is either inbound (we read and delete) or
//! outbound (we only write); the trait enforces the direction so that a
//! handler cannot accidentally consume its own output.

mod fs;
mod memory;

pub use self::fs::FsStore;
pub use self::memory::MemStore;

use lazy_static::lazy_static;
use regex::Regex;

use crate::support::error::Error;

lazy_static! {
    // Header folders only ever carry "*.api"-style names; everything
    // else in them belongs to the client and must not be touched.
    static ref HEADER_NAME: Regex =
        Regex::new("^(?i).*api$").unwrap();
}

/// The folders of the API directory structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Folder {
    HeadersIn,
    HeadersOut,
    ContentIn,
    ContentOut,
    Log,
}

impl Folder {
    pub const ALL: [Folder; 5] = [
        Folder::HeadersIn,
        Folder::HeadersOut,
        Folder::ContentIn,
        Folder::ContentOut,
        Folder::Log,
    ];

    /// The directory name the client knows this folder by.
    pub fn groupwise_name(self) -> &'static str {
        match self {
            Folder::HeadersIn => "API_IN",
            Folder::HeadersOut => "API_OUT",
            Folder::ContentIn => "ATT_IN",
            Folder::ContentOut => "ATT_OUT",
            Folder::Log => "WPCSIN",
        }
    }

    pub fn can_read(self) -> bool {
        match self {
            Folder::HeadersIn | Folder::ContentIn => true,
            _ => false,
        }
    }

    pub fn can_write(self) -> bool {
        !self.can_read()
    }

    pub fn can_delete(self) -> bool {
        self.can_read()
    }

    /// True if `file_name` is valid for this folder.
    pub fn verify(self, file_name: &str) -> bool {
        match self {
            Folder::HeadersIn | Folder::HeadersOut => {
                HEADER_NAME.is_match(file_name)
            },
            _ => true,
        }
    }
}

/// Storage operations on the API directory structure.
///
/// All operations are deliberately non-throwing where the upstream
/// behaviour is best-effort: `fetch` answers `None` and `store`/`delete`
/// answer `false` rather than failing, and callers decide how hard to
/// react. Only `list` distinguishes "empty" from "unreadable".
pub trait GwStore: Send + Sync {
    /// Names of the files currently in `folder`, filtered to the names
    /// valid for it.
    fn list(&self, folder: Folder) -> Result<Vec<String>, Error>;

    /// Retrieves a file, or `None` if it cannot be read.
    fn fetch(&self, folder: Folder, name: &str) -> Option<Vec<u8>>;

    fn exists(&self, folder: Folder, name: &str) -> bool;

    /// Deletes a file. Answers true if the file is gone afterwards,
    /// including the case where it never existed.
    fn delete(&self, folder: Folder, name: &str) -> bool;

    /// Stores a new file. Refuses to overwrite: storing under a name
    /// that already exists answers false.
    fn store(&self, folder: Folder, name: &str, data: &[u8]) -> bool;
}
