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
use std::sync::Mutex;

use super::{Folder, GwStore};
use crate::support::error::Error;

/// In-memory `GwStore`, with the same direction rules as the real one.
/// Backs the self-check command and most pipeline tests.
#[derive(Default)]
pub struct MemStore {
    files: Mutex<HashMap<(Folder, String), Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore::default()
    }

    /// Places a file directly, bypassing the direction rules, the way
    /// the client drops files into the inbound folders.
    pub fn seed(&self, folder: Folder, name: &str, data: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert((folder, name.to_owned()), data.to_vec());
    }

    /// Reads a file directly, bypassing the direction rules, the way
    /// the client picks up outbound files.
    pub fn peek(&self, folder: Folder, name: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(&(folder, name.to_owned()))
            .cloned()
    }

    /// Names currently present in a folder, direction rules ignored.
    pub fn names(&self, folder: Folder) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|(f, _)| *f == folder)
            .map(|(_, n)| n.clone())
            .collect();
        names.sort();
        names
    }
}

impl GwStore for MemStore {
    fn list(&self, folder: Folder) -> Result<Vec<String>, Error> {
        if !folder.can_read() {
            return Err(Error::FolderNotReadable(folder.groupwise_name()));
        }
        Ok(self
            .names(folder)
            .into_iter()
            .filter(|n| folder.verify(n))
            .collect())
    }

    fn fetch(&self, folder: Folder, name: &str) -> Option<Vec<u8>> {
        if !folder.can_read() {
            return None;
        }
        self.peek(folder, name)
    }

    fn exists(&self, folder: Folder, name: &str) -> bool {
        folder.can_read()
            && self
                .files
                .lock()
                .unwrap()
                .contains_key(&(folder, name.to_owned()))
    }

    fn delete(&self, folder: Folder, name: &str) -> bool {
        if !folder.can_delete() {
            return false;
        }
        self.files
            .lock()
            .unwrap()
            .remove(&(folder, name.to_owned()));
        true
    }

    fn store(&self, folder: Folder, name: &str, data: &[u8]) -> bool {
        if !folder.can_write() {
            return false;
        }

        let mut files = self.files.lock().unwrap();
        let key = (folder, name.to_owned());
        if files.contains_key(&key) {
            return false;
        }
        files.insert(key, data.to_vec());
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn behaves_like_the_file_store() {
        let store = MemStore::new();
        store.seed(Folder::HeadersIn, "in.api", b"header");
        store.seed(Folder::HeadersIn, "junk.tmp", b"x");

        assert_eq!(
            vec!["in.api".to_owned()],
            store.list(Folder::HeadersIn).unwrap()
        );
        assert_eq!(
            Some(b"header".to_vec()),
            store.fetch(Folder::HeadersIn, "in.api")
        );

        assert!(store.store(Folder::HeadersOut, "out.api", b"resp"));
        assert!(!store.store(Folder::HeadersOut, "out.api", b"resp2"));
        assert!(store.fetch(Folder::HeadersOut, "out.api").is_none());
        assert_eq!(
            Some(b"resp".to_vec()),
            store.peek(Folder::HeadersOut, "out.api")
        );

        assert!(store.delete(Folder::HeadersIn, "in.api"));
        assert!(store.delete(Folder::HeadersIn, "in.api"));
        assert!(!store.delete(Folder::HeadersOut, "out.api"));
    }
}
