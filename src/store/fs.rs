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

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rand::Rng;

use super::{Folder, GwStore};
use crate::support::error::Error;

/// `GwStore` over a directory on the local file system, the directory
/// the GroupWise API actually exchanges files through.
pub struct FsStore {
    base: PathBuf,
}

impl FsStore {
    /// Opens the store rooted at `base`, creating the root and the five
    /// API subdirectories as needed and verifying that each writable
    /// folder really accepts writes.
    pub fn new(base: impl Into<PathBuf>) -> Result<FsStore, Error> {
        let store = FsStore { base: base.into() };

        if store.base.exists() && !store.base.is_dir() {
            return Err(Error::Config(format!(
                "invalid API root: {}",
                store.base.display()
            )));
        }
        fs::create_dir_all(&store.base)?;

        for &folder in &Folder::ALL {
            store.test_folder(folder)?;
        }

        Ok(store)
    }

    fn subdir(&self, folder: Folder) -> PathBuf {
        self.base.join(folder.groupwise_name())
    }

    fn file(&self, folder: Folder, name: &str) -> PathBuf {
        self.subdir(folder).join(name)
    }

    fn test_folder(&self, folder: Folder) -> Result<(), Error> {
        let dir = self.subdir(folder);

        if !dir.exists() {
            debug!("creating API subfolder {}", dir.display());
            fs::create_dir(&dir)?;
        }
        if dir.is_file() {
            return Err(Error::Config(format!(
                "not a directory: {}",
                dir.display()
            )));
        }

        if folder.can_write() || folder.can_delete() {
            let probe = dir.join(format!(
                "tst{}.tmp",
                rand::thread_rng().gen::<u32>()
            ));
            fs::write(&probe, b"")?;
            fs::remove_file(&probe)?;
        }

        Ok(())
    }
}

impl GwStore for FsStore {
    fn list(&self, folder: Folder) -> Result<Vec<String>, Error> {
        if !folder.can_read() {
            return Err(Error::FolderNotReadable(folder.groupwise_name()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(self.subdir(folder))? {
            let entry = entry?;
            if entry.path().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if folder.verify(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn fetch(&self, folder: Folder, name: &str) -> Option<Vec<u8>> {
        if !folder.can_read() {
            return None;
        }
        fs::read(self.file(folder, name)).ok()
    }

    fn exists(&self, folder: Folder, name: &str) -> bool {
        folder.can_read() && self.file(folder, name).exists()
    }

    fn delete(&self, folder: Folder, name: &str) -> bool {
        if !folder.can_delete() {
            return false;
        }

        let path = self.file(folder, name);
        if !path.exists() {
            return true;
        }
        if let Err(e) = fs::remove_file(&path) {
            warn!("could not delete {}: {}", path.display(), e);
        }
        true
    }

    fn store(&self, folder: Folder, name: &str, data: &[u8]) -> bool {
        if !folder.can_write() {
            return false;
        }

        let path = self.file(folder, name);
        if path.exists() {
            return false;
        }
        match fs::write(&path, data) {
            Ok(()) => true,
            Err(e) => {
                warn!("could not store {}: {}", path.display(), e);
                false
            },
        }
    }
}
