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

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No read access to folder {0}")]
    FolderNotReadable(&'static str),
    #[error("Could not store '{0}', I/O problem?")]
    StoreFailed(String),
    #[error("Could not delete '{0}'")]
    DeleteFailed(String),
    #[error("Could not get connection in time")]
    ThrottleTimeout,
    #[error("Template references unknown macro '{0}'")]
    UnknownMacro(String),
    #[error("Processing function panicked")]
    ProcessingPanic,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
