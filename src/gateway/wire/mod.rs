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

//! Value types of the GroupWise wire format.

pub mod address;
pub mod busy;
pub mod date;
pub mod directory;
pub mod file_xfer;
pub mod status;

pub use self::address::{Address, AddressList};
pub use self::busy::BusyReport;
pub use self::date::GwDate;
pub use self::directory::DsUser;
pub use self::file_xfer::{FileDescriptor, FileDescriptorList};
pub use self::status::StatusReport;
