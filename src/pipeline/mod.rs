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

//! The staged processing pipeline.
//!
//! Headers move through four stages connected by sinks: scan (find new
//! inbound headers), parse, handle, respond, and finally cleanup. Each
//! stage runs its own pool of worker threads; a failure in any stage
//! re-enqueues the item rather than losing it.

pub mod responder;
pub mod scanner;
pub mod sink;
pub mod stage;
pub mod throttle;

pub use self::responder::{Cleaner, Responder};
pub use self::scanner::InputScanner;
pub use self::sink::{NullSink, SimpleSink, Sink};
pub use self::stage::Stage;
pub use self::throttle::ConnectionThrottle;
