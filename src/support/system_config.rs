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

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The system-wide configuration for gwgate.
///
/// This is stored in a file named `gwgate.toml` under the directory given by
/// `--root` on the command line.
///
/// There is no ambient global configuration: each component of the gateway is
/// handed the section(s) it needs at construction time.
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SystemConfig {
    /// Options describing the GroupWise API directory tree.
    pub gateway: GatewayConfig,

    /// Worker counts and retry behaviour of the processing pipeline.
    pub pipeline: PipelineConfig,

    /// Pacing of outbound calls to the calendar backend.
    pub throttle: ThrottleConfig,

    /// Allow/deny lists applied to directory listings.
    pub directory_filter: DirectoryFilterConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// The root of the GroupWise API folder tree (the directory containing
    /// `API_IN`, `API_OUT`, and so on). Subdirectories are created on startup
    /// if they are missing.
    pub home: PathBuf,

    /// If true (the default), a human-readable record of every processed
    /// message is written to the log folder alongside the wire response.
    pub log_messages: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            home: PathBuf::from("/var/spool/gwgate"),
            log_messages: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of worker threads parsing inbound headers.
    pub parse_workers: usize,

    /// Number of worker threads executing command handlers. Handlers may
    /// block on the backend, so this is the largest pool.
    pub handle_workers: usize,

    /// Number of worker threads rendering and storing responses.
    pub respond_workers: usize,

    /// Number of worker threads deleting processed inbound headers.
    pub cleanup_workers: usize,

    /// How long an idle worker sleeps before polling its queue again, in
    /// milliseconds.
    pub idle_sleep_ms: u64,

    /// How long a worker blocks waiting for an item to check out before
    /// giving up and going idle, in milliseconds.
    pub checkout_timeout_ms: u64,

    /// How long a failed item is held back before it is re-enqueued for
    /// another attempt, in milliseconds.
    pub retry_penalty_ms: u64,

    /// Interval between scans of the inbound folder, in milliseconds.
    pub scan_interval_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            parse_workers: 10,
            handle_workers: 100,
            respond_workers: 10,
            cleanup_workers: 5,
            idle_sleep_ms: 500,
            checkout_timeout_ms: 500,
            retry_penalty_ms: 5000,
            scan_interval_ms: 500,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// The permissible maximum number of backend requests per second.
    ///
    /// Setting this to 0 disables throttling entirely.
    pub max_requests_per_second: usize,

    /// How long a handler may block waiting for a request slot before the
    /// attempt is abandoned and retried later, in milliseconds.
    pub block_timeout_ms: u64,

    /// Maximum deviation, in percent, applied to each retry delay so that
    /// concurrent clients do not retry in lock-step.
    pub max_random_deviation_percent: f64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        ThrottleConfig {
            max_requests_per_second: 3,
            block_timeout_ms: 360_000,
            max_random_deviation_percent: 25.0,
        }
    }
}

/// Identity allow/deny lists for directory listings.
///
/// These are the resolved result sets of the operator's directory queries;
/// resolving them (e.g. against LDAP) is outside the gateway itself.
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DirectoryFilterConfig {
    /// Identities removed from every directory listing. `None` means no
    /// deny list is in effect.
    pub blacklist: Option<Vec<String>>,

    /// If present, only these identities survive a directory listing.
    pub whitelist: Option<Vec<String>>,
}

impl SystemConfig {
    pub fn load(path: &std::path::Path) -> Result<Self, crate::support::error::Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
