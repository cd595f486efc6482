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

use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::support::sysexits::*;
use crate::support::system_config::SystemConfig;

#[derive(StructOpt)]
#[structopt(max_term_width = 80)]
enum Command {
    /// Run the gateway.
    ///
    /// Scans the inbound folder of the GroupWise API tree for new headers
    /// and answers them until interrupted.
    Serve(CommonOptions),
    /// Run a canned free/busy exchange through an in-memory gateway and
    /// print the result. No configuration or folder tree is required.
    Check,
}

#[derive(StructOpt, Default)]
struct CommonOptions {
    /// The directory containing `gwgate.toml` etc
    /// [default: /etc/gwgate or /usr/local/etc/gwgate]
    #[structopt(long, parse(from_os_str))]
    root: Option<PathBuf>,
}

pub fn main() {
    // Clap exits with status 1 instead of EX_USAGE if we use the more concise
    // API
    let cmd = Command::from_clap(&match Command::clap().get_matches_safe() {
        Ok(matches) => matches,
        Err(
            e @ clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            },
        )
        | Err(
            e @ clap::Error {
                kind: clap::ErrorKind::VersionDisplayed,
                ..
            },
        ) => {
            println!("{}", e.message);
            return;
        },
        Err(e) => {
            eprintln!("{}", e.message);
            EX_USAGE.exit()
        },
    });

    match cmd {
        Command::Serve(opts) => serve(opts),
        Command::Check => {
            crate::init_simple_log();
            super::check::check();
        },
    }
}

fn serve(opts: CommonOptions) {
    let root = opts.root.unwrap_or_else(|| {
        if Path::new("/etc/gwgate/gwgate.toml").is_file() {
            "/etc/gwgate".to_owned().into()
        } else if Path::new("/usr/local/etc/gwgate/gwgate.toml").is_file() {
            "/usr/local/etc/gwgate".to_owned().into()
        } else {
            eprintln!(
                "Neither /etc/gwgate nor /usr/local/etc/gwgate looks like\n\
                 the gwgate root; use --root=/path/to/gwgate if your\n\
                 installation is elsewhere."
            );
            EX_CONFIG.exit()
        }
    });

    let system_config_path = root.join("gwgate.toml");
    let system_config = match SystemConfig::load(&system_config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Error in config file at '{}': {}",
                system_config_path.display(),
                e
            );
            EX_CONFIG.exit()
        },
    };

    // If anything goes wrong past this point it needs to land in the
    // configured log, not on a stderr nobody is watching.
    let log_config_file = root.join("logging.toml");
    if log_config_file.is_file() {
        log4rs::init_file(
            log_config_file,
            log4rs::file::Deserializers::new(),
        )
        .expect("Failed to initialise logging");
    } else {
        crate::init_simple_log();
    }

    super::serve::serve(system_config);
}
