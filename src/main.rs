// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use devsift::commands::build_info::BuildInfoCommand;
use devsift::commands::detect::{DetectCommand, HelperUsefulCommand};
use devsift::commands::store::StoreCommand;
use devsift::config::new_devsift_config;
use devsift::error::{Result, format_error_chain, format_error_with_color, get_exit_code};
use devsift::logging;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devsift")]
#[command(author, version, about = "Offline device detection from headers or build info", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Rule store directory (overrides config and DEVSIFT_STORE)
    #[arg(long, value_name = "DIR", global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect a device from request headers
    #[command(visible_alias = "d")]
    #[command(long_about = "Detect a device from request headers

Examples:
  devsift detect -H 'User-Agent: Mozilla/5.0 (iPhone; CPU iPhone OS 4_3 like Mac OS X)'
  devsift detect -H 'User-Agent: ...' -H 'x-wap-profile: http://example.com/p.xml' --json
  devsift detect -H 'User-Agent: ...' --hardware 320:480:100:100")]
    Detect {
        /// Request header as 'Name: value' (repeatable)
        #[arg(short = 'H', long = "header", value_name = "HEADER", required = true)]
        headers: Vec<String>,

        /// On-device hardware info 'width:height:ratio:benchmark'
        #[arg(long, value_name = "INFO")]
        hardware: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Detect a device from native build properties
    #[command(visible_alias = "bi")]
    BuildInfo {
        /// Build property as 'key=value' (repeatable)
        #[arg(value_name = "KEY=VALUE", required = true)]
        entries: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Tell whether on-device hardware info would improve detection
    HelperUseful {
        /// Request header as 'Name: value' (repeatable)
        #[arg(short = 'H', long = "header", value_name = "HEADER", required = true)]
        headers: Vec<String>,
    },

    /// Inspect the rule store
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    setup_logger(&cli);

    // Load configuration once at startup
    let config = match new_devsift_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let store = cli.store.as_deref();
    let result: Result<bool> = (|| match cli.command {
        Commands::Detect {
            headers,
            hardware,
            json,
        } => {
            let command = DetectCommand::new(&config, store)?;
            command.execute(&headers, hardware.as_deref(), json)
        }
        Commands::BuildInfo { entries, json } => {
            let command = BuildInfoCommand::new(&config, store)?;
            command.execute(&entries, json)
        }
        Commands::HelperUseful { headers } => {
            let command = HelperUsefulCommand::new(&config, store)?;
            command.execute(&headers)
        }
        Commands::Store { command } => command.execute(&config, store).map(|()| true),
    })();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprint!(
                "{}",
                format_error_with_color(&e, std::io::stderr().is_terminal())
            );
            std::process::exit(get_exit_code(&e));
        }
    }
}
