//! waterwise - WaterWise session CLI
//!
//! Signs in, registers and manages the locally persisted session.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and keep the session on disk
//! waterwise login --email ana@x.com --password abcdef1
//!
//! # Register an account together with a property
//! waterwise register --name Ana --email ana@x.com --password abcdef1 \
//!     --property-name "Fazenda X" --street "Estrada 1" --area 10
//!
//! # Show the restored session
//! waterwise whoami --pretty
//! ```

use ww_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error formatting output: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
