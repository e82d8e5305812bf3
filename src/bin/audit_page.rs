//! Audits a saved product page.
//!
//! Usage: `audit_page <url> [file]`
//!
//! Reads HTML from `file` (or stdin), prints the audit report as JSON to
//! stdout. Failures are printed as an error report and exit with status 1.
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `info`).

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use listing_audit::{analyze_bytes, Error, ErrorReport};

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(url) = args.first() else {
        eprintln!("usage: audit_page <url> [file]");
        return ExitCode::from(2);
    };

    let output = read_page(args.get(1).map(String::as_str))
        .and_then(|html| analyze_bytes(&html, url))
        .and_then(|report| {
            report
                .to_json_pretty()
                .map_err(|err| Error::Unexpected(err.to_string()))
        });

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, status = err.status_code(), "audit failed");
            let report = ErrorReport::new(&err, url);
            println!(
                "{}",
                serde_json::to_string_pretty(&report).unwrap_or_else(|_| err.to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn read_page(path: Option<&str>) -> Result<Vec<u8>, Error> {
    match path {
        Some(path) => fs::read(path).map_err(|err| Error::Unexpected(format!("{path}: {err}"))),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|err| Error::Unexpected(format!("stdin: {err}")))?;
            Ok(buffer)
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
