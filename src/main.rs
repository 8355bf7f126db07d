// SPDX-License-Identifier: MPL-2.0
use image_finder::app::{self, paths, Flags};
use image_finder::infrastructure::http;
use image_finder::logging;
use std::process::ExitCode;

const HELP: &str = "\
Image Finder - keyword image search

USAGE:
  image_finder [OPTIONS] [QUERY]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory for the log file
  -h, --help            Print this help

ENVIRONMENT:
  IMAGE_FINDER_API_KEY  Pixabay API key (overrides settings.toml)
  RUST_LOG              Log filter (default: info)
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        initial_query: None,
    };

    let rest: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();
    let initial_query = (!rest.is_empty()).then(|| rest.join(" "));

    Ok(Flags {
        initial_query,
        ..flags
    })
}

fn main() -> ExitCode {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Logging is best effort; the app runs without a log file.
    match paths::get_app_data_dir() {
        Some(data_dir) => {
            if let Err(err) = logging::init(&logging::log_path_in(&data_dir)) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        None => eprintln!("warning: logging disabled: no data directory"),
    }

    let http = match http::build_client() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "failed to build HTTP client");
            eprintln!("error: failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    match app::run(flags, http) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
