use std::time::Duration;

use crate::cli::{FetchArgs, FilesArgs, ShowArgs};

pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub json_output: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_fetch_args(args: &FetchArgs) -> Self {
        Config {
            base_url: args.api.clone(),
            timeout: Duration::from_secs(args.timeout),
            json_output: args.json,
            verbose: args.verbose,
        }
    }

    pub fn from_files_args(args: &FilesArgs) -> Self {
        Config {
            base_url: args.api.clone(),
            timeout: Duration::from_secs(args.timeout),
            json_output: args.json,
            verbose: args.verbose,
        }
    }

    pub fn from_show_args(args: &ShowArgs) -> Self {
        Config {
            base_url: args.api.clone(),
            timeout: Duration::from_secs(args.timeout),
            json_output: args.json,
            verbose: false,
        }
    }

    #[cfg(feature = "tui")]
    pub fn from_dash_args(args: &crate::cli::DashArgs) -> Self {
        Config {
            base_url: args.api.clone(),
            timeout: Duration::from_secs(args.timeout),
            json_output: false,
            verbose: false,
        }
    }
}
