use clap::Parser;
use drivegauge::api::HttpApi;
use drivegauge::cli::{Cli, Command};
use drivegauge::config::Config;
use drivegauge::report;
use drivegauge::source::{Notice, SourceManager};
use drivegauge::util::{format_bytes, format_snapshot_date};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "tui")]
        Command::Dash(args) => {
            let config = Config::from_dash_args(&args);
            let api = match HttpApi::new(&config.base_url, config.timeout) {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    std::process::exit(1);
                }
            };

            if let Err(e) = drivegauge::ui::run(api) {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
        Command::Fetch(args) => {
            let config = Config::from_fetch_args(&args);
            let api = match HttpApi::new(&config.base_url, config.timeout) {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    std::process::exit(1);
                }
            };

            let mut mgr = SourceManager::new();
            let notices = mgr.fetch_latest(&api);

            for notice in &notices {
                if *notice != Notice::DataLoaded {
                    eprintln!("{}", notice.message());
                }
            }

            report::print(&mgr.dataset, &config);
            report::print_diagnostics(&mgr, &config);
        }
        Command::Files(args) => {
            let config = Config::from_files_args(&args);
            let api = match HttpApi::new(&config.base_url, config.timeout) {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    std::process::exit(1);
                }
            };

            let mut mgr = SourceManager::new();
            mgr.fetch_snapshot_list(&api);

            if config.json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&mgr.snapshots)
                        .unwrap_or_else(|_| String::from("[]"))
                );
            } else if mgr.snapshots.is_empty() {
                println!("No data files available.");
            } else {
                println!("{:<40} {:>10} {:<12}", "Name", "Size", "Date");
                println!("{}", "-".repeat(64));
                for file in &mgr.snapshots {
                    println!(
                        "{:<40} {:>10} {:<12}",
                        file.name,
                        format_bytes(file.size),
                        format_snapshot_date(&file.date)
                    );
                }
            }

            report::print_diagnostics(&mgr, &config);
        }
        Command::Show(args) => {
            let config = Config::from_show_args(&args);
            let api = match HttpApi::new(&config.base_url, config.timeout) {
                Ok(api) => api,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    std::process::exit(1);
                }
            };

            let mut mgr = SourceManager::new();
            let notice = mgr.load_snapshot(&api, &args.name);

            if let Notice::SnapshotFailed(name) = notice {
                eprintln!("Error: failed to load file: {name}");
                for diagnostic in &mgr.diagnostics {
                    eprintln!("  {diagnostic}");
                }
                std::process::exit(1);
            }

            report::print(&mgr.dataset, &config);
        }
    }
}
