pub mod json;
pub mod table;

use crate::config::Config;
use crate::model::DiskPriceRecord;
use crate::source::SourceManager;

pub fn print(records: &[DiskPriceRecord], config: &Config) {
    if config.json_output {
        println!("{}", json::render(records));
    } else {
        print!("{}", table::render(records));
    }
}

/// Emit non-user-facing conditions collected during fetching, verbose only.
pub fn print_diagnostics(mgr: &SourceManager, config: &Config) {
    if !config.verbose || mgr.diagnostics.is_empty() {
        return;
    }

    eprintln!("Diagnostics:");
    eprintln!("{}", "-".repeat(40));
    for diagnostic in &mgr.diagnostics {
        eprintln!("  {diagnostic}");
    }
}
