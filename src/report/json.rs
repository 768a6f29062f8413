//! JSON output for scripting and piping.

use serde::Serialize;

use crate::model::DiskPriceRecord;
use crate::stats::PriceStats;

#[derive(Serialize)]
struct JsonReport<'a> {
    records: &'a [DiskPriceRecord],
    stats: PriceStats,
}

pub fn render(records: &[DiskPriceRecord]) -> String {
    let report = JsonReport {
        records,
        stats: PriceStats::compute(records),
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| String::from("{}"))
}
