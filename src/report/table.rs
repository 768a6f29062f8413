//! Text table rendering for price datasets.
//!
//! Formats the same eight columns the dashboard shows, truncated to fixed
//! widths, with a price-statistics footer.

use crate::model::DiskPriceRecord;
use crate::stats::PriceStats;
use crate::util::truncate;

pub fn render(records: &[DiskPriceRecord]) -> String {
    if records.is_empty() {
        return String::from("No records.\n");
    }

    let mut output = String::new();

    output.push_str(&format!(
        "{:<32} {:>8} {:>10} {:>10} {:<12} {:<6} {:<10} {:<6}\n",
        "Product", "Capacity", "Price", "$/TB", "Interface", "Form", "Seller", "Rating"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for record in records {
        output.push_str(&format!(
            "{:<32} {:>8} {:>10} {:>10} {:<12} {:<6} {:<10} {:<6}\n",
            truncate(&record.product_name, 32),
            truncate(&record.capacity, 8),
            truncate(&record.price, 10),
            truncate(&record.price_per_tb, 10),
            truncate(&record.interface, 12),
            truncate(&record.form_factor, 6),
            truncate(&record.seller, 10),
            record.rating.as_deref().unwrap_or("-"),
        ));
    }

    let stats = PriceStats::compute(records);
    output.push_str(&format!(
        "\n{} products, price ${:.2} - ${:.2}, avg ${:.2}\n",
        stats.count, stats.min, stats.max, stats.avg
    ));

    output
}
