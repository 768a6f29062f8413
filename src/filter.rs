//! Search, interface filtering, and column sorting over the dataset.
//!
//! Both predicates are substring matches:
//! - free text against product_name, case-insensitive
//! - interface chip against the interface field ("SATA" matches "SATA 6Gb/s")
//! A record is visible iff both hold. Recomputed synchronously on every
//! change; datasets are hundreds of rows, no caching needed.

use crate::model::DiskPriceRecord;
use crate::parse::{parse_capacity, price_sort_key};

/// Interface filter chips shown in the dashboard. `All` is the sentinel
/// that matches every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceFilter {
    #[default]
    All,
    Sata,
    Nvme,
    Usb,
}

impl InterfaceFilter {
    pub fn label(&self) -> &'static str {
        match self {
            InterfaceFilter::All => "all",
            InterfaceFilter::Sata => "SATA",
            InterfaceFilter::Nvme => "NVMe",
            InterfaceFilter::Usb => "USB",
        }
    }

    /// Cycle order for the `t` key in the dashboard.
    pub fn next(&self) -> Self {
        match self {
            InterfaceFilter::All => InterfaceFilter::Sata,
            InterfaceFilter::Sata => InterfaceFilter::Nvme,
            InterfaceFilter::Nvme => InterfaceFilter::Usb,
            InterfaceFilter::Usb => InterfaceFilter::All,
        }
    }

    fn matches(&self, record: &DiskPriceRecord) -> bool {
        match self {
            InterfaceFilter::All => true,
            _ => record.interface.contains(self.label()),
        }
    }
}

fn matches_search(record: &DiskPriceRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record
        .product_name
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Produce the visible subset for the current search text and filter chip.
pub fn visible<'a>(
    records: &'a [DiskPriceRecord],
    query: &str,
    filter: InterfaceFilter,
) -> Vec<&'a DiskPriceRecord> {
    records
        .iter()
        .filter(|r| matches_search(r, query) && filter.matches(r))
        .collect()
}

/// Sortable table columns. Numeric columns order by parsed magnitude,
/// the name column lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Name,
    Capacity,
    Price,
    PricePerTb,
}

impl SortColumn {
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Capacity => "capacity",
            SortColumn::Price => "price",
            SortColumn::PricePerTb => "price/TB",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortColumn::Name => SortColumn::Capacity,
            SortColumn::Capacity => SortColumn::Price,
            SortColumn::Price => SortColumn::PricePerTb,
            SortColumn::PricePerTb => SortColumn::Name,
        }
    }
}

/// Sort the view in place. `sort_by` is stable, so equal keys keep their
/// dataset order.
pub fn sort_view(view: &mut [&DiskPriceRecord], column: SortColumn, ascending: bool) {
    view.sort_by(|a, b| {
        let ord = match column {
            SortColumn::Name => a.product_name.cmp(&b.product_name),
            SortColumn::Capacity => {
                parse_capacity(&a.capacity).total_cmp(&parse_capacity(&b.capacity))
            }
            SortColumn::Price => price_sort_key(&a.price).total_cmp(&price_sort_key(&b.price)),
            SortColumn::PricePerTb => {
                price_sort_key(&a.price_per_tb).total_cmp(&price_sort_key(&b.price_per_tb))
            }
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}
