use serde::{Deserialize, Serialize};

/// One scraped disk-drive listing, as returned by the backend API.
///
/// Numeric-looking fields (price, capacity) arrive as the human-formatted
/// strings the scraper captured; `parse` extracts magnitudes from them.
/// Records are immutable once received: every fetch or snapshot switch
/// replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskPriceRecord {
    pub product_name: String,
    pub capacity: String,
    pub price: String,
    pub price_per_tb: String,
    pub interface: String,
    pub form_factor: String,
    pub seller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_url: Option<String>,
    pub date_scraped: String,
}

/// One historical data file advertised by `/api/files`.
///
/// Populated once at load time, read-only thereafter. `date` is the
/// backend's "%Y-%m-%d %H:%M:%S" timestamp string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDescriptor {
    pub name: String,
    pub size: u64,
    pub date: String,
    pub path: String,
}
