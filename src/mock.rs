//! Bundled fallback dataset.
//!
//! Loaded when `/api/latest` is unreachable so the dashboard always has
//! something to show. A plain function, no conditional loading: the
//! fallback path must not be able to fail.

use crate::model::DiskPriceRecord;

#[allow(clippy::too_many_arguments)]
fn rec(
    product_name: &str,
    capacity: &str,
    price: &str,
    price_per_tb: &str,
    interface: &str,
    form_factor: &str,
    seller: &str,
    url: &str,
) -> DiskPriceRecord {
    DiskPriceRecord {
        product_name: product_name.to_string(),
        capacity: capacity.to_string(),
        price: price.to_string(),
        price_per_tb: price_per_tb.to_string(),
        interface: interface.to_string(),
        form_factor: form_factor.to_string(),
        seller: seller.to_string(),
        rating: None,
        product_url: Some(url.to_string()),
        seller_url: Some(url.to_string()),
        date_scraped: "2023-04-15".to_string(),
    }
}

/// The 8-record sample captured from a real scrape.
pub fn dataset() -> Vec<DiskPriceRecord> {
    vec![
        rec(
            "WD Elements Desktop 18TB",
            "18TB",
            "$279.99",
            "$15.56",
            "USB 3.0",
            "3.5\"",
            "Amazon",
            "https://amazon.com",
        ),
        rec(
            "Seagate Exos X18 18TB",
            "18TB",
            "$289.99",
            "$16.11",
            "SATA 6Gb/s",
            "3.5\"",
            "Newegg",
            "https://newegg.com",
        ),
        rec(
            "Samsung 870 EVO 4TB",
            "4TB",
            "$329.99",
            "$82.50",
            "SATA 6Gb/s",
            "2.5\"",
            "B&H",
            "https://bhphotovideo.com",
        ),
        rec(
            "Crucial MX500 2TB",
            "2TB",
            "$159.99",
            "$80.00",
            "SATA 6Gb/s",
            "2.5\"",
            "Amazon",
            "https://amazon.com",
        ),
        rec(
            "WD Black SN850X 2TB",
            "2TB",
            "$179.99",
            "$90.00",
            "NVMe",
            "M.2",
            "BestBuy",
            "https://bestbuy.com",
        ),
        rec(
            "Samsung 990 PRO 2TB",
            "2TB",
            "$219.99",
            "$110.00",
            "NVMe",
            "M.2",
            "Amazon",
            "https://amazon.com",
        ),
        rec(
            "Seagate Expansion 5TB",
            "5TB",
            "$109.99",
            "$22.00",
            "USB 3.0",
            "2.5\"",
            "Walmart",
            "https://walmart.com",
        ),
        rec(
            "Toshiba N300 14TB",
            "14TB",
            "$259.99",
            "$18.57",
            "SATA 6Gb/s",
            "3.5\"",
            "Newegg",
            "https://newegg.com",
        ),
    ]
}
