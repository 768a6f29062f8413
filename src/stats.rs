//! Summary statistics over the active dataset.
//!
//! Count covers every record; min/max/avg cover only records whose price
//! string parses. An empty dataset (or one with no parseable prices)
//! reports zeros instead of NaN.

use serde::Serialize;

use crate::model::DiskPriceRecord;
use crate::parse::parse_price;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl PriceStats {
    pub fn compute(records: &[DiskPriceRecord]) -> Self {
        let prices: Vec<f64> = records
            .iter()
            .filter_map(|r| parse_price(&r.price))
            .collect();

        if prices.is_empty() {
            return PriceStats {
                count: records.len(),
                min: 0.0,
                max: 0.0,
                avg: 0.0,
            };
        }

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut sum = 0.0;
        for p in &prices {
            min = min.min(*p);
            max = max.max(*p);
            sum += p;
        }

        PriceStats {
            count: records.len(),
            min,
            max,
            avg: sum / prices.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(price: &str) -> DiskPriceRecord {
        DiskPriceRecord {
            product_name: "disk".to_string(),
            capacity: "1TB".to_string(),
            price: price.to_string(),
            price_per_tb: String::new(),
            interface: "SATA 6Gb/s".to_string(),
            form_factor: "3.5\"".to_string(),
            seller: "Amazon".to_string(),
            rating: None,
            product_url: None,
            seller_url: None,
            date_scraped: "2023-04-15".to_string(),
        }
    }

    #[test]
    fn empty_dataset_reports_zeros() {
        let stats = PriceStats::compute(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.avg, 0.0);
    }

    #[test]
    fn count_matches_dataset_length() {
        let records = vec![rec("$10.00"), rec("garbage"), rec("$20.00")];
        assert_eq!(PriceStats::compute(&records).count, 3);
    }

    #[test]
    fn average_over_parseable_prices() {
        let records = vec![rec("$10.00"), rec("$20.00")];
        let stats = PriceStats::compute(&records);
        assert_eq!(stats.avg, 15.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 20.0);
    }

    #[test]
    fn unparseable_prices_excluded_from_aggregates() {
        let records = vec![rec("$10.00"), rec("n/a"), rec("$30.00")];
        let stats = PriceStats::compute(&records);
        // count includes the bad row, aggregates skip it
        assert_eq!(stats.count, 3);
        assert_eq!(stats.avg, 20.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
    }

    #[test]
    fn all_unparseable_reports_zeros() {
        let records = vec![rec(""), rec("n/a")];
        let stats = PriceStats::compute(&records);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.avg, 0.0);
    }

    #[test]
    fn single_record() {
        let stats = PriceStats::compute(&[rec("$99.99")]);
        assert_eq!(stats.min, 99.99);
        assert_eq!(stats.max, 99.99);
        assert_eq!(stats.avg, 99.99);
    }
}
