use anyhow::{anyhow, Result};

use drivegauge::api::PriceApi;
use drivegauge::filter::{visible, InterfaceFilter};
use drivegauge::model::{DiskPriceRecord, SnapshotDescriptor};
use drivegauge::source::{ActiveSource, Notice, SourceManager};
use drivegauge::stats::PriceStats;

/// Backend stub: each endpoint independently succeeds or fails.
struct StubApi {
    latest: Option<Vec<DiskPriceRecord>>,
    files: Option<Vec<SnapshotDescriptor>>,
    snapshot: Option<Vec<DiskPriceRecord>>,
}

impl PriceApi for StubApi {
    fn latest(&self) -> Result<Vec<DiskPriceRecord>> {
        self.latest.clone().ok_or_else(|| anyhow!("500 Internal Server Error"))
    }

    fn snapshot_list(&self) -> Result<Vec<SnapshotDescriptor>> {
        self.files.clone().ok_or_else(|| anyhow!("503 Service Unavailable"))
    }

    fn snapshot(&self, name: &str) -> Result<Vec<DiskPriceRecord>> {
        self.snapshot.clone().ok_or_else(|| anyhow!("404 Not Found: {name}"))
    }
}

fn record(name: &str, price: &str) -> DiskPriceRecord {
    DiskPriceRecord {
        product_name: name.to_string(),
        capacity: "8TB".to_string(),
        price: price.to_string(),
        price_per_tb: "$12.50".to_string(),
        interface: "SATA 6Gb/s".to_string(),
        form_factor: "3.5\"".to_string(),
        seller: "Newegg".to_string(),
        rating: Some("4.5".to_string()),
        product_url: Some("https://newegg.com".to_string()),
        seller_url: Some("https://newegg.com".to_string()),
        date_scraped: "2023-04-15".to_string(),
    }
}

#[test]
fn failed_primary_fetch_lands_on_the_mock_dataset() {
    let api = StubApi { latest: None, files: None, snapshot: None };
    let mut mgr = SourceManager::new();

    let notices = mgr.fetch_latest(&api);

    // terminal state is Loaded(fallback): exactly the 8 bundled rows
    assert_eq!(notices, vec![Notice::LoadFailed, Notice::FallbackLoaded]);
    assert_eq!(mgr.dataset.len(), 8);
    assert_eq!(mgr.active, ActiveSource::Fallback);
    assert!(!mgr.loading);

    let view = visible(&mgr.dataset, "", InterfaceFilter::All);
    assert_eq!(view.len(), 8);
}

#[test]
fn samsung_search_on_fallback_data_yields_two_rows() {
    let api = StubApi { latest: None, files: None, snapshot: None };
    let mut mgr = SourceManager::new();
    mgr.fetch_latest(&api);

    let view = visible(&mgr.dataset, "Samsung", InterfaceFilter::All);
    assert_eq!(view.len(), 2);
}

#[test]
fn successful_fetch_replaces_dataset_and_stats_follow() {
    let api = StubApi {
        latest: Some(vec![record("a", "$10.00"), record("b", "$20.00")]),
        files: None,
        snapshot: None,
    };
    let mut mgr = SourceManager::new();

    let notices = mgr.fetch_latest(&api);

    assert_eq!(notices, vec![Notice::DataLoaded]);
    assert_eq!(mgr.active, ActiveSource::Latest);

    let stats = PriceStats::compute(&mgr.dataset);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.avg, 15.0);
}

#[test]
fn listing_failure_is_nonfatal_and_invisible() {
    let api = StubApi {
        latest: Some(vec![record("a", "$10.00")]),
        files: None,
        snapshot: None,
    };
    let mut mgr = SourceManager::new();
    mgr.fetch_latest(&api);
    mgr.fetch_snapshot_list(&api);

    assert!(mgr.snapshots.is_empty());
    assert_eq!(mgr.dataset.len(), 1);
    // condition is recorded for --verbose, not surfaced as a notice
    assert!(mgr.diagnostics.iter().any(|d| d.contains("file listing")));
}

#[test]
fn snapshot_switch_and_failed_switch() {
    let api = StubApi {
        latest: Some(vec![record("current", "$10.00")]),
        files: Some(vec![SnapshotDescriptor {
            name: "diskprices_data_20230401.csv".to_string(),
            size: 2048,
            date: "2023-04-01 08:00:00".to_string(),
            path: "/data/diskprices_data_20230401.csv".to_string(),
        }]),
        snapshot: Some(vec![record("archived", "$9.00")]),
    };
    let mut mgr = SourceManager::new();
    mgr.fetch_latest(&api);
    mgr.fetch_snapshot_list(&api);
    assert_eq!(mgr.snapshots.len(), 1);

    let notice = mgr.load_snapshot(&api, "diskprices_data_20230401.csv");
    assert_eq!(
        notice,
        Notice::SnapshotLoaded("diskprices_data_20230401.csv".to_string())
    );
    assert_eq!(mgr.dataset[0].product_name, "archived");
    assert_eq!(
        mgr.active,
        ActiveSource::Snapshot("diskprices_data_20230401.csv".to_string())
    );

    // a failing switch leaves everything in place
    let broken = StubApi { latest: None, files: None, snapshot: None };
    let notice = mgr.load_snapshot(&broken, "missing.csv");
    assert_eq!(notice, Notice::SnapshotFailed("missing.csv".to_string()));
    assert_eq!(mgr.dataset[0].product_name, "archived");
    assert_eq!(
        mgr.active,
        ActiveSource::Snapshot("diskprices_data_20230401.csv".to_string())
    );
}

#[test]
fn records_deserialize_from_backend_field_names() {
    let payload = r#"[{
        "product_name": "WD Red Plus 12TB",
        "capacity": "12TB",
        "price": "$219.99",
        "price_per_tb": "$18.33",
        "interface": "SATA 6Gb/s",
        "form_factor": "3.5\"",
        "seller": "Amazon",
        "date_scraped": "2023-04-15"
    }]"#;

    let records: Vec<DiskPriceRecord> = serde_json::from_str(payload).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].product_name, "WD Red Plus 12TB");
    // optional fields default to None when the scraper omitted them
    assert!(records[0].rating.is_none());
    assert!(records[0].product_url.is_none());
}

#[test]
fn snapshot_descriptors_deserialize_from_backend_field_names() {
    let payload = r#"[{
        "name": "diskprices_data_20230415.csv",
        "size": 40960,
        "date": "2023-04-15 10:30:00",
        "path": "/data/diskprices_data_20230415.csv"
    }]"#;

    let files: Vec<SnapshotDescriptor> = serde_json::from_str(payload).unwrap();
    assert_eq!(files[0].size, 40960);
    assert_eq!(files[0].name, "diskprices_data_20230415.csv");
}
