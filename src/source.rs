//! Dataset source manager.
//!
//! Owns retrieval and switching of the active dataset:
//! - fetch_latest: /api/latest, mock fallback on failure
//! - fetch_snapshot_list: /api/files, empty list on failure (non-fatal)
//! - load_snapshot: /api/file/{name}, dataset untouched on failure
//! State machine is Idle -> Loading -> Loaded; a failed primary fetch
//! lands in Loaded(fallback), so the terminal state is always Loaded.
//! Overlapping requests are not coordinated: the most recently completing
//! one overwrites the dataset.

use anyhow::Result;

use crate::api::PriceApi;
use crate::mock;
use crate::model::{DiskPriceRecord, SnapshotDescriptor};

/// Which dataset the dashboard is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveSource {
    #[default]
    Latest,
    Fallback,
    Snapshot(String),
}

impl ActiveSource {
    pub fn label(&self) -> String {
        match self {
            ActiveSource::Latest => "latest".to_string(),
            ActiveSource::Fallback => "mock data".to_string(),
            ActiveSource::Snapshot(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// User-visible load notifications, one per intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DataLoaded,
    LoadFailed,
    FallbackLoaded,
    SnapshotLoaded(String),
    SnapshotFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::DataLoaded => "data loaded successfully".to_string(),
            Notice::LoadFailed => "data load failed".to_string(),
            Notice::FallbackLoaded => "loaded bundled mock data".to_string(),
            Notice::SnapshotLoaded(name) => format!("loaded file: {name}"),
            Notice::SnapshotFailed(name) => format!("failed to load file: {name}"),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Notice::DataLoaded | Notice::SnapshotLoaded(_) => Severity::Info,
            Notice::FallbackLoaded => Severity::Warning,
            Notice::LoadFailed | Notice::SnapshotFailed(_) => Severity::Error,
        }
    }
}

#[derive(Default)]
pub struct SourceManager {
    pub dataset: Vec<DiskPriceRecord>,
    pub snapshots: Vec<SnapshotDescriptor>,
    pub active: ActiveSource,
    pub loading: bool,
    /// Non-user-facing conditions (e.g. a failed file listing), surfaced
    /// only under --verbose or in the dashboard log line.
    pub diagnostics: Vec<String>,
}

impl SourceManager {
    pub fn new() -> Self {
        SourceManager::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a /api/latest fetch. Failure substitutes the
    /// bundled mock dataset; the loading flag clears either way.
    pub fn apply_latest(&mut self, result: Result<Vec<DiskPriceRecord>>) -> Vec<Notice> {
        self.loading = false;
        match result {
            Ok(records) => {
                self.dataset = records;
                self.active = ActiveSource::Latest;
                vec![Notice::DataLoaded]
            }
            Err(e) => {
                self.diagnostics.push(format!("latest fetch failed: {e:#}"));
                self.dataset = mock::dataset();
                self.active = ActiveSource::Fallback;
                vec![Notice::LoadFailed, Notice::FallbackLoaded]
            }
        }
    }

    /// Apply the outcome of a /api/files fetch. Failure leaves the list
    /// empty and records a diagnostic; never a user-facing notice and
    /// never touches the active dataset.
    pub fn apply_snapshot_list(&mut self, result: Result<Vec<SnapshotDescriptor>>) {
        match result {
            Ok(files) => self.snapshots = files,
            Err(e) => {
                self.snapshots.clear();
                self.diagnostics.push(format!("file listing failed: {e:#}"));
            }
        }
    }

    /// Apply the outcome of a named snapshot fetch. Failure leaves the
    /// dataset and active-source label unchanged.
    pub fn apply_snapshot(&mut self, name: &str, result: Result<Vec<DiskPriceRecord>>) -> Notice {
        self.loading = false;
        match result {
            Ok(records) => {
                self.dataset = records;
                self.active = ActiveSource::Snapshot(name.to_string());
                Notice::SnapshotLoaded(name.to_string())
            }
            Err(e) => {
                self.diagnostics.push(format!("snapshot {name} failed: {e:#}"));
                Notice::SnapshotFailed(name.to_string())
            }
        }
    }

    pub fn fetch_latest(&mut self, api: &dyn PriceApi) -> Vec<Notice> {
        self.begin_load();
        let result = api.latest();
        self.apply_latest(result)
    }

    pub fn fetch_snapshot_list(&mut self, api: &dyn PriceApi) {
        let result = api.snapshot_list();
        self.apply_snapshot_list(result);
    }

    pub fn load_snapshot(&mut self, api: &dyn PriceApi, name: &str) -> Notice {
        self.begin_load();
        let result = api.snapshot(name);
        self.apply_snapshot(name, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn record(name: &str) -> DiskPriceRecord {
        DiskPriceRecord {
            product_name: name.to_string(),
            capacity: "1TB".to_string(),
            price: "$99.99".to_string(),
            price_per_tb: "$99.99".to_string(),
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
    fn latest_success_replaces_dataset_and_resets_label() {
        let mut mgr = SourceManager::new();
        mgr.active = ActiveSource::Snapshot("old.csv".to_string());
        mgr.begin_load();

        let notices = mgr.apply_latest(Ok(vec![record("fresh")]));

        assert_eq!(notices, vec![Notice::DataLoaded]);
        assert_eq!(mgr.dataset.len(), 1);
        assert_eq!(mgr.active, ActiveSource::Latest);
        assert!(!mgr.loading);
    }

    #[test]
    fn latest_failure_falls_back_to_mock() {
        let mut mgr = SourceManager::new();
        mgr.begin_load();

        let notices = mgr.apply_latest(Err(anyhow!("connection refused")));

        assert_eq!(notices, vec![Notice::LoadFailed, Notice::FallbackLoaded]);
        assert_eq!(mgr.dataset.len(), 8);
        assert_eq!(mgr.active, ActiveSource::Fallback);
        assert!(!mgr.loading);
        assert_eq!(mgr.diagnostics.len(), 1);
    }

    #[test]
    fn snapshot_list_failure_is_silent_and_nonfatal() {
        let mut mgr = SourceManager::new();
        mgr.dataset = vec![record("existing")];

        mgr.apply_snapshot_list(Err(anyhow!("503")));

        assert!(mgr.snapshots.is_empty());
        // dataset untouched, condition only logged
        assert_eq!(mgr.dataset.len(), 1);
        assert_eq!(mgr.diagnostics.len(), 1);
    }

    #[test]
    fn snapshot_list_success_populates() {
        let mut mgr = SourceManager::new();
        mgr.apply_snapshot_list(Ok(vec![SnapshotDescriptor {
            name: "diskprices_data_20230415.csv".to_string(),
            size: 4096,
            date: "2023-04-15 10:30:00".to_string(),
            path: "/data/diskprices_data_20230415.csv".to_string(),
        }]));
        assert_eq!(mgr.snapshots.len(), 1);
    }

    #[test]
    fn snapshot_load_success_switches_label() {
        let mut mgr = SourceManager::new();
        mgr.begin_load();

        let notice = mgr.apply_snapshot("old.csv", Ok(vec![record("archived")]));

        assert_eq!(notice, Notice::SnapshotLoaded("old.csv".to_string()));
        assert_eq!(mgr.active, ActiveSource::Snapshot("old.csv".to_string()));
        assert_eq!(mgr.dataset[0].product_name, "archived");
        assert!(!mgr.loading);
    }

    #[test]
    fn snapshot_load_failure_preserves_dataset() {
        let mut mgr = SourceManager::new();
        mgr.dataset = vec![record("current")];
        mgr.active = ActiveSource::Latest;
        mgr.begin_load();

        let notice = mgr.apply_snapshot("bad.csv", Err(anyhow!("404")));

        assert_eq!(notice, Notice::SnapshotFailed("bad.csv".to_string()));
        assert_eq!(mgr.dataset[0].product_name, "current");
        assert_eq!(mgr.active, ActiveSource::Latest);
        assert!(!mgr.loading);
    }

    #[test]
    fn notice_messages_name_the_file() {
        let notice = Notice::SnapshotLoaded("d.csv".to_string());
        assert!(notice.message().contains("d.csv"));
        assert_eq!(notice.severity(), Severity::Info);
        assert_eq!(
            Notice::FallbackLoaded.severity(),
            Severity::Warning
        );
    }
}
