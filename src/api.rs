//! HTTP client for the scraper backend.
//!
//! Three endpoints, all GET, all JSON arrays:
//! - /api/latest        current dataset
//! - /api/files         historical snapshot listing
//! - /api/file/{name}   one named snapshot
//! Non-2xx statuses are errors here; recovery policy (mock fallback,
//! silent empty listing) belongs to the source manager, not the transport.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;

use crate::model::{DiskPriceRecord, SnapshotDescriptor};

/// Seam between the source manager and the network, so tests can drive the
/// fallback paths without a server.
pub trait PriceApi {
    fn latest(&self) -> Result<Vec<DiskPriceRecord>>;
    fn snapshot_list(&self) -> Result<Vec<SnapshotDescriptor>>;
    fn snapshot(&self, name: &str) -> Result<Vec<DiskPriceRecord>>;
}

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;

        Ok(HttpApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_records(&self, path: &str) -> Result<Vec<DiskPriceRecord>> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("request to {url} failed"))?;

        if !resp.status().is_success() {
            bail!("{url} returned {}", resp.status());
        }

        resp.json()
            .with_context(|| format!("malformed response from {url}"))
    }
}

impl PriceApi for HttpApi {
    fn latest(&self) -> Result<Vec<DiskPriceRecord>> {
        self.get_records("/api/latest")
    }

    fn snapshot_list(&self) -> Result<Vec<SnapshotDescriptor>> {
        let url = format!("{}/api/files", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("request to {url} failed"))?;

        if !resp.status().is_success() {
            bail!("{url} returned {}", resp.status());
        }

        resp.json()
            .with_context(|| format!("malformed response from {url}"))
    }

    fn snapshot(&self, name: &str) -> Result<Vec<DiskPriceRecord>> {
        self.get_records(&format!("/api/file/{name}"))
    }
}
