mod http;
mod local;

pub use http::HttpTableSource;
pub use local::LocalTableSource;

use std::io::Cursor;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::zonetab::ZoneTab;

/// Trait for a place the raw bytes of a tzdata table can be fetched from
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch the complete contents of the table
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human readable location, used in log and error messages
    fn describe(&self) -> &str;
}

/// Pick a source for `location`: HTTP(S) URLs are downloaded, anything
/// else is read from the local filesystem. `max_retry` bounds the
/// attempts an HTTP source makes.
pub fn source_for(location: &str, max_retry: u32) -> Result<Box<dyn TableSource>> {
    if is_http_url(location) {
        let source = HttpTableSource::new(location.to_string())?.with_max_retry(max_retry);
        Ok(Box::new(source))
    } else {
        Ok(Box::new(LocalTableSource::new(location)))
    }
}

pub fn is_http_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl ZoneTab {
    /// Fetch both tables and build the index.
    ///
    /// The two sources are fetched concurrently; the index is built only
    /// once both have been read completely.
    pub async fn load<Z, L>(zone_tab: &Z, links: &L) -> Result<Self>
    where
        Z: TableSource + ?Sized,
        L: TableSource + ?Sized,
    {
        let (zone_bytes, link_bytes) = tokio::try_join!(zone_tab.fetch(), links.fetch())?;
        debug!(
            zone_tab = zone_tab.describe(),
            links = links.describe(),
            zone_tab_bytes = zone_bytes.len(),
            links_bytes = link_bytes.len(),
            "fetched tables"
        );

        Ok(ZoneTab::from_readers(Cursor::new(zone_bytes), Cursor::new(link_bytes))?)
    }
}
