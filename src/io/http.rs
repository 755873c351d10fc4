use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::TableSource;
use anyhow::{Result, bail};

/// Table downloaded over HTTP(S)
pub struct HttpTableSource {
    client: Client,
    url: String,
    max_retry: u32,
}

impl HttpTableSource {
    /// Create a new HTTP source
    ///
    /// Nothing is sent until [`fetch`](TableSource::fetch) is called
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            url,
            max_retry: 10,
        })
    }

    /// Set how many attempts a fetch makes on timeouts and connect errors
    pub fn with_max_retry(mut self, max_retry: u32) -> Self {
        self.max_retry = max_retry.max(1);
        self
    }
}

#[async_trait]
impl TableSource for HttpTableSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let mut retry_count = 0;

        loop {
            match self.client.get(&self.url).send().await {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        bail!("HTTP request for {} failed with status: {}", self.url, resp.status());
                    }

                    let bytes = resp.bytes().await?;
                    debug!(url = %self.url, bytes = bytes.len(), "downloaded table");
                    return Ok(bytes.to_vec());
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count >= self.max_retry {
                        bail!("Max retries exceeded fetching {}", self.url);
                    }
                    warn!(
                        url = %self.url,
                        "Connection error, retry {}/{}: {}",
                        retry_count, self.max_retry, e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn describe(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request on a local port with `response`.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let mut read = 0;
            while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf[read..]).await.unwrap();
                if n == 0 {
                    break;
                }
                read += n;
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{}/zone.tab", addr)
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 36\r\nConnection: close\r\n\r\n\
             US\t+404251-0740023\tAmerica/New_York\n",
        )
        .await;

        let source = HttpTableSource::new(url.clone()).unwrap();
        let bytes = source.fetch().await.unwrap();

        assert_eq!(bytes, b"US\t+404251-0740023\tAmerica/New_York\n");
        assert_eq!(source.describe(), url);
    }

    #[tokio::test]
    async fn test_fetch_fails_on_error_status() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = HttpTableSource::new(url).unwrap().fetch().await.unwrap_err();

        assert!(err.to_string().contains("404"), "{err}");
    }

    #[tokio::test]
    async fn test_fetch_gives_up_after_max_retry() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpTableSource::new(format!("http://{}/backward", addr))
            .unwrap()
            .with_max_retry(2);
        let err = source.fetch().await.unwrap_err();

        assert!(err.to_string().contains("Max retries exceeded"), "{err}");
    }
}
