// src/core/net.rs
// Blocking HTTP GET behind a small trait so parsers and the query layer can be
// driven from captured pages in tests.

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::ClientOptions;
use crate::error::{Error, Result};

/// Anything that can turn a URL into a page body.
///
/// Implementations report every kind of unavailability (transport error,
/// non-200 status) as `Err`; callers decide whether that is fatal.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Live fetcher: one GET per call, no retries, client-default timeouts.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp.text()?)
    }
}
