use crate::utils::error::{GenerateError, Result};
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub body: Vec<u8>,
    /// The requested URL followed by every redirect target, in order.
    pub resulting_paths: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
    max_redirects: usize,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT, MAX_REDIRECTS)
    }
}

impl HttpFetcher {
    pub fn new(timeout: Duration, max_redirects: usize) -> Self {
        Self {
            timeout,
            max_redirects,
        }
    }

    fn client(&self, visited: Arc<Mutex<Vec<String>>>) -> Result<Client> {
        let max_redirects = self.max_redirects;
        let policy = Policy::custom(move |attempt| {
            if attempt.previous().len() > max_redirects {
                return attempt.error(format!("stopped after {} redirects", max_redirects));
            }
            if let Ok(mut visited) = visited.lock() {
                visited.push(attempt.url().to_string());
            }
            attempt.follow()
        });

        Client::builder()
            .timeout(self.timeout)
            .redirect(policy)
            .build()
            .map_err(|source| GenerateError::FetchError {
                url: String::new(),
                source,
            })
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchedBody> {
        let visited = Arc::new(Mutex::new(vec![url.to_string()]));
        let client = self.client(Arc::clone(&visited))?;
        let fetch_error = |source: reqwest::Error| GenerateError::FetchError {
            url: url.to_string(),
            source,
        };

        tracing::debug!(url, "Fetching");
        let response = client.get(url).send().await.map_err(fetch_error)?;
        let status = response.status();
        tracing::debug!(url, final_url = %response.url(), status = status.as_u16(), "Fetched");

        if !status.is_success() {
            return Err(GenerateError::HttpStatusError {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(fetch_error)?.to_vec();
        let resulting_paths = visited
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone());

        Ok(FetchedBody {
            body,
            resulting_paths,
        })
    }
}
