use std::fmt;
use std::time::Duration;

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::{
    endpoints, request::join_url, retry::RetryPolicy, ApiRequest, ClientOptions, MusicApiError,
    Query, Result,
};

/// Environment variable read by [`MusicApiClient::from_env`].
pub const BASE_URL_ENV: &str = "MUSIC_API_BASE_URL";

#[derive(Clone)]
/// HTTP client for the music-service API.
///
/// Cloning is cheap and clones share one connection pool. The client holds
/// no per-request state, so one instance can serve concurrent calls.
pub struct MusicApiClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl fmt::Debug for MusicApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MusicApiClient")
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish()
    }
}

impl MusicApiClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// Example: `"http://localhost:3300"` or `"https://example.com/api"`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from the `MUSIC_API_BASE_URL` environment variable.
    ///
    /// Returns [`MusicApiError::Config`] if the variable is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use music_api_http::MusicApiClient;
    ///
    /// let api = MusicApiClient::from_env().expect("missing MUSIC_API_BASE_URL");
    /// ```
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| {
            MusicApiError::Config(format!("missing {BASE_URL_ENV} environment variable"))
        })?;
        if base_url.trim().is_empty() {
            return Err(MusicApiError::Config(format!(
                "{BASE_URL_ENV} is set but empty"
            )));
        }
        Ok(Self::new(base_url.trim()))
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Returns the base URL every request path is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout and retry options in effect.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Fetches recommended playlists.
    pub async fn recommend_playlists(&self) -> Result<JsonValue> {
        self.send(endpoints::recommend_playlists()).await
    }

    /// Fetches one playlist by id.
    pub async fn songlist_detail(&self, id: &str) -> Result<JsonValue> {
        self.send(endpoints::songlist_detail(id)).await
    }

    /// Fetches home-page banners.
    pub async fn banners(&self) -> Result<JsonValue> {
        self.send(endpoints::banners()).await
    }

    /// Searches with caller-supplied parameters, forwarded unmodified.
    ///
    /// ```no_run
    /// # async fn run(api: music_api_http::MusicApiClient) -> music_api_http::Result<()> {
    /// let hits = api.search([("keyword", "test")]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, params: impl Into<Query>) -> Result<JsonValue> {
        self.send(endpoints::search(params)).await
    }

    /// Fetches the play URL for a song.
    pub async fn song_url(&self, id: &str) -> Result<JsonValue> {
        self.send(endpoints::song_url(id)).await
    }

    /// Fetches the first page of a singer's albums (page 1, 20 per page).
    pub async fn singer_albums(&self, singermid: &str) -> Result<JsonValue> {
        self.send(endpoints::singer_albums(singermid, None, None)).await
    }

    /// Fetches one page of a singer's albums.
    pub async fn singer_albums_page(
        &self,
        singermid: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<JsonValue> {
        self.send(endpoints::singer_albums(
            singermid,
            Some(page_no),
            Some(page_size),
        ))
        .await
    }

    /// Fetches a singer's songs.
    pub async fn singer_songs(&self, singermid: &str) -> Result<JsonValue> {
        self.send(endpoints::singer_songs(singermid)).await
    }

    /// Fetches metadata for one song.
    pub async fn song_detail(&self, songmid: &str) -> Result<JsonValue> {
        self.send(endpoints::song_detail(songmid)).await
    }

    /// Fetches the lyrics of one song.
    pub async fn lyric(&self, songmid: &str) -> Result<JsonValue> {
        self.send(endpoints::lyric(songmid)).await
    }

    /// Dispatches an arbitrary request through the retry policy.
    ///
    /// The body is returned as JSON when it parses, otherwise as a JSON
    /// string holding the raw text.
    pub async fn send(&self, request: ApiRequest) -> Result<JsonValue> {
        let body = self.send_with_retry(&request).await?;
        Ok(match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => JsonValue::String(body),
        })
    }

    /// Dispatches a request and deserializes the body into `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.send_with_retry(&request).await?;
        serde_json::from_str::<T>(&body).map_err(|err| {
            MusicApiError::Decode(format!(
                "invalid response JSON for {}: {err}; body: {body}",
                request.path
            ))
        })
    }

    async fn send_with_retry(&self, request: &ApiRequest) -> Result<String> {
        let url = join_url(&self.base_url, &request.path);
        let query = request.query.to_wire();
        let policy = RetryPolicy::from_options(&self.options);
        let mut retries = 0usize;

        loop {
            #[cfg(feature = "tracing")]
            tracing::debug!("{} {} (attempt {})", request.method, url, retries + 1);

            let err = match self.send_once(&request.method, &url, &query).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            if !policy.should_retry(&request.method, &err, retries) {
                return Err(err);
            }
            retries += 1;
            self.wait_before_retry(&policy, retries, &err).await;
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String> {
        let response = self
            .http
            .request(method.clone(), url)
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .query(query)
            .send()
            .await
            .map_err(MusicApiError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(MusicApiError::Transport)?;

        if !status.is_success() {
            return Err(MusicApiError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Sleeps `retry * retry_delay_ms` before the next attempt.
    async fn wait_before_retry(&self, policy: &RetryPolicy, retry: usize, err: &MusicApiError) {
        let delay = policy.delay(retry);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "retry {}/{} after {} ms: {}",
            retry,
            policy.max_retries,
            delay.as_millis(),
            err
        );
        #[cfg(not(feature = "tracing"))]
        let _ = err;

        sleep(delay).await;
    }
}
