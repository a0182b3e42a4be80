//! `music-api-http` is an async HTTP client for a music-service API.
//!
//! [`MusicApiClient`] exposes one method per endpoint:
//! - [`MusicApiClient::recommend_playlists`], [`MusicApiClient::songlist_detail`]
//! - [`MusicApiClient::banners`], [`MusicApiClient::search`]
//! - [`MusicApiClient::song_url`], [`MusicApiClient::song_detail`], [`MusicApiClient::lyric`]
//! - [`MusicApiClient::singer_albums`], [`MusicApiClient::singer_songs`]
//!
//! Every request gets a 15 s per-attempt timeout and up to 3 retries with a
//! linear backoff of 1 s, 2 s, 3 s. See [`ClientOptions`].
//!
//! A runnable demo lives in `demos/basic.rs` and is registered as the
//! `basic` example: `MUSIC_API_BASE_URL=http://localhost:3300 cargo run --example basic`.

mod client;
pub mod endpoints;
mod error;
mod options;
mod query;
mod request;
mod retry;
mod value;

pub use client::{MusicApiClient, BASE_URL_ENV};
pub use error::{ErrorClass, MusicApiError};
pub use options::ClientOptions;
pub use query::Query;
pub use request::ApiRequest;
pub use reqwest::Method;
pub use value::QueryValue;

pub type Result<T> = std::result::Result<T, MusicApiError>;
