use music_api_http::{ClientOptions, MusicApiClient, Query};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        std::env::var("MUSIC_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3300".to_owned());

    let api = MusicApiClient::new(base_url).with_options(ClientOptions {
        timeout_ms: 5_000,
        ..ClientOptions::default()
    });

    let banners = api.banners().await?;
    println!("banners: {banners}");

    let hits = api
        .search(Query::new().with("keyword", "晴天").with("pageSize", 5))
        .await?;
    println!("search: {hits}");

    let albums = api.singer_albums("0025NhlN2yWrP4").await?;
    println!("albums: {albums}");

    Ok(())
}
