//! Request descriptors for every music-service endpoint.
//!
//! Each builder maps application parameters onto one GET request. Nothing
//! is validated here; empty identifiers are forwarded as-is.

use crate::{ApiRequest, Query};

pub const RECOMMEND_PLAYLISTS_PATH: &str = "/recommend/playlist/u";
pub const SONGLIST_PATH: &str = "/songlist";
pub const BANNERS_PATH: &str = "/recommend/banner";
pub const SEARCH_PATH: &str = "/search";
pub const SONG_URL_PATH: &str = "/song/url";
pub const SINGER_ALBUMS_PATH: &str = "/singer/album";
pub const SINGER_SONGS_PATH: &str = "/singer/songs";
pub const SONG_DETAIL_PATH: &str = "/song/detail";
pub const LYRIC_PATH: &str = "/lyric";

/// Page number sent by [`singer_albums`] when the caller gives none.
pub const DEFAULT_PAGE_NO: u32 = 1;
/// Page size sent by [`singer_albums`] when the caller gives none.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub fn recommend_playlists() -> ApiRequest {
    ApiRequest::get(RECOMMEND_PLAYLISTS_PATH)
}

pub fn songlist_detail(id: &str) -> ApiRequest {
    ApiRequest::get(SONGLIST_PATH).param("id", id)
}

pub fn banners() -> ApiRequest {
    ApiRequest::get(BANNERS_PATH)
}

/// Search forwards the caller's parameters without additions.
pub fn search(params: impl Into<Query>) -> ApiRequest {
    ApiRequest::get(SEARCH_PATH).with_query(params)
}

pub fn song_url(id: &str) -> ApiRequest {
    ApiRequest::get(SONG_URL_PATH).param("id", id)
}

pub fn singer_albums(singermid: &str, page_no: Option<u32>, page_size: Option<u32>) -> ApiRequest {
    ApiRequest::get(SINGER_ALBUMS_PATH)
        .param("singermid", singermid)
        .param("pageNo", page_no.unwrap_or(DEFAULT_PAGE_NO))
        .param("pageSize", page_size.unwrap_or(DEFAULT_PAGE_SIZE))
}

pub fn singer_songs(singermid: &str) -> ApiRequest {
    ApiRequest::get(SINGER_SONGS_PATH).param("singermid", singermid)
}

pub fn song_detail(songmid: &str) -> ApiRequest {
    ApiRequest::get(SONG_DETAIL_PATH).param("songmid", songmid)
}

pub fn lyric(songmid: &str) -> ApiRequest {
    ApiRequest::get(LYRIC_PATH).param("songmid", songmid)
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::QueryValue;

    fn wire(request: &ApiRequest) -> Vec<(String, String)> {
        request
            .query
            .to_wire()
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn parameterless_endpoints() {
        for (request, path) in [
            (recommend_playlists(), RECOMMEND_PLAYLISTS_PATH),
            (banners(), BANNERS_PATH),
        ] {
            assert_eq!(request.method, Method::GET);
            assert_eq!(request.path, path);
            assert!(request.query.is_empty());
        }
    }

    #[test]
    fn id_endpoints() {
        assert_eq!(songlist_detail("7").path, "/songlist");
        assert_eq!(wire(&songlist_detail("7")), pairs(&[("id", "7")]));
        assert_eq!(song_url("0039MnYb0qxYhV").path, "/song/url");
        assert_eq!(wire(&song_url("0039MnYb0qxYhV")), pairs(&[("id", "0039MnYb0qxYhV")]));
    }

    #[test]
    fn songmid_endpoints() {
        assert_eq!(song_detail("m1").path, "/song/detail");
        assert_eq!(wire(&song_detail("m1")), pairs(&[("songmid", "m1")]));
        assert_eq!(lyric("m1").path, "/lyric");
        assert_eq!(wire(&lyric("m1")), pairs(&[("songmid", "m1")]));
    }

    #[test]
    fn singer_songs_sends_singermid() {
        let request = singer_songs("0025NhlN2yWrP4");
        assert_eq!(request.path, "/singer/songs");
        assert_eq!(wire(&request), pairs(&[("singermid", "0025NhlN2yWrP4")]));
    }

    #[test]
    fn singer_albums_defaults_paging() {
        let request = singer_albums("abc123", None, None);
        assert_eq!(request.path, "/singer/album");
        assert_eq!(
            wire(&request),
            pairs(&[("singermid", "abc123"), ("pageNo", "1"), ("pageSize", "20")])
        );
    }

    #[test]
    fn singer_albums_explicit_paging() {
        let request = singer_albums("abc123", Some(3), Some(50));
        assert_eq!(request.query.get("pageNo"), Some(&QueryValue::integer(3)));
        assert_eq!(request.query.get("pageSize"), Some(&QueryValue::integer(50)));
    }

    #[test]
    fn search_forwards_params_verbatim() {
        let request = search([("keyword", "test")]);
        assert_eq!(request.path, "/search");
        assert_eq!(wire(&request), pairs(&[("keyword", "test")]));
    }

    #[test]
    fn empty_identifier_is_forwarded() {
        assert_eq!(wire(&lyric("")), pairs(&[("songmid", "")]));
    }
}
