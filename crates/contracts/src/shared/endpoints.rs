//! PokeAPI endpoint builders shared by every consumer of the remote API.

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// First generation
pub const DEFAULT_PAGE_LIMIT: u32 = 151;

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Collection endpoint: `{base}/pokemon/?limit={limit}&offset={offset}`
pub fn list_url(base: &str, limit: u32, offset: u32) -> String {
    format!(
        "{}/pokemon/?limit={}&offset={}",
        trim_base(base),
        limit,
        offset
    )
}

/// Detail endpoint: `{base}/pokemon/{id}/`
pub fn detail_url(base: &str, id: u32) -> String {
    format!("{}/pokemon/{}/", trim_base(base), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url() {
        assert_eq!(
            list_url(DEFAULT_BASE_URL, 151, 0),
            "https://pokeapi.co/api/v2/pokemon/?limit=151&offset=0"
        );
    }

    #[test]
    fn test_detail_url_trims_base() {
        assert_eq!(
            detail_url("http://localhost:8080/api/", 7),
            "http://localhost:8080/api/pokemon/7/"
        );
    }

    #[test]
    fn test_list_url_matches_collection_pattern() {
        // the detail fetcher and list fetcher must be distinguishable by path
        assert!(list_url("x", 1, 0).contains("/pokemon/?"));
        assert!(!detail_url("x", 1).contains("/pokemon/?"));
    }
}
