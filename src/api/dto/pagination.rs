//! Pagination query parameters for the user list.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// `?page=&page_size=` query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
/// Missing values are resolved by [`crate::application::services::UserService::list_users`].
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_all_none() {
        let p: PaginationParams = serde_json::from_str("{}").unwrap();
        assert!(p.page.is_none());
        assert!(p.page_size.is_none());
    }

    #[test]
    fn test_query_strings_are_parsed() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"page": "2", "page_size": "20"}"#).unwrap();
        assert_eq!(p.page, Some(2));
        assert_eq!(p.page_size, Some(20));
    }

    #[test]
    fn test_non_numeric_page_is_error() {
        assert!(serde_json::from_str::<PaginationParams>(r#"{"page": "two"}"#).is_err());
    }
}
