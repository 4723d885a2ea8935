//! Pagination helpers for API requests
//!
//! The platform paginates collections with zero-based `page[offset]` /
//! `page[limit]` parameters. Two endpoint styles exist: most take the pair
//! as query parameters, while the branch listing carries an `{offset}`
//! placeholder inside its configured URL template.

/// Default page size. The round-trip count is the only thing the choice
/// affects; correctness does not depend on it.
pub const DEFAULT_PAGE_SIZE: usize = 500;

/// Offset/limit cursor for one page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Items per page
    pub limit: usize,

    /// Zero-based item offset
    pub offset: usize,
}

impl PageQuery {
    /// Cursor for the first page
    pub fn first(limit: usize) -> Self {
        Self { limit, offset: 0 }
    }

    /// Cursor for the page after this one
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset + self.limit,
        }
    }

    /// Build the page URL for an endpoint.
    ///
    /// URLs containing `{offset}` (and optionally `{limit}`) placeholders
    /// get them substituted in place; anything else gets
    /// `page[limit]`/`page[offset]` appended as query parameters.
    pub fn apply(&self, url: &str) -> String {
        if url.contains("{offset}") {
            return url
                .replace("{offset}", &self.offset.to_string())
                .replace("{limit}", &self.limit.to_string());
        }

        let separator = if url.contains('?') { '&' } else { '?' };
        format!(
            "{url}{separator}page[limit]={}&page[offset]={}",
            self.limit, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_starts_at_zero() {
        let page = PageQuery::first(5);
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn test_next_advances_by_limit() {
        let page = PageQuery::first(5).next().next();
        assert_eq!(page.offset, 10);
    }

    #[test]
    fn test_apply_appends_query_parameters() {
        let page = PageQuery { limit: 500, offset: 1000 };
        assert_eq!(
            page.apply("https://api.test/acme/projects"),
            "https://api.test/acme/projects?page[limit]=500&page[offset]=1000"
        );
    }

    #[test]
    fn test_apply_respects_existing_query_string() {
        let page = PageQuery { limit: 500, offset: 0 };
        assert_eq!(
            page.apply("https://api.test/acme/users?include=groups"),
            "https://api.test/acme/users?include=groups&page[limit]=500&page[offset]=0"
        );
    }

    #[test]
    fn test_apply_substitutes_offset_placeholder() {
        let page = PageQuery { limit: 500, offset: 500 };
        assert_eq!(
            page.apply("https://api.test/acme/branches?page[limit]=500&page[offset]={offset}"),
            "https://api.test/acme/branches?page[limit]=500&page[offset]=500"
        );
    }

    #[test]
    fn test_apply_substitutes_limit_placeholder() {
        let page = PageQuery { limit: 5, offset: 15 };
        assert_eq!(
            page.apply("https://api.test/x?page[limit]={limit}&page[offset]={offset}"),
            "https://api.test/x?page[limit]=5&page[offset]=15"
        );
    }
}
