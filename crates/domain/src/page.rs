//! Pagination of a (filtered) collection.
//!
//! Pages are 1-indexed. Bad `_page` / `_limit` input never fails: it falls
//! back to the defaults, and pages past the end are simply empty.

use serde::Serialize;

/// Page size used when `_limit` is absent or invalid.
pub const DEFAULT_LIMIT: usize = 10;

/// Page number used when `_page` is absent or invalid.
pub const DEFAULT_PAGE: usize = 1;

/// Validated page size and page number, both `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: usize,
    page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl PageRequest {
    /// Build a request, replacing zeros with the defaults.
    #[must_use]
    pub fn new(limit: usize, page: usize) -> Self {
        Self {
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            page: if page == 0 { DEFAULT_PAGE } else { page },
        }
    }

    /// Parse raw `_limit` / `_page` query values.
    ///
    /// Values are read like JavaScript's `parseInt`: leading whitespace and
    /// a sign are allowed, then the leading run of digits is taken
    /// (`"5abc"` is `5`). Anything absent, unparsable or below `1` uses the
    /// default.
    #[must_use]
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Self {
        Self::new(
            limit.and_then(parse_positive).unwrap_or(DEFAULT_LIMIT),
            page.and_then(parse_positive).unwrap_or(DEFAULT_PAGE),
        )
    }

    /// Maximum number of items per page.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 1-indexed page number.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }
}

fn parse_positive(text: &str) -> Option<usize> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return None;
    }
    digits[..end].parse::<usize>().ok().filter(|value| *value > 0)
}

/// One page of results plus navigation metadata.
///
/// Serializes to `{ data, prev, next, pages, currentPage }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items of this page, at most `limit` of them.
    pub data: Vec<T>,
    /// Previous page number, `None` on page 1.
    pub prev: Option<usize>,
    /// Next page number, `None` on or after the last page.
    pub next: Option<usize>,
    /// Total page count of the filtered set.
    pub pages: usize,
    /// The requested page number.
    #[serde(rename = "currentPage")]
    pub current_page: usize,
    /// Number of items before slicing. Sent as `X-Total-Count`, not in the body.
    #[serde(skip)]
    pub total: usize,
}

/// Slice `items` into the requested page.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let limit = request.limit();
    let page = request.page();
    let pages = total.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);

    let data = items.into_iter().skip(start).take(limit).collect();

    Page {
        data,
        prev: (page > 1).then(|| page - 1),
        next: (page < pages).then(|| page + 1),
        pages,
        current_page: page,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn should_return_second_page_of_twenty_five() {
        let page = paginate(numbers(25), PageRequest::new(10, 2));
        assert_eq!(page.data, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.prev, Some(1));
        assert_eq!(page.next, Some(3));
        assert_eq!(page.pages, 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn should_return_partial_last_page() {
        let page = paginate(numbers(25), PageRequest::new(10, 3));
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.prev, Some(2));
        assert_eq!(page.next, None);
    }

    #[test]
    fn should_return_empty_page_past_the_end() {
        let page = paginate(numbers(25), PageRequest::new(10, 7));
        assert!(page.data.is_empty());
        assert_eq!(page.next, None);
        assert_eq!(page.prev, Some(6));
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn should_have_no_pages_when_empty() {
        let page = paginate(Vec::<usize>::new(), PageRequest::default());
        assert!(page.data.is_empty());
        assert_eq!(page.pages, 0);
        assert_eq!(page.prev, None);
        assert_eq!(page.next, None);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn should_size_every_page_consistently() {
        for total in [0_usize, 1, 9, 10, 11, 25, 100] {
            for limit in [1_usize, 3, 10, 50] {
                let pages = total.div_ceil(limit);
                for page_number in 1..=pages {
                    let page = paginate(numbers(total), PageRequest::new(limit, page_number));
                    assert_eq!(page.pages, pages);
                    assert_eq!(page.data.len(), limit.min(total - (page_number - 1) * limit));
                    assert_eq!(page.prev.is_none(), page_number == 1);
                    assert_eq!(page.next.is_none(), page_number >= pages);
                }
            }
        }
    }

    #[test]
    fn should_default_missing_parameters() {
        assert_eq!(PageRequest::parse(None, None), PageRequest::new(10, 1));
    }

    #[test]
    fn should_default_invalid_parameters() {
        let request = PageRequest::parse(Some("abc"), Some("0"));
        assert_eq!(request.limit(), DEFAULT_LIMIT);
        assert_eq!(request.page(), DEFAULT_PAGE);

        let request = PageRequest::parse(Some("-5"), Some(""));
        assert_eq!(request.limit(), DEFAULT_LIMIT);
        assert_eq!(request.page(), DEFAULT_PAGE);
    }

    #[test]
    fn should_read_leading_digits_like_parse_int() {
        let request = PageRequest::parse(Some(" 5abc"), Some("+2"));
        assert_eq!(request.limit(), 5);
        assert_eq!(request.page(), 2);
    }

    #[test]
    fn should_serialize_envelope_with_camel_case_page() {
        let page = paginate(numbers(3), PageRequest::new(2, 1));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": [1, 2],
                "prev": null,
                "next": 2,
                "pages": 2,
                "currentPage": 1
            })
        );
    }
}
