use crate::application::app_error::{AppError, AppResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 0;

/// Requested page. `limit == 0` means the page is unbounded and covers every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> AppResult<Self> {
        let page = parse_number(page, DEFAULT_PAGE)?;
        let limit = parse_number(limit, DEFAULT_LIMIT)?;
        if limit < 0 {
            return Err(AppError::PaginationError);
        }
        Ok(Self { page, limit })
    }

    pub fn skip(&self) -> i64 {
        (self.page - 1).max(0).saturating_mul(self.limit)
    }

    /// Number of pages for `count` matches. Never below one, so an empty
    /// collection still has a valid first page, and an unbounded page is the only page.
    pub fn total_pages(&self, count: i64) -> i64 {
        if self.limit == 0 {
            return 1;
        }
        let pages = count / self.limit + i64::from(count % self.limit != 0);
        pages.max(1)
    }

    pub fn validate(&self, count: i64) -> AppResult<()> {
        if self.page < 1 || self.page > self.total_pages(count) {
            return Err(AppError::PaginationError);
        }
        Ok(())
    }

    pub fn pagination(&self, count: i64) -> Pagination {
        let mut pagination = Pagination::default();
        if self.limit == 0 || self.limit >= count {
            return pagination;
        }
        if self.page > 1 {
            pagination.previous = Some(PageLink {
                page: self.page - 1,
                limit: self.limit,
            });
        }
        if self.page < self.total_pages(count) {
            pagination.next = Some(PageLink {
                page: self.page + 1,
                limit: self.limit,
            });
        }
        pagination
    }
}

fn parse_number(raw: Option<&str>, default: i64) -> AppResult<i64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|_| AppError::PaginationError),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::application::app_error::AppError;
    use crate::domain::query::page::{PageLink, PageRequest, Pagination};

    fn request(page: i64, limit: i64) -> PageRequest {
        PageRequest { page, limit }
    }

    #[rstest]
    fn test_defaults() {
        let page = PageRequest::parse(None, None).unwrap();
        assert_eq!(page, request(1, 0));
        assert_eq!(page.skip(), 0);
    }

    #[rstest]
    #[case(Some("abc"), None)]
    #[case(None, Some("ten"))]
    #[case(None, Some("-5"))]
    #[case(Some("1.5"), None)]
    fn test_non_integer_or_negative_is_rejected(#[case] page: Option<&str>, #[case] limit: Option<&str>) {
        assert!(matches!(
            PageRequest::parse(page, limit),
            Err(AppError::PaginationError)
        ));
    }

    #[rstest]
    #[case(1, 10, 0)]
    #[case(2, 10, 10)]
    #[case(3, 7, 14)]
    #[case(4, 0, 0)]
    fn test_skip(#[case] page: i64, #[case] limit: i64, #[case] expected: i64) {
        assert_eq!(request(page, limit).skip(), expected);
    }

    #[rstest]
    #[case(25, 10, 3)]
    #[case(20, 10, 2)]
    #[case(5, 10, 1)]
    #[case(0, 10, 1)]
    #[case(25, 0, 1)]
    fn test_total_pages(#[case] count: i64, #[case] limit: i64, #[case] expected: i64) {
        assert_eq!(request(1, limit).total_pages(count), expected);
    }

    #[rstest]
    #[case(0, 10, 25)]
    #[case(-1, 10, 25)]
    #[case(4, 10, 25)]
    #[case(2, 0, 25)]
    #[case(2, 10, 0)]
    fn test_out_of_range_page_is_rejected(#[case] page: i64, #[case] limit: i64, #[case] count: i64) {
        assert!(matches!(
            request(page, limit).validate(count),
            Err(AppError::PaginationError)
        ));
    }

    #[rstest]
    #[case(1, 10, 25)]
    #[case(3, 10, 25)]
    #[case(1, 0, 25)]
    #[case(1, 10, 0)]
    #[case(1, 0, 0)]
    fn test_in_range_page_is_accepted(#[case] page: i64, #[case] limit: i64, #[case] count: i64) {
        assert!(request(page, limit).validate(count).is_ok());
    }

    #[rstest]
    fn test_middle_page_links_both_ways() {
        let pagination = request(2, 10).pagination(25);
        assert_eq!(
            pagination,
            Pagination {
                previous: Some(PageLink { page: 1, limit: 10 }),
                next: Some(PageLink { page: 3, limit: 10 }),
            }
        );
    }

    #[rstest]
    #[case(request(1, 10), 5)]
    #[case(request(1, 10), 10)]
    #[case(request(1, 0), 25)]
    fn test_single_page_has_no_links(#[case] page: PageRequest, #[case] count: i64) {
        assert_eq!(page.pagination(count), Pagination::default());
    }

    #[rstest]
    fn test_links_stay_adjacent_to_current_page() {
        let count = 47;
        let limit = 5;
        let last = request(1, limit).total_pages(count);
        for page in 1..=last {
            let pagination = request(page, limit).pagination(count);
            if let Some(previous) = pagination.previous {
                assert_eq!(previous.page + 1, page);
            }
            if let Some(next) = pagination.next {
                assert_eq!(next.page - 1, page);
            }
            assert_eq!(pagination.previous.is_some(), page > 1);
            assert_eq!(pagination.next.is_some(), page < last);
        }
    }
}
