use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Pages shown on each side of the current page.
pub const DEFAULT_PAGE_DELTA: i64 = 2;

/// One entry in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageToken {
    Page(i64),
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<i64> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }
}

/// Which page numbers a pagination control should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    current_page: i64,
    last_page: i64,
    delta: i64,
}

impl PageWindow {
    /// Fails with `InvalidRange` unless `1 <= current_page <= last_page` and
    /// `delta >= 0`. Out-of-range input is rejected, never clamped.
    pub fn new(current_page: i64, last_page: i64, delta: i64) -> Result<Self, RegistryError> {
        if current_page < 1 || last_page < 1 || current_page > last_page || delta < 0 {
            return Err(RegistryError::invalid_range(current_page, last_page));
        }
        Ok(Self {
            current_page,
            last_page,
            delta,
        })
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn last_page(&self) -> i64 {
        self.last_page
    }

    fn keeps(&self, n: i64) -> bool {
        n == 1
            || n == self.last_page
            || (self.current_page - self.delta <= n && n <= self.current_page + self.delta)
    }

    /// Kept pages in ascending order, with a single `Ellipsis` standing in
    /// for every run of hidden pages (including a run of one).
    pub fn tokens(&self) -> Vec<PageToken> {
        let low = (self.current_page - self.delta).max(1);
        let high = (self.current_page + self.delta).min(self.last_page);

        // Only 1, last_page and [low, high] can be kept, so there is no need
        // to walk every page of a very long listing.
        let mut candidates = vec![1];
        candidates.extend(low..=high);
        candidates.push(self.last_page);

        let mut tokens = Vec::with_capacity(candidates.len() + 2);
        let mut previous: Option<i64> = None;
        for n in candidates {
            if !self.keeps(n) {
                continue;
            }
            match previous {
                Some(p) if n <= p => continue,
                Some(p) if n != p + 1 => tokens.push(PageToken::Ellipsis),
                _ => {}
            }
            tokens.push(PageToken::Page(n));
            previous = Some(n);
        }
        tokens
    }
}

/// Page window with the default spread of two pages.
pub fn page_window(current_page: i64, last_page: i64) -> Result<Vec<PageToken>, RegistryError> {
    Ok(PageWindow::new(current_page, last_page, DEFAULT_PAGE_DELTA)?.tokens())
}

/// Pagination metadata of the currently displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: i64,
    pub last_page: i64,
    pub total: i64,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total: 0,
        }
    }
}

impl PaginationMeta {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// A single page needs no pagination control.
    pub fn should_render(&self) -> bool {
        self.last_page > 1
    }

    pub fn contains(&self, page: i64) -> bool {
        (1..=self.last_page.max(1)).contains(&page)
    }

    pub fn window(&self, delta: i64) -> Result<Vec<PageToken>, RegistryError> {
        Ok(PageWindow::new(self.current_page, self.last_page, delta)?.tokens())
    }

    pub fn nav_controls(&self) -> NavControls {
        NavControls {
            first: self.has_prev(),
            previous: self.has_prev(),
            next: self.has_next(),
            last: self.has_next(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Menampilkan halaman {} dari {} (Total: {} Data)",
            self.current_page, self.last_page, self.total
        )
    }
}

/// Enabled state of the navigation buttons around the page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

/// One page of records plus its metadata, already normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, current_page: i64, last_page: i64, total: i64) -> Self {
        Self {
            items,
            meta: PaginationMeta {
                current_page,
                last_page,
                total,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use PageToken::{Ellipsis, Page as P};

    fn window(current: i64, last: i64, delta: i64) -> Vec<PageToken> {
        PageWindow::new(current, last, delta).unwrap().tokens()
    }

    fn assert_window_invariants(tokens: &[PageToken], last: i64) {
        let pages: Vec<i64> = tokens.iter().filter_map(PageToken::page).collect();
        assert_eq!(pages.iter().filter(|&&p| p == 1).count(), 1, "{tokens:?}");
        assert_eq!(pages.iter().filter(|&&p| p == last).count(), 1, "{tokens:?}");
        assert!(pages.windows(2).all(|w| w[0] < w[1]), "{tokens:?}");
        assert!(
            tokens.windows(2).all(|w| w != [Ellipsis, Ellipsis]),
            "{tokens:?}"
        );
        assert_ne!(tokens.first(), Some(&Ellipsis));
        assert_ne!(tokens.last(), Some(&Ellipsis));
    }

    #[test]
    fn middle_page_of_twenty() {
        assert_eq!(
            window(5, 20, 2),
            vec![P(1), Ellipsis, P(3), P(4), P(5), P(6), P(7), Ellipsis, P(20)]
        );
    }

    #[test]
    fn small_listing_needs_no_ellipsis() {
        assert_eq!(window(1, 3, 2), vec![P(1), P(2), P(3)]);
    }

    #[test]
    fn single_page() {
        assert_eq!(window(1, 1, 2), vec![P(1)]);
        assert_eq!(page_window(1, 1).unwrap(), vec![P(1)]);
    }

    #[test]
    fn boundaries_show_first_and_last_once() {
        assert_eq!(window(1, 10, 2), vec![P(1), P(2), P(3), Ellipsis, P(10)]);
        assert_eq!(window(10, 10, 2), vec![P(1), Ellipsis, P(8), P(9), P(10)]);
    }

    #[test]
    fn single_hidden_page_becomes_ellipsis() {
        assert_eq!(window(4, 4, 1), vec![P(1), Ellipsis, P(3), P(4)]);
    }

    #[test]
    fn zero_delta_keeps_only_current_and_ends() {
        assert_eq!(window(5, 9, 0), vec![P(1), Ellipsis, P(5), Ellipsis, P(9)]);
        assert_eq!(window(2, 3, 0), vec![P(1), P(2), P(3)]);
    }

    #[test]
    fn invariants_hold_across_ranges() {
        for last in 1..=30 {
            for current in 1..=last {
                for delta in 0..=4 {
                    assert_window_invariants(&window(current, last, delta), last);
                }
            }
        }
    }

    #[test]
    fn pages_within_delta_are_always_shown() {
        let tokens = window(50, 100, 3);
        for n in 47..=53 {
            assert!(tokens.contains(&P(n)));
        }
        assert!(!tokens.contains(&P(46)));
    }

    #[test]
    fn huge_last_page_stays_small() {
        let tokens = window(500_000, 1_000_000, 2);
        assert_eq!(tokens.len(), 9);
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert_eq!(
            PageWindow::new(0, 5, 2),
            Err(RegistryError::invalid_range(0, 5))
        );
        assert!(PageWindow::new(1, 0, 2).is_err());
        assert!(PageWindow::new(6, 5, 2).is_err());
        assert!(PageWindow::new(-1, -1, 2).is_err());
        assert!(PageWindow::new(1, 5, -1).is_err());
    }

    #[test]
    fn nav_controls_disable_at_edges() {
        let first = PaginationMeta {
            current_page: 1,
            last_page: 3,
            total: 30,
        };
        assert_eq!(
            first.nav_controls(),
            NavControls {
                first: false,
                previous: false,
                next: true,
                last: true
            }
        );
        let last = PaginationMeta {
            current_page: 3,
            ..first
        };
        assert!(!last.nav_controls().next);
        assert!(!last.nav_controls().last);
        assert!(last.nav_controls().previous);
    }

    #[test]
    fn single_page_meta_is_not_rendered() {
        assert!(!PaginationMeta::default().should_render());
        assert!(PaginationMeta {
            current_page: 1,
            last_page: 2,
            total: 11
        }
        .should_render());
    }

    #[test]
    fn summary_reads_like_the_footer() {
        let meta = PaginationMeta {
            current_page: 2,
            last_page: 4,
            total: 37,
        };
        assert_eq!(
            meta.summary(),
            "Menampilkan halaman 2 dari 4 (Total: 37 Data)"
        );
    }
}
