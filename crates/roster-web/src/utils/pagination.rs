/// Pagination control layout
///
/// Works out which buttons the page control shows: previous, first page,
/// the current page with one sibling each side, last page, next, with
/// ellipses standing in for the gaps.

const BOUNDARY_COUNT: i64 = 1;
const SIBLING_COUNT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous { target: u32, disabled: bool },
    Page { number: u32, selected: bool },
    Ellipsis,
    Next { target: u32, disabled: bool },
}

fn range(start: i64, end: i64) -> impl Iterator<Item = i64> {
    start..=end
}

pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    let count = i64::from(total.max(1));
    let page = i64::from(current.clamp(1, total.max(1)));

    let start_pages = range(1, BOUNDARY_COUNT.min(count));
    let end_pages = range((count - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1), count);

    let siblings_start = (page - SIBLING_COUNT)
        .min(count - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(count - BOUNDARY_COUNT - 1);

    let mut numbers: Vec<Option<i64>> = start_pages.map(Some).collect();

    if siblings_start > BOUNDARY_COUNT + 2 {
        numbers.push(None);
    } else if BOUNDARY_COUNT + 1 < count - BOUNDARY_COUNT {
        numbers.push(Some(BOUNDARY_COUNT + 1));
    }

    numbers.extend(range(siblings_start, siblings_end).map(Some));

    if siblings_end < count - BOUNDARY_COUNT - 1 {
        numbers.push(None);
    } else if count - BOUNDARY_COUNT > BOUNDARY_COUNT {
        numbers.push(Some(count - BOUNDARY_COUNT));
    }

    numbers.extend(end_pages.map(Some));

    let as_page = |n: i64| u32::try_from(n).unwrap_or(1);

    let mut items = Vec::with_capacity(numbers.len() + 2);
    items.push(PageItem::Previous {
        target: as_page((page - 1).max(1)),
        disabled: page <= 1,
    });
    items.extend(numbers.into_iter().map(|number| match number {
        Some(n) => PageItem::Page {
            number: as_page(n),
            selected: n == page,
        },
        None => PageItem::Ellipsis,
    }));
    items.push(PageItem::Next {
        target: as_page((page + 1).min(count)),
        disabled: page >= count,
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compact rendering: `<` / `>` for enabled arrows, `[n]` for the
    /// selected page, `...` for ellipses.
    fn render(current: u32, total: u32) -> String {
        page_items(current, total)
            .into_iter()
            .map(|item| match item {
                PageItem::Previous { disabled, .. } => (if disabled { "_" } else { "<" }).to_string(),
                PageItem::Next { disabled, .. } => (if disabled { "_" } else { ">" }).to_string(),
                PageItem::Page { number, selected: true } => format!("[{}]", number),
                PageItem::Page { number, .. } => number.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_single_page() {
        assert_eq!(render(1, 1), "_ [1] _");
        assert_eq!(render(1, 0), "_ [1] _");
    }

    #[test]
    fn test_short_ranges_have_no_ellipsis() {
        assert_eq!(render(1, 3), "_ [1] 2 3 >");
        assert_eq!(render(4, 7), "< 1 2 3 [4] 5 6 7 >");
    }

    #[test]
    fn test_long_ranges() {
        assert_eq!(render(1, 10), "_ [1] 2 3 4 5 ... 10 >");
        assert_eq!(render(5, 10), "< 1 ... 4 [5] 6 ... 10 >");
        assert_eq!(render(10, 10), "< 1 ... 6 7 8 9 [10] _");
    }

    #[test]
    fn test_arrow_targets() {
        let items = page_items(5, 10);
        assert_eq!(items.first(), Some(&PageItem::Previous { target: 4, disabled: false }));
        assert_eq!(items.last(), Some(&PageItem::Next { target: 6, disabled: false }));
    }

    #[test]
    fn test_current_beyond_total_is_clamped() {
        assert_eq!(render(9, 2), "< 1 [2] _");
    }
}
