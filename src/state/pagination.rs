/// Paginator arithmetic (1-based pages)

use std::ops::RangeInclusive;

/// Number of pages needed to show `total` records, `rows` per page.
/// Always at least 1 so the paginator has something to show.
pub fn page_count(total: usize, rows: usize) -> u32 {
    if rows == 0 {
        return 1;
    }
    let pages = total.div_ceil(rows).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Zero-based index of the first row on a 1-based `page`
pub fn first_row(page: u32, rows: usize) -> usize {
    (page.max(1) as usize - 1).saturating_mul(rows)
}

/// Window of numbered page links around `current`.
///
/// At most `link_count` pages, centred on `current` where possible and
/// shifted to stay within `1..=page_count`.
pub fn page_links(current: u32, page_count: u32, link_count: u32) -> RangeInclusive<u32> {
    let page_count = page_count.max(1);
    let link_count = link_count.clamp(1, page_count);
    let current = current.clamp(1, page_count);

    let half = link_count / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(page_count - link_count + 1);

    start..=start + link_count - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(101, 10), 11);
        assert_eq!(page_count(9, 10), 1);
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(50, 0), 1);
    }

    #[test]
    fn test_first_row() {
        assert_eq!(first_row(1, 10), 0);
        assert_eq!(first_row(3, 10), 20);
        assert_eq!(first_row(0, 10), 0);
    }

    #[test]
    fn test_page_links_centred() {
        assert_eq!(page_links(6, 20, 5), 4..=8);
    }

    #[test]
    fn test_page_links_edges() {
        assert_eq!(page_links(1, 20, 5), 1..=5);
        assert_eq!(page_links(2, 20, 5), 1..=5);
        assert_eq!(page_links(20, 20, 5), 16..=20);
        assert_eq!(page_links(19, 20, 5), 16..=20);
    }

    #[test]
    fn test_page_links_few_pages() {
        assert_eq!(page_links(2, 3, 5), 1..=3);
        assert_eq!(page_links(1, 1, 5), 1..=1);
    }
}
