/// Number of videos shown per page.
pub const PAGE_SIZE: usize = 10;

/// The visible slice of an order sequence plus navigation enablement.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub indexes: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Total page count for a sequence of `len` entries. Zero for an empty
/// sequence.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Slices the window for a 1-based `page_number` out of `order`. The last
/// page may be short; an empty sequence yields an empty view with both
/// navigation flags off.
pub fn page(order: &[usize], page_number: usize, page_size: usize) -> PageView {
    // Navigation is clamped at the boundaries, so 0 can only arrive
    // programmatically; treat it as page 1 rather than underflowing.
    let page_number = page_number.max(1);
    let total = total_pages(order.len(), page_size);
    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(order.len());
    let indexes = if start < order.len() {
        order[start..end].to_vec()
    } else {
        Vec::new()
    };
    PageView {
        indexes,
        has_prev: page_number > 1,
        has_next: page_number < total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_a_long_sequence() {
        let order: Vec<usize> = (0..25).collect();
        let view = page(&order, 1, PAGE_SIZE);
        assert_eq!(view.indexes, (0..10).collect::<Vec<_>>());
        assert!(!view.has_prev);
        assert!(view.has_next);
    }

    #[test]
    fn last_page_is_clipped() {
        let order: Vec<usize> = (0..25).collect();
        let view = page(&order, 3, PAGE_SIZE);
        assert_eq!(view.indexes, (20..25).collect::<Vec<_>>());
        assert!(view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn empty_sequence_disables_both_directions() {
        let view = page(&[], 1, PAGE_SIZE);
        assert!(view.indexes.is_empty());
        assert!(!view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let order: Vec<usize> = (0..20).collect();
        assert_eq!(total_pages(order.len(), PAGE_SIZE), 2);
        let view = page(&order, 2, PAGE_SIZE);
        assert_eq!(view.indexes.len(), 10);
        assert!(!view.has_next);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let order: Vec<usize> = (0..15).collect();
        assert_eq!(page(&order, 0, PAGE_SIZE), page(&order, 1, PAGE_SIZE));
    }

    #[test]
    fn visible_length_matches_the_window_formula() {
        let order: Vec<usize> = (0..23).collect();
        for p in 1..=4 {
            let view = page(&order, p, PAGE_SIZE);
            let expected = PAGE_SIZE.min(order.len().saturating_sub((p - 1) * PAGE_SIZE));
            assert_eq!(view.indexes.len(), expected);
            assert_eq!(view.has_next, p < total_pages(order.len(), PAGE_SIZE));
        }
    }
}
