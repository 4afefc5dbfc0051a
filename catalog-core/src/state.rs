use crate::pager::{self, PageView, PAGE_SIZE};
use crate::record::{Category, VideoRecord};
use crate::search;
use crate::shuffle;

/// Outcome of submitting a search query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    /// Ordered corpus indexes to page through.
    Matches(Vec<usize>),
    /// Nothing matched; the active order sequence is untouched.
    NoResults,
    /// The search corpus has not resolved yet.
    Unavailable,
}

/// Everything the catalog browser needs to decide what is visible: the
/// active category's records, the shared search corpus, the browse
/// permutation or the active search-result order, and the current page.
///
/// Exactly one order sequence is active at a time. Applying a search
/// replaces the permutation as the active sequence and resets paging;
/// clearing the search or loading a fresh category returns to browsing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    category: Category,
    records: Vec<VideoRecord>,
    corpus: Option<Vec<VideoRecord>>,
    random_order: Vec<usize>,
    search_results: Option<Vec<usize>>,
    page_number: usize,
    generation: u64,
}

/// One entry of the visible page, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRecord<'a> {
    pub local_index: usize,
    pub record: &'a VideoRecord,
    pub global_id: usize,
}

impl CatalogState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            records: Vec::new(),
            corpus: None,
            random_order: Vec::new(),
            search_results: None,
            page_number: 1,
            generation: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a fresh category load identified by `generation`. Clears
    /// everything except the search corpus, which is category-independent.
    pub fn reset(&mut self, category: Category, generation: u64) {
        self.category = category;
        self.records = Vec::new();
        self.random_order = Vec::new();
        self.search_results = None;
        self.page_number = 1;
        self.generation = generation;
    }

    /// Applies a finished catalog load: replaces the record list, draws a
    /// fresh browse permutation and returns to page 1. A result from a
    /// superseded load (stale `generation`) is discarded.
    pub fn apply_catalog(&mut self, generation: u64, records: Vec<VideoRecord>) {
        if generation != self.generation {
            log::debug!(
                "discarding stale catalog load (generation {generation}, current {})",
                self.generation
            );
            return;
        }
        self.random_order = shuffle::random_order(records.len());
        self.records = records;
        self.search_results = None;
        self.page_number = 1;
    }

    pub fn apply_corpus(&mut self, records: Vec<VideoRecord>) {
        self.corpus = Some(records);
    }

    /// Whether search can be used yet (the corpus fetch has resolved).
    pub fn search_ready(&self) -> bool {
        self.corpus.is_some()
    }

    /// Runs a query against the corpus without changing any state. The
    /// caller applies a `Matches` outcome via [`apply_search`]; the other
    /// outcomes are surfaced to the user and leave the state alone.
    ///
    /// [`apply_search`]: CatalogState::apply_search
    pub fn run_search(&self, query: &str) -> SearchStatus {
        let Some(corpus) = &self.corpus else {
            return SearchStatus::Unavailable;
        };
        let matches = search::matching_indexes(query, corpus);
        if matches.is_empty() {
            SearchStatus::NoResults
        } else {
            SearchStatus::Matches(matches)
        }
    }

    /// Makes a non-empty search result the active order sequence.
    pub fn apply_search(&mut self, results: Vec<usize>) {
        self.search_results = Some(results);
        self.page_number = 1;
    }

    /// Leaves search mode and returns to the category permutation.
    pub fn clear_search(&mut self) {
        self.search_results = None;
        self.page_number = 1;
    }

    pub fn is_searching(&self) -> bool {
        self.search_results.is_some()
    }

    /// Offset mapping the currently visible local indexes into global ids.
    /// While searching, indexes address the corpus, which sits at offset 0.
    pub fn active_offset(&self) -> usize {
        if self.is_searching() {
            0
        } else {
            self.category.offset()
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.active_order().len(), PAGE_SIZE)
    }

    pub fn page_view(&self) -> PageView {
        pager::page(self.active_order(), self.page_number, PAGE_SIZE)
    }

    /// Moves one page forward; a no-op on the last page.
    pub fn next_page(&mut self) {
        if self.page_view().has_next {
            self.page_number += 1;
        }
    }

    /// Moves one page back; a no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page_view().has_prev {
            self.page_number -= 1;
        }
    }

    /// The records of the current page, in display order, with the global
    /// id each one bookmarks under.
    pub fn visible(&self) -> Vec<VisibleRecord<'_>> {
        let (list, offset): (&[VideoRecord], usize) = if self.is_searching() {
            (self.corpus.as_deref().unwrap_or_default(), 0)
        } else {
            (&self.records, self.category.offset())
        };
        self.page_view()
            .indexes
            .iter()
            .filter_map(|&local_index| {
                list.get(local_index).map(|record| VisibleRecord {
                    local_index,
                    record,
                    global_id: local_index + offset,
                })
            })
            .collect()
    }

    fn active_order(&self) -> &[usize] {
        self.search_results.as_deref().unwrap_or(&self.random_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<VideoRecord> {
        (0..n)
            .map(|i| VideoRecord {
                description: format!("video {i}"),
                url: format!("https://v.example/{i}"),
                thumbnail: format!("https://t.example/{i}.jpg"),
            })
            .collect()
    }

    fn loaded(category: Category, n: usize) -> CatalogState {
        let mut state = CatalogState::new(category);
        state.reset(category, 1);
        state.apply_catalog(1, records(n));
        state
    }

    #[test]
    fn load_draws_a_permutation_and_starts_on_page_one() {
        let state = loaded(Category::Sports, 25);
        let view = state.page_view();
        assert_eq!(view.indexes.len(), 10);
        assert!(!view.has_prev);
        assert!(view.has_next);
        assert_eq!(state.total_pages(), 3);

        let mut all: Vec<usize> = (1..=3)
            .flat_map(|p| pager::page(&collect_order(&state), p, PAGE_SIZE).indexes)
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..25).collect::<Vec<_>>());
    }

    fn collect_order(state: &CatalogState) -> Vec<usize> {
        // Walk the pages to recover the full active order.
        let mut state = state.clone();
        let mut order = Vec::new();
        loop {
            let view = state.page_view();
            order.extend(view.indexes.iter().copied());
            if !view.has_next {
                break;
            }
            state.next_page();
        }
        order
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut state = CatalogState::new(Category::Music);
        state.reset(Category::Music, 1);
        state.reset(Category::Movies, 2);
        state.apply_catalog(1, records(5));
        assert!(state.visible().is_empty());
        state.apply_catalog(2, records(3));
        assert_eq!(state.visible().len(), 3);
        assert_eq!(state.category(), Category::Movies);
    }

    #[test]
    fn search_replaces_the_active_order_and_resets_paging() {
        let mut state = loaded(Category::Music, 30);
        state.next_page();
        state.apply_corpus(records(8));
        match state.run_search("video") {
            SearchStatus::Matches(ixs) => {
                assert_eq!(ixs, (0..8).collect::<Vec<_>>());
                state.apply_search(ixs);
            }
            other => panic!("expected matches, got {other:?}"),
        }
        assert!(state.is_searching());
        assert_eq!(state.page_number(), 1);
        assert_eq!(state.visible().len(), 8);
    }

    #[test]
    fn searching_addresses_the_corpus_at_offset_zero() {
        let mut state = loaded(Category::Sports, 4);
        state.apply_corpus(records(6));
        if let SearchStatus::Matches(ixs) = state.run_search("video 2") {
            state.apply_search(ixs);
        }
        assert_eq!(state.active_offset(), 0);
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].local_index, 2);
        assert_eq!(visible[0].global_id, 2);
        assert_eq!(visible[0].record.description, "video 2");
    }

    #[test]
    fn no_results_leaves_the_state_untouched() {
        let mut state = loaded(Category::General, 12);
        state.apply_corpus(records(12));
        state.next_page();
        let before = state.clone();
        assert_eq!(state.run_search("nothing matches this"), SearchStatus::NoResults);
        assert_eq!(state, before);
    }

    #[test]
    fn search_is_unavailable_until_the_corpus_resolves() {
        let state = loaded(Category::General, 5);
        assert!(!state.search_ready());
        assert_eq!(state.run_search("video"), SearchStatus::Unavailable);
    }

    #[test]
    fn clear_search_returns_to_the_permutation() {
        let mut state = loaded(Category::Movies, 15);
        state.apply_corpus(records(40));
        if let SearchStatus::Matches(ixs) = state.run_search("video 3") {
            state.apply_search(ixs);
        }
        state.clear_search();
        assert!(!state.is_searching());
        assert_eq!(state.page_number(), 1);
        assert_eq!(state.visible().len(), 10);
        assert_eq!(state.active_offset(), Category::Movies.offset());
    }

    #[test]
    fn a_fresh_category_load_exits_search_mode() {
        let mut state = loaded(Category::General, 10);
        state.apply_corpus(records(10));
        if let SearchStatus::Matches(ixs) = state.run_search("video") {
            state.apply_search(ixs);
        }
        state.reset(Category::Sports, 2);
        state.apply_catalog(2, records(4));
        assert!(!state.is_searching());
        assert!(state.search_ready());
        assert_eq!(state.active_offset(), Category::Sports.offset());
    }

    #[test]
    fn page_navigation_is_a_no_op_at_the_boundaries() {
        let mut state = loaded(Category::General, 12);
        state.prev_page();
        assert_eq!(state.page_number(), 1);
        state.next_page();
        assert_eq!(state.page_number(), 2);
        state.next_page();
        assert_eq!(state.page_number(), 2);
    }

    #[test]
    fn global_ids_carry_the_category_offset_while_browsing() {
        let state = loaded(Category::Sports, 5);
        for entry in state.visible() {
            assert_eq!(entry.global_id, entry.local_index + 6009);
        }
    }
}
