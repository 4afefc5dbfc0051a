use std::rc::Rc;

use catalog_core::record::{Category, VideoRecord};
use catalog_core::state::CatalogState;
use yew::Reducible;

/// The events the UI raises into the catalog core.
pub enum CatalogAction {
    /// A category page started loading; supersedes earlier loads.
    Reset { category: Category, generation: u64 },
    /// A category fetch resolved. Stale generations are discarded.
    CatalogLoaded {
        generation: u64,
        records: Vec<VideoRecord>,
    },
    /// The shared search corpus resolved.
    CorpusLoaded(Vec<VideoRecord>),
    /// A non-empty search result becomes the active order sequence.
    SearchApplied(Vec<usize>),
    ClearSearch,
    PrevPage,
    NextPage,
}

/// Reducer wrapper around [`CatalogState`]. Dispatch always acts on the
/// latest state, so the two in-flight fetches cannot clobber each other
/// or a user-triggered action.
#[derive(Clone, PartialEq)]
pub struct BrowseStore(pub CatalogState);

impl Reducible for BrowseStore {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: CatalogAction) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            CatalogAction::Reset {
                category,
                generation,
            } => next.reset(category, generation),
            CatalogAction::CatalogLoaded {
                generation,
                records,
            } => next.apply_catalog(generation, records),
            CatalogAction::CorpusLoaded(records) => next.apply_corpus(records),
            CatalogAction::SearchApplied(results) => next.apply_search(results),
            CatalogAction::ClearSearch => next.clear_search(),
            CatalogAction::PrevPage => next.prev_page(),
            CatalogAction::NextPage => next.next_page(),
        }
        Rc::new(BrowseStore(next))
    }
}
