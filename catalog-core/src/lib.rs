pub mod bookmarks;
pub mod error;
pub mod pager;
pub mod record;
pub mod search;
pub mod shuffle;
pub mod state;
