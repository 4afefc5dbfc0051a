use catalog_core::bookmarks::BookmarkSet;
use catalog_core::record::Category;
use catalog_core::state::{CatalogState, SearchStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browse::api::{fetch_catalog, fetch_search_corpus};
use crate::browse::components::{GridItem, Pagination, SearchBar, VideoGrid};
use crate::browse::state::{BrowseStore, CatalogAction};
use crate::env_variable_utils::get_app_name;
use crate::storage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/music")]
    Music,
    #[at("/movies")]
    Movies,
    #[at("/sports")]
    Sports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn category_route(category: Category) -> Route {
    match category {
        Category::General => Route::Home,
        Category::Music => Route::Music,
        Category::Movies => Route::Movies,
        Category::Sports => Route::Sports,
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <CatalogApp category={Category::General} /> },
        Route::Music => html! { <CatalogApp category={Category::Music} /> },
        Route::Movies => html! { <CatalogApp category={Category::Movies} /> },
        Route::Sports => html! { <CatalogApp category={Category::Sports} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the catalog"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogAppProps {
    pub category: Category,
}

#[function_component(CatalogApp)]
pub fn catalog_app(props: &CatalogAppProps) -> Html {
    let storage = use_memo((), |_| storage::open());
    let store = {
        let category = props.category;
        use_reducer(move || BrowseStore(CatalogState::new(category)))
    };
    let bookmarks = use_state({
        let storage = storage.clone();
        move || BookmarkSet::load((*storage).as_ref())
    });
    let search_query = use_state(String::new);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    // Monotonic across category switches, so a superseded load can be
    // told apart from the one that replaced it.
    let load_generation = use_mut_ref(|| 0u64);

    // (Re)load the catalog whenever the category changes.
    {
        let store = store.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let search_query = search_query.clone();
        let load_generation = load_generation.clone();

        use_effect_with(props.category, move |category| {
            let category = *category;
            let generation = {
                let mut counter = load_generation.borrow_mut();
                *counter += 1;
                *counter
            };
            store.dispatch(CatalogAction::Reset {
                category,
                generation,
            });
            search_query.set(String::new());
            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_catalog(category).await {
                    Ok(records) => {
                        store.dispatch(CatalogAction::CatalogLoaded {
                            generation,
                            records,
                        });
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to load videos: {e}")));
                    }
                }
                if *load_generation.borrow() == generation {
                    loading.set(false);
                }
            });
            || ()
        });
    }

    // Fetch the search corpus once; search stays disabled until it lands.
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_search_corpus().await {
                    Ok(records) => store.dispatch(CatalogAction::CorpusLoaded(records)),
                    Err(e) => log::warn!("search corpus unavailable: {e}"),
                }
            });
            || ()
        });
    }

    let on_search = {
        let store = store.clone();
        let search_query = search_query.clone();
        let error_message = error_message.clone();

        Callback::from(move |query: String| {
            search_query.set(query.clone());
            match store.0.run_search(&query) {
                SearchStatus::Matches(results) => {
                    error_message.set(None);
                    store.dispatch(CatalogAction::SearchApplied(results));
                }
                SearchStatus::NoResults => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("No videos found with the search term!");
                    }
                }
                SearchStatus::Unavailable => {
                    error_message.set(Some(
                        "Search is still loading, try again in a moment.".to_string(),
                    ));
                }
            }
        })
    };

    let on_clear = {
        let store = store.clone();
        let search_query = search_query.clone();
        Callback::from(move |_| {
            search_query.set(String::new());
            store.dispatch(CatalogAction::ClearSearch);
        })
    };

    let on_toggle = {
        let bookmarks = bookmarks.clone();
        let storage = storage.clone();
        let store = store.clone();
        let error_message = error_message.clone();

        Callback::from(move |local_index: usize| {
            let mut next = (*bookmarks).clone();
            match next.toggle(local_index, store.0.active_offset(), (*storage).as_ref()) {
                Ok(()) => bookmarks.set(next),
                Err(e) => error_message.set(Some(format!("Failed to save bookmark: {e}"))),
            }
        })
    };

    let on_prev = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(CatalogAction::PrevPage))
    };

    let on_next = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(CatalogAction::NextPage))
    };

    let state = &store.0;
    let view = state.page_view();
    let items: Vec<GridItem> = state
        .visible()
        .into_iter()
        .map(|entry| GridItem {
            local_index: entry.local_index,
            record: entry.record.clone(),
            bookmarked: bookmarks.is_bookmarked(entry.global_id),
        })
        .collect();

    let heading = if state.is_searching() {
        format!("Search results for \"{}\"", *search_query)
    } else {
        props.category.display_name().to_string()
    };

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-4xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { get_app_name() }
                </h1>

                <nav class="text-center mb-4 space-x-4">
                    {
                        Category::all_variants().into_iter().map(|category| {
                            let classes = if category == props.category {
                                "text-gray-800 font-semibold"
                            } else {
                                "text-blue-600 hover:underline"
                            };
                            html! {
                                <Link<Route> to={category_route(category)} classes={classes}>
                                    { category.display_name() }
                                </Link<Route>>
                            }
                        }).collect::<Html>()
                    }
                </nav>

                <SearchBar
                    query={(*search_query).clone()}
                    disabled={!state.search_ready() || *loading}
                    searching={state.is_searching()}
                    on_search={on_search}
                    on_clear={on_clear}
                />

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <p class="text-red-600 text-center mb-4">{ msg }</p>
                        }
                    } else {
                        html! {}
                    }
                }

                <h2 class="text-xl font-semibold text-gray-800 mb-4">{ heading }</h2>

                {
                    if *loading {
                        html! {
                            <div class="text-center py-8">
                                <p>{"Loading videos..."}</p>
                            </div>
                        }
                    } else if items.is_empty() {
                        html! {
                            <p class="text-center text-gray-500">{"No videos to show."}</p>
                        }
                    } else {
                        html! {
                            <VideoGrid items={items} on_toggle={on_toggle} />
                        }
                    }
                }

                <Pagination
                    page_number={state.page_number()}
                    total_pages={state.total_pages()}
                    has_prev={view.has_prev}
                    has_next={view.has_next}
                    on_prev={on_prev}
                    on_next={on_next}
                />
            </div>
        </div>
    }
}
