use catalog_core::record::VideoRecord;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub disabled: bool,
    pub searching: bool,
    pub on_search: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    // This Callback handles when the user types into the input field.
    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    // This Callback handles form submission.
    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            on_search.emit((*current_input).clone());
        })
    };

    let on_clear_click = {
        let on_clear = props.on_clear.clone();
        let current_input = current_input.clone();
        Callback::from(move |_| {
            current_input.set(String::new());
            on_clear.emit(());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Search video descriptions..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.disabled}
            >
                { if props.disabled { "Loading..." } else { "Search" } }
            </button>
            {
                if props.searching {
                    html! {
                        <button
                            type="button"
                            class="bg-gray-400 text-white p-3 rounded-r-lg hover:bg-gray-500"
                            onclick={on_clear_click}
                        >
                            {"Clear"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

/// One grid entry: the record plus the coordinates the bookmark button
/// toggles through.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem {
    pub local_index: usize,
    pub record: VideoRecord,
    pub bookmarked: bool,
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub items: Vec<GridItem>,
    pub on_toggle: Callback<usize>,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
            {
                props.items.iter().map(|item| {
                    let local_index = item.local_index;
                    let on_toggle = props.on_toggle.clone();
                    let bookmark_class = if item.bookmarked {
                        "mt-2 px-3 py-1 text-sm text-white rounded bg-green-600 hover:bg-green-700"
                    } else {
                        "mt-2 px-3 py-1 text-sm text-white rounded bg-red-500 hover:bg-red-600"
                    };

                    html! {
                        <div key={local_index} class="p-4 bg-gray-100 rounded-lg">
                            <a href={item.record.url.clone()}
                               target="_blank"
                               class="text-blue-600 hover:underline font-semibold">
                                { &item.record.description }
                            </a>
                            <a href={item.record.url.clone()} target="_blank" class="block mt-2">
                                <img src={item.record.thumbnail.clone()}
                                     alt="Thumbnail"
                                     class="w-full rounded" />
                            </a>
                            <button
                                onclick={Callback::from(move |_| on_toggle.emit(local_index))}
                                class={bookmark_class}
                            >
                                { if item.bookmarked { "Bookmarked" } else { "Bookmark" } }
                            </button>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page_number: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_prev_click = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_| {
            on_prev.emit(());
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let on_next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |_| {
            on_next.emit(());
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    html! {
        <div class="mt-6 flex justify-center gap-2">
            <button
                onclick={on_prev_click}
                disabled={!props.has_prev}
                class="px-4 py-2 text-sm bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
            >
                {"Previous"}
            </button>
            <span class="px-4 py-2 text-sm">
                {format!("Page {} of {}", props.page_number, props.total_pages.max(1))}
            </span>
            <button
                onclick={on_next_click}
                disabled={!props.has_next}
                class="px-4 py-2 text-sm bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
            >
                {"Next"}
            </button>
        </div>
    }
}
