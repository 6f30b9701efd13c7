/// Page control under the user list

use leptos::*;

use crate::utils::pagination::{page_items, PageItem};

const BUTTON_CLASS: &str = "min-w-[2rem] h-8 px-2 rounded-full text-sm text-white hover:bg-white/20 disabled:opacity-40 disabled:hover:bg-transparent";

#[component]
pub fn Pagination(
    #[prop(into)]
    current: Signal<u32>,
    #[prop(into)]
    total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="paginationWrapper flex justify-center mt-6" aria-label="pagination navigation">
            <ul class="pagination flex items-center space-x-1">
                {move || {
                    page_items(current.get(), total.get())
                        .into_iter()
                        .map(|item| view! { <li>{page_button(item, on_change)}</li> })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

fn page_button(item: PageItem, on_change: Callback<u32>) -> View {
    match item {
        PageItem::Previous { target, disabled } => view! {
            <button
                class=BUTTON_CLASS
                aria-label="Go to previous page"
                disabled=disabled
                on:click=move |_| on_change.call(target)
            >
                "‹"
            </button>
        }
        .into_view(),
        PageItem::Next { target, disabled } => view! {
            <button
                class=BUTTON_CLASS
                aria-label="Go to next page"
                disabled=disabled
                on:click=move |_| on_change.call(target)
            >
                "›"
            </button>
        }
        .into_view(),
        PageItem::Page { number, selected } => {
            let class = if selected {
                format!("{} bg-white text-gray-900", BUTTON_CLASS)
            } else {
                BUTTON_CLASS.to_string()
            };
            let current = if selected { "page" } else { "false" };
            view! {
                <button
                    class=class
                    aria-current=current
                    on:click=move |_| on_change.call(number)
                >
                    {number}
                </button>
            }
            .into_view()
        }
        PageItem::Ellipsis => view! { <span class="px-2 text-white">"…"</span> }.into_view(),
    }
}
