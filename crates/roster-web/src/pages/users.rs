/// Users management page
///
/// The company's user directory: search, paginated list, create and delete.
/// A fetch is issued once on mount, whenever the search term changes
/// (restarting at page 1) and whenever another page is picked.

use leptos::*;

use crate::api::{use_user_api, UserApi};
use crate::components::create_user::CreateUser;
use crate::components::icons::*;
use crate::components::notifications::use_notifications;
use crate::components::pagination::Pagination;
use crate::components::user_list::UserList;
use crate::config::use_config;
use crate::state::{DirectoryState, DirectoryView, PageRequest};
use crate::types::User;

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = use_config();
    let api = use_user_api();
    let notifications = use_notifications();

    let directory = create_rw_signal(DirectoryState::default());
    let (search_term, set_search_term) = create_signal(String::new());
    let company_id = store_value(config.company.id.clone());

    let load = Callback::new({
        let api = api.clone();
        move |request: PageRequest| {
            let api = api.clone();
            let query = request.to_query(&company_id.get_value());
            spawn_local(async move {
                let result = api.list_users(&query).await;
                directory.update(|state| {
                    state.apply_page(request.id, result);
                });
            });
        }
    });

    // Runs on mount, then again on every search-term change.
    create_effect(move |mounted: Option<()>| {
        let term = search_term.get();
        let request = directory
            .try_update(|state| match mounted {
                None => Some(state.mount()),
                Some(()) => state.set_search_term(term),
            })
            .flatten();
        if let Some(request) = request {
            load.call(request);
        }
    });

    let on_page_change = Callback::new(move |page: u32| {
        if let Some(request) = directory.try_update(|state| state.request_page(page)).flatten() {
            load.call(request);
        }
    });

    let on_created = Callback::new(move |user: User| {
        directory.update(|state| state.append_user(user));
    });

    let on_delete = Callback::new(move |id: String| {
        if !directory.try_update(|state| state.begin_delete(&id)).unwrap_or(false) {
            return;
        }

        let api = api.clone();
        spawn_local(async move {
            let result = api.delete_user(&id).await;
            if let Some((message, severity)) = directory.try_update(|state| state.finish_delete(&id, &result)) {
                notifications.notify(message, severity);
            }
        });
    });

    let view_mode = create_memo(move |_| directory.with(DirectoryState::view));
    let users = Signal::derive(move || directory.with(|state| state.users.clone()));
    let deleting = Signal::derive(move || directory.with(|state| state.pending_deletes.clone()));
    let current_page = Signal::derive(move || directory.with(|state| state.current_page));
    let total_pages = Signal::derive(move || directory.with(|state| state.total_pages));

    let title = format!("{} Users", config.company.name);

    view! {
        <div class="home min-h-screen bg-gradient-to-br from-slate-800 to-blue-900">
            <div class="container mx-auto px-4 py-6 max-w-6xl">
                <div class="header flex flex-wrap justify-between items-center gap-4 mb-6">
                    <h1 class="companyName text-3xl font-bold text-white">{title}</h1>

                    <div class="headerControls flex items-center space-x-4">
                        <CreateUser on_created=on_created/>
                        <div>
                            <label class="sr-only" for="user-search">"Search users by name"</label>
                            <input
                                id="user-search"
                                type="text"
                                class="searchInput w-64 px-3 py-2 border border-gray-300 rounded-md shadow-sm bg-white text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                placeholder="Search users by name"
                                prop:value=search_term
                                on:input=move |ev| set_search_term.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                {move || match view_mode.get() {
                    DirectoryView::Loading => view! {
                        <div class="loading flex justify-center py-16">
                            <LoadingIcon/>
                        </div>
                    }
                    .into_view(),
                    DirectoryView::Empty => view! { <NoData/> }.into_view(),
                    DirectoryView::List => view! {
                        <UserList users=users deleting=deleting on_delete=on_delete/>
                    }
                    .into_view(),
                }}

                <Pagination current=current_page total=total_pages on_change=on_page_change/>
            </div>
        </div>
    }
}

#[component]
fn NoData() -> impl IntoView {
    view! {
        <div class="noData flex flex-col items-center py-16 text-white">
            <PersonIcon icon_class="noDataIcon w-16 h-16 opacity-70"/>
            <h2 class="mt-4 text-2xl font-semibold">"No Data Available"</h2>
            <p class="mt-2 text-base opacity-80">
                "No users found or an error occurred while fetching data."
            </p>
        </div>
    }
}
