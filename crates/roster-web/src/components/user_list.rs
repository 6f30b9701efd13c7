/// User cards with a delete action

use leptos::*;

use crate::components::icons::{DeleteIcon, PersonIcon};
use crate::types::User;

#[component]
pub fn UserList(
    #[prop(into)]
    users: Signal<Vec<User>>,
    /// Ids with a delete call in flight
    #[prop(into)]
    deleting: Signal<Vec<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="userList space-y-3">
            <For
                each=move || users.get()
                key=|user| user.id.clone()
                children=move |user| {
                    view! { <UserCard user=user deleting=deleting on_delete=on_delete/> }
                }
            />
        </div>
    }
}

#[component]
fn UserCard(
    user: User,
    deleting: Signal<Vec<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let full_name = user.full_name();
    let id = user.id.clone();
    let pending_id = user.id;
    let is_deleting = move || deleting.with(|ids| ids.contains(&pending_id));

    view! {
        <div class="card bg-white rounded-lg border border-gray-200 shadow-sm">
            <div class="cardContent flex items-center justify-between p-4">
                <div class="iconWrapper flex items-center space-x-4">
                    <PersonIcon icon_class="personIcon w-8 h-8 text-gray-500"/>
                    <div>
                        <p class="userData text-base font-medium text-gray-900">{full_name}</p>
                        <p class="text-sm text-gray-600">{user.email}</p>
                    </div>
                </div>
                <button
                    class="iconButton p-2 rounded-full text-gray-500 hover:text-red-600 hover:bg-red-50 disabled:opacity-40"
                    title="Delete user"
                    disabled=is_deleting
                    on:click=move |_| on_delete.call(id.clone())
                >
                    <DeleteIcon/>
                </button>
            </div>
        </div>
    }
}
