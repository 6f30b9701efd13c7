/// Create-user dialog
///
/// Button plus modal form. Validation failures keep the dialog open with the
/// offending fields highlighted; every API outcome closes it and raises a
/// notification.

use leptos::*;
use log::debug;

use crate::api::use_user_api;
use crate::components::modal::Modal;
use crate::components::notifications::use_notifications;
use crate::config::use_config;
use crate::state::registration::{register_user, CreateDialogState};
use crate::types::User;
use crate::utils::validation::FormField;

#[component]
pub fn CreateUser(
    /// Receives the user returned by the API after a successful create
    on_created: Callback<User>,
) -> impl IntoView {
    let config = use_config();
    let api = use_user_api();
    let notifications = use_notifications();

    let dialog = create_rw_signal(CreateDialogState::default());
    let company_id = config.company.id;

    let submit = Callback::new(move |_: ()| {
        let attempt = dialog.try_update(|dialog| dialog.begin_submit(&company_id));
        let new_user = match attempt {
            Some(Ok(new_user)) => new_user,
            Some(Err(rejection)) => {
                debug!("Create user form rejected: {:?}", rejection);
                return;
            }
            None => return,
        };

        let api = api.clone();
        spawn_local(async move {
            let outcome = register_user(&*api, new_user).await;
            let (message, severity) = outcome.notice();
            if let Some(user) = outcome.created() {
                on_created.call(user);
            }
            notifications.notify(message, severity);
            dialog.update(CreateDialogState::finish_submit);
        });
    });

    let close = Callback::new(move |_: ()| dialog.update(CreateDialogState::close));

    view! {
        <div class="createUserWrapper">
            <button
                class="createButton inline-flex items-center px-4 py-2 rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                on:click=move |_| dialog.update(CreateDialogState::open)
            >
                "Create New User"
            </button>

            <Modal
                show=Signal::derive(move || dialog.with(|dialog| dialog.open))
                title="Create New User"
                on_close=close
            >
                <form
                    class="formBox"
                    novalidate=true
                    on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.call(());
                    }
                >
                    {FormField::ALL
                        .into_iter()
                        .map(|field| view! { <FormInput field=field dialog=dialog/> })
                        .collect_view()}

                    <Show when=move || dialog.with(|dialog| !dialog.error.is_empty())>
                        <div class="errorBox mt-2 rounded-md bg-red-50 p-3 text-sm text-red-700">
                            <p>{move || dialog.with(|dialog| dialog.error.clone())}</p>
                        </div>
                    </Show>

                    <div class="flex justify-end space-x-3 pt-4">
                        <button
                            type="button"
                            class="cancelButton px-4 py-2 text-sm text-gray-600 hover:text-gray-900"
                            on:click=move |_| close.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="submitButton px-4 py-2 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                            disabled=move || dialog.with(|dialog| dialog.submitting)
                        >
                            "Submit"
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

#[component]
fn FormInput(field: FormField, dialog: RwSignal<CreateDialogState>) -> impl IntoView {
    let error = move || dialog.with(|dialog| dialog.form.error_message(field));
    let input_type = if field.is_secret() { "password" } else { "text" };

    view! {
        <div class="mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">
                {field.label()} " *"
            </label>
            <input
                type=input_type
                required=true
                class=move || {
                    let border = if error().is_some() {
                        "border-red-500 errorField"
                    } else {
                        "border-gray-300"
                    };
                    format!("w-full px-3 py-2 border rounded-md shadow-sm focus:outline-none focus:ring-blue-500 {}", border)
                }
                prop:value=move || dialog.with(|dialog| dialog.form.value(field).to_string())
                on:input=move |ev| dialog.update(|dialog| dialog.set_field(field, event_target_value(&ev)))
            />
            <Show when=move || error().is_some()>
                <p class="mt-1 text-sm text-red-600">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
