/// Main application component
///
/// Provides the configuration, the users API handle and the notification
/// surface to the single users view.

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;

use crate::api::{HttpUserApi, SharedUserApi};
use crate::components::notifications::NotificationProvider;
use crate::config::AppConfig;
use crate::pages::users::UsersPage;

#[component]
pub fn App(
    #[prop(optional)]
    config: Option<AppConfig>,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = config.unwrap_or_default();
    let api: SharedUserApi = Rc::new(HttpUserApi::new(&config));
    let title = format!("{} Users", config.company.name);

    provide_context(config);
    provide_context(api);

    view! {
        <Title text=title/>
        <Meta name="description" content="Company user administration"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <NotificationProvider>
            <UsersPage/>
        </NotificationProvider>
    }
}
