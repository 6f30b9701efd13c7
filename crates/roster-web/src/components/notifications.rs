/// Notification system for user feedback
///
/// A single toast banner for success and error messages. A new message
/// replaces the one on screen; the banner closes itself after
/// `AUTO_DISMISS_MS` or when dismissed.

use leptos::*;

use crate::components::icons::*;
use crate::state::{NotificationState, AUTO_DISMISS_MS};
use crate::types::Severity;

/// Notification context for showing toast notifications
#[derive(Debug, Clone, Copy)]
pub struct NotificationContext {
    pub state: RwSignal<NotificationState>,
    pub show_success: Callback<String>,
    pub show_error: Callback<String>,
    pub dismiss: Callback<()>,
}

impl NotificationContext {
    pub fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => self.show_success.call(message.to_string()),
            Severity::Error => self.show_error.call(message.to_string()),
        }
    }
}

/// Notification provider component
#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(NotificationState::default());

    let show = move |message: String, severity: Severity| {
        let generation = state
            .try_update(|state| state.show(message, severity))
            .unwrap_or_default();

        gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
            state.update(|state| {
                state.expire(generation);
            });
        })
        .forget();
    };

    let context = NotificationContext {
        state,
        show_success: Callback::new(move |message: String| show(message, Severity::Success)),
        show_error: Callback::new(move |message: String| show(message, Severity::Error)),
        dismiss: Callback::new(move |_| state.update(NotificationState::close)),
    };

    provide_context(context);

    view! {
        {children()}
        <NotificationBanner/>
    }
}

/// Hook to access notification context
pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>()
        .expect("NotificationContext must be provided by NotificationProvider")
}

/// The toast itself, rendered only while a notification is open
#[component]
fn NotificationBanner() -> impl IntoView {
    let notifications = use_notifications();
    let state = notifications.state;

    let styles = move || match state.with(|s| s.severity) {
        Severity::Success => (
            "bg-green-50 border-green-200",
            "text-green-800",
        ),
        Severity::Error => (
            "bg-red-50 border-red-200",
            "text-red-800",
        ),
    };

    view! {
        <Show when=move || state.with(|s| s.open)>
            <div class="fixed bottom-4 left-4 z-50 max-w-sm" role="alert">
                <div class=move || format!("rounded-lg border p-4 shadow-lg {}", styles().0)>
                    <div class="flex items-center">
                        <div class=move || format!("flex-shrink-0 w-5 h-5 {}", styles().1)>
                            {move || match state.with(|s| s.severity) {
                                Severity::Success => view! { <CheckIcon/> }.into_view(),
                                Severity::Error => view! { <AlertIcon/> }.into_view(),
                            }}
                        </div>
                        <p class=move || format!("ml-3 flex-1 text-sm font-medium {}", styles().1)>
                            {move || state.with(|s| s.message.clone())}
                        </p>
                        <button
                            class=move || format!("ml-4 inline-flex rounded-md p-1.5 {}", styles().1)
                            on:click=move |_| notifications.dismiss.call(())
                        >
                            <span class="sr-only">"Dismiss"</span>
                            <CloseIcon/>
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
