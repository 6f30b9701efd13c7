/// Modal dialog shell: backdrop, title bar, close button

use leptos::*;

use crate::components::icons::CloseIcon;

#[component]
pub fn Modal(
    #[prop(into)]
    show: Signal<bool>,
    title: &'static str,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div class="fixed inset-0 z-40 overflow-y-auto" role="dialog" aria-modal="true">
                <div class="flex items-center justify-center min-h-screen p-4">
                    <div
                        class="fixed inset-0 bg-black bg-opacity-50 transition-opacity"
                        on:click=move |_| on_close.call(())
                    ></div>

                    <div class="relative bg-white rounded-lg shadow-xl max-w-xl w-full dialogPaper">
                        <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200">
                            <h2 class="text-xl font-semibold text-gray-900 dialogTitle">{title}</h2>
                            <button
                                class="p-2 text-gray-400 hover:text-gray-600 rounded-lg hover:bg-gray-100"
                                on:click=move |_| on_close.call(())
                            >
                                <CloseIcon/>
                            </button>
                        </div>
                        <div class="px-6 py-4">
                            {children()}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
