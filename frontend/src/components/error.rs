use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2"
            >
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
