use crate::{router::DEFAULT_REDIRECT_PATH, state::auth::use_auth};
use leptos::*;

/// Landing view for signed-in merchants.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let merchant_name = move || {
        auth.with(|state| {
            state
                .merchant
                .as_ref()
                .map(|m| if m.name.is_empty() { m.email.clone() } else { m.name.clone() })
                .unwrap_or_default()
        })
    };
    let merchant_email = move || {
        auth.with(|state| {
            state
                .merchant
                .as_ref()
                .map(|m| m.email.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">
                        "Welcome, " {merchant_name}
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                        "Signed in as " {merchant_email}
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            <a href=DEFAULT_REDIRECT_PATH class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover">
                                "View orders"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
