use crate::router::{DASHBOARD_PATH, DEFAULT_REDIRECT_PATH};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-extrabold text-fg">"404"</h1>
                <p class="text-xl font-semibold text-fg">"Page not found"</p>
                <p class="text-fg-muted">
                    "The page you are looking for does not exist or has moved."
                </p>
                <div class="mt-6 flex justify-center gap-4">
                    <a
                        href=DEFAULT_REDIRECT_PATH
                        class="px-4 py-2 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                    >
                        "View orders"
                    </a>
                    <a
                        href=DASHBOARD_PATH
                        class="px-4 py-2 text-sm font-medium rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    >
                        "Back to dashboard"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_exactly_two_links_to_orders_and_dashboard() {
        let html = render_to_string(|| view! { <NotFoundPage /> });
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(r#"href="/orders""#));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains("Page not found"));
    }
}
