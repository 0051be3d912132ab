use crate::{
    router::LOGIN_PATH,
    state::{
        auth::{use_auth, AuthState},
        navigation::{use_navigator, Navigator},
    },
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let navigator = use_navigator();
    let is_authenticated = create_memo(move |_| auth.with(|state| state.is_authenticated));
    create_effect(move |_| {
        auth.with(|state| redirect_anonymous(state, &navigator));
    });
    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Sends anonymous visitors to the login page, remembering where they were
/// headed. Returns true when a redirect was issued.
fn redirect_anonymous(state: &AuthState, navigator: &dyn Navigator) -> bool {
    if state.is_authenticated {
        return false;
    }
    let from = navigator.current_path();
    navigator.replace(LOGIN_PATH, Some(&from));
    true
}
