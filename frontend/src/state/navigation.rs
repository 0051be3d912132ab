//! Routing capabilities handed to views through context.
//!
//! Views never reach into the router or `window` directly: they ask for a
//! [`NavigatorHandle`] and use the [`Navigator`] operations. Inside the app
//! router that handle is a [`RouterNavigator`]; tests provide their own.

use leptos::*;
use leptos_router::{use_location, use_navigate, Location, NavigateOptions, State};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use wasm_bindgen::JsValue;

use crate::router::{DEFAULT_REDIRECT_PATH, LOGIN_PATH};

pub trait Navigator {
    /// Path recorded in navigation state by whoever sent the user here.
    fn redirect_target(&self) -> Option<String>;

    fn current_path(&self) -> String;

    /// Navigates to `path`, replacing the current history entry. When `from`
    /// is given it is recorded as the redirect target of the new entry.
    fn replace(&self, path: &str, from: Option<&str>);
}

/// History state written alongside a redirect: `{"from":{"pathname":"..."}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectState {
    #[serde(default)]
    pub from: Option<FromLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromLocation {
    pub pathname: String,
}

impl RedirectState {
    pub fn from_path(path: &str) -> Self {
        Self {
            from: Some(FromLocation {
                pathname: path.to_string(),
            }),
        }
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn pathname(&self) -> Option<&str> {
        self.from.as_ref().map(|from| from.pathname.as_str())
    }
}

/// Where to go after signing in: the intended path when it is a usable
/// in-app path, the order list otherwise.
pub fn resolve_redirect_target(intended: Option<&str>) -> String {
    intended
        .map(str::trim)
        .filter(|path| is_in_app_path(path) && !is_login_path(path))
        .unwrap_or(DEFAULT_REDIRECT_PATH)
        .to_string()
}

// Browsers resolve `/\host` the same as `//host`.
fn is_in_app_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

fn is_login_path(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}

#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: Rc<dyn Navigator>) -> Self {
        Self(navigator)
    }
}

impl Navigator for NavigatorHandle {
    fn redirect_target(&self) -> Option<String> {
        self.0.redirect_target()
    }

    fn current_path(&self) -> String {
        self.0.current_path()
    }

    fn replace(&self, path: &str, from: Option<&str>) {
        self.0.replace(path, from)
    }
}

/// Navigator backed by `leptos_router`; must be created inside `<Router>`.
pub struct RouterNavigator {
    location: Location,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self {
            location: use_location(),
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn redirect_target(&self) -> Option<String> {
        let State(raw) = self.location.state.get_untracked();
        let state = RedirectState::decode(&raw?.as_string()?)?;
        state.pathname().map(str::to_string)
    }

    fn current_path(&self) -> String {
        self.location.pathname.get_untracked()
    }

    fn replace(&self, path: &str, from: Option<&str>) {
        let state = from
            .map(|from| State(Some(JsValue::from_str(&RedirectState::from_path(from).encode()))))
            .unwrap_or_default();
        (self.navigate)(
            path,
            NavigateOptions {
                replace: true,
                state,
                ..Default::default()
            },
        );
    }
}

/// Fallback for views rendered outside the app router.
///
/// Rewrites the current history entry and emits `popstate` so that any
/// router listening on the window picks the change up.
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect_target(&self) -> Option<String> {
        let window = crate::utils::storage::window().ok()?;
        let raw = window.history().ok()?.state().ok()?.as_string()?;
        RedirectState::decode(&raw)?.pathname().map(str::to_string)
    }

    fn current_path(&self) -> String {
        crate::utils::storage::window()
            .ok()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn replace(&self, path: &str, from: Option<&str>) {
        let Ok(window) = crate::utils::storage::window() else {
            return;
        };
        let state = from
            .map(|from| JsValue::from_str(&RedirectState::from_path(from).encode()))
            .unwrap_or(JsValue::NULL);
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&state, "", Some(path)));
        if replaced.is_err() {
            log::warn!("history.replaceState failed, falling back to location.replace");
            if let Err(err) = window.location().replace(path) {
                log::warn!("location.replace to {path} failed: {err:?}");
            }
            return;
        }
        if let Ok(event) = web_sys::Event::new("popstate") {
            let _ = window.dispatch_event(&event);
        }
    }
}

pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>()
        .unwrap_or_else(|| NavigatorHandle::new(Rc::new(WindowNavigator)))
}

#[component]
pub fn NavigatorProvider(children: Children) -> impl IntoView {
    provide_context(NavigatorHandle::new(Rc::new(RouterNavigator::new())));
    view! { <>{children()}</> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn redirect_state_round_trips_through_history_json() {
        let encoded = RedirectState::from_path("/dashboard/settings").encode();
        assert_eq!(encoded, r#"{"from":{"pathname":"/dashboard/settings"}}"#);
        let decoded = RedirectState::decode(&encoded).unwrap();
        assert_eq!(decoded.pathname(), Some("/dashboard/settings"));
    }

    #[wasm_bindgen_test]
    fn redirect_state_without_from_has_no_pathname() {
        assert_eq!(RedirectState::decode("{}").unwrap().pathname(), None);
        assert!(RedirectState::decode("not json").is_none());
    }

    #[wasm_bindgen_test]
    fn resolve_redirect_target_prefers_intended_path() {
        assert_eq!(
            resolve_redirect_target(Some("/dashboard/settings")),
            "/dashboard/settings"
        );
        assert_eq!(resolve_redirect_target(Some("/")), "/");
    }

    #[wasm_bindgen_test]
    fn resolve_redirect_target_defaults_to_orders() {
        assert_eq!(resolve_redirect_target(None), "/orders");
        assert_eq!(resolve_redirect_target(Some("   ")), "/orders");
        assert_eq!(resolve_redirect_target(Some("orders")), "/orders");
        assert_eq!(resolve_redirect_target(Some("//evil.example.com")), "/orders");
        assert_eq!(resolve_redirect_target(Some("https://evil.example.com")), "/orders");
        assert_eq!(resolve_redirect_target(Some("/\\evil.example.com")), "/orders");
        assert_eq!(resolve_redirect_target(Some("/orders\\..\\admin")), "/orders");
    }

    #[wasm_bindgen_test]
    fn resolve_redirect_target_never_returns_to_login() {
        assert_eq!(resolve_redirect_target(Some("/login")), "/orders");
        assert_eq!(resolve_redirect_target(Some("/login/")), "/orders");
    }
}
