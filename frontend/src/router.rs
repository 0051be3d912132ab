use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{home::HomePage, login::LoginPage, not_found::NotFoundPage},
    state::{auth::AuthProvider, navigation::NavigatorProvider},
};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/";
/// Where a successful login lands when nothing else was requested.
pub const DEFAULT_REDIRECT_PATH: &str = "/orders";

pub const ROUTE_PATHS: &[&str] = &[DASHBOARD_PATH, LOGIN_PATH, DEFAULT_REDIRECT_PATH];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[DASHBOARD_PATH, DEFAULT_REDIRECT_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[LOGIN_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <NavigatorProvider>
                    <Routes>
                        <Route path=LOGIN_PATH view=LoginPage/>
                        <Route path=DASHBOARD_PATH view=ProtectedHome/>
                        <Route path=DEFAULT_REDIRECT_PATH view=ProtectedHome/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </NavigatorProvider>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireAuth><HomePage/></RequireAuth> }
}
