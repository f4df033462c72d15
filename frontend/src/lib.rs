use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::{
    DashboardPage, HomePage, JobsPage, LoginPage, ProfilePage, RegisterPage, SessionsPage,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="TutorLink"/>
        <state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/jobs" view=ProtectedJobs/>
                    <Route path="/sessions" view=ProtectedSessions/>
                    <Route path="/profile" view=ProtectedProfile/>
                </Routes>
            </Router>
        </state::auth::AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><DashboardPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedJobs() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><JobsPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedSessions() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><SessionsPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><ProfilePage/></crate::components::guard::RequireAuth> }
}

/// Browser entry point: initialize logging, resolve the runtime config, then
/// mount the app.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting TutorLink frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
        mount_to_body(|| view! { <App/> });
    });
}
