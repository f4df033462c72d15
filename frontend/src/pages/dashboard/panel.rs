use crate::components::layout::Layout;
use crate::pages::dashboard::{
    components::{SummarySection, UpcomingSessionsSection},
    view_model::use_dashboard_view_model,
};
use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();
    let greeting = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| format!("Welcome back, {}", user.full_name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">{greeting}</h2>
                <SummarySection summary={vm.summary_resource} />
                <UpcomingSessionsSection sessions={vm.sessions_resource} />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{provide_auth, tutor_user};
    use crate::test_support::ssr::with_local_runtime_async;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn dashboard_page_renders_sections() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET).path("/api/dashboard/summary");
                then.status(200).json_body(json!({
                    "upcoming_sessions": 2,
                    "open_offers": 5,
                    "completed_sessions": 11
                }));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/sessions/me");
                then.status(200).json_body(json!([]));
            });

            let runtime = leptos::create_runtime();
            let api = ApiClient::new_with_base_url(server.url("/api"));
            api.set_bearer_token("tok-abc");
            provide_context(api);
            provide_auth(Some(tutor_user()));

            leptos_reactive::suppress_resource_load(true);
            let html = view! { <DashboardPage /> }
                .into_view()
                .render_to_string()
                .to_string();
            leptos_reactive::suppress_resource_load(false);

            assert!(html.contains("Welcome back, Jane T."));
            assert!(html.contains("Upcoming sessions"));
            assert!(html.contains("Open requests"));

            runtime.dispose();
        });
    }
}
