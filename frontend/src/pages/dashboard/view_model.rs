use crate::api::{ApiClient, ApiError, SessionResponse, SummaryResponse};
use crate::pages::dashboard::repository;
use crate::state::auth::use_api;
use leptos::*;

#[derive(Clone)]
pub struct DashboardViewModel {
    pub api: ApiClient,
    pub summary_resource: Resource<(), Result<SummaryResponse, ApiError>>,
    pub sessions_resource: Resource<(), Result<Vec<SessionResponse>, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_api();

        let api_for_summary = api.clone();
        let summary_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_summary.clone();
                async move { repository::fetch_summary(&api).await }
            },
        );

        let api_for_sessions = api.clone();
        let sessions_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_sessions.clone();
                async move { repository::fetch_sessions(&api).await }
            },
        );

        Self {
            api,
            summary_resource,
            sessions_resource,
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_is_provided_through_context_once() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            assert!(use_context::<DashboardViewModel>().is_none());
            let _vm = use_dashboard_view_model();
            assert!(use_context::<DashboardViewModel>().is_some());
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
