use leptos::*;

use crate::utils::join_window::SessionStatus;

#[component]
pub fn SessionStatusBadge(#[prop(into)] status: Signal<SessionStatus>) -> impl IntoView {
    view! {
        <span class=move || format!(
            "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {}",
            status.get().badge_class()
        )>
            {move || status.get().label()}
        </span>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_renders_the_status_label() {
        let html = render_to_string(|| {
            let status = create_rw_signal(SessionStatus::Ready);
            view! { <SessionStatusBadge status=status /> }
        });
        assert!(html.contains("Ready to join"));
        assert!(html.contains("bg-status-success-bg"));
    }
}
