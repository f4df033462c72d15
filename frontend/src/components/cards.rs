use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted">{title}</dt>
                <dd class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</dd>
                {caption.map(|caption| view! {
                    <p class="mt-1 text-xs text-fg-muted">{caption}</p>
                })}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_title_and_value() {
        let html = render_to_string(|| {
            let (value, _) = create_signal("4".to_string());
            view! { <StatCard title="Upcoming sessions" value=value /> }
        });
        assert!(html.contains("Upcoming sessions"));
        assert!(html.contains(">4<"));
    }
}
