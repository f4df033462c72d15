use leptos::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg-muted mb-1">{label}</span>
            <input
                type=input_type
                class="block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                prop:value=move || value.get()
                placeholder=placeholder.unwrap_or_default()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-fg-muted mb-1">{label}</span>
            <textarea
                class="block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                rows=4
                prop:value=move || value.get()
                placeholder=placeholder.unwrap_or_default()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
        </label>
    }
}

#[component]
pub fn PrimaryButton(
    #[prop(into)] label: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(optional, into)] pending_label: Option<String>,
) -> impl IntoView {
    let pending_label = pending_label.unwrap_or_else(|| "Working...".to_string());
    view! {
        <button
            type="submit"
            class="inline-flex items-center justify-center px-4 py-2 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
            disabled=move || pending.get()
        >
            {move || if pending.get() { pending_label.clone() } else { label.clone() }}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_value() {
        let html = render_to_string(|| {
            let (value, set_value) = create_signal("jane@example.com".to_string());
            view! {
                <TextField
                    label="Email"
                    value=value
                    on_input=Callback::new(move |v| set_value.set(v))
                    input_type="email"
                />
            }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn primary_button_swaps_label_while_pending() {
        let html = render_to_string(|| {
            let (pending, _) = create_signal(true);
            view! { <PrimaryButton label="Save" pending=pending pending_label="Saving..." /> }
        });
        assert!(html.contains("Saving..."));
        assert!(html.contains("disabled"));
    }
}
