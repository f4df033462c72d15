use crate::api::{ApiError, UpdateProfileRequest, UserRole};
use crate::components::{
    error::InlineErrorMessage,
    forms::{PrimaryButton, TextAreaField, TextField},
    layout::{Layout, SuccessMessage},
};
use crate::state::auth::{use_api, use_auth};
use leptos::{ev::SubmitEvent, *};

fn parse_subjects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|subject| !subject.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_hourly_rate(raw: &str) -> Result<Option<f64>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value > 0.0 => Ok(Some(value)),
        _ => Err(ApiError::validation("Hourly rate must be a positive number.")),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let (auth, set_auth) = use_auth();

    let user = auth.get_untracked().user;
    let is_tutor = user
        .as_ref()
        .map(|user| user.role == UserRole::Tutor)
        .unwrap_or(false);

    let full_name = create_rw_signal(
        user.as_ref()
            .map(|user| user.full_name.clone())
            .unwrap_or_default(),
    );
    let bio = create_rw_signal(
        user.as_ref()
            .and_then(|user| user.bio.clone())
            .unwrap_or_default(),
    );
    let subjects = create_rw_signal(
        user.as_ref()
            .map(|user| user.subjects.join(", "))
            .unwrap_or_default(),
    );
    let hourly_rate = create_rw_signal(
        user.as_ref()
            .and_then(|user| user.hourly_rate)
            .map(|rate| rate.to_string())
            .unwrap_or_default(),
    );

    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let save_action = create_action(move |request: &UpdateProfileRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.update_profile(request).await }
    });
    let pending = save_action.pending();

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(updated) => {
                    error.set(None);
                    success.set(Some("Profile saved.".to_string()));
                    let _ = set_auth.try_update(|state| state.user = Some(updated));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if full_name.get_untracked().trim().is_empty() {
            error.set(Some(ApiError::validation("Enter your full name.")));
            return;
        }
        let rate = match parse_hourly_rate(&hourly_rate.get_untracked()) {
            Ok(rate) => rate,
            Err(err) => {
                error.set(Some(err));
                return;
            }
        };
        error.set(None);
        success.set(None);
        let bio_value = bio.get_untracked();
        save_action.dispatch(UpdateProfileRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            bio: if bio_value.trim().is_empty() {
                None
            } else {
                Some(bio_value.trim().to_string())
            },
            subjects: parse_subjects(&subjects.get_untracked()),
            hourly_rate: rate,
        });
    };

    view! {
        <Layout>
            <div class="max-w-2xl space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Your profile"</h2>
                {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
                <InlineErrorMessage error=error />
                <form class="space-y-4 bg-surface-elevated shadow rounded-lg p-6" on:submit=on_submit>
                    <TextField
                        label="Full name"
                        value=full_name
                        on_input=Callback::new(move |value| full_name.set(value))
                    />
                    <TextAreaField
                        label="About you"
                        value=bio
                        on_input=Callback::new(move |value| bio.set(value))
                    />
                    <TextField
                        label="Subjects (comma separated)"
                        value=subjects
                        placeholder="algebra, physics"
                        on_input=Callback::new(move |value| subjects.set(value))
                    />
                    <Show when=move || is_tutor>
                        <TextField
                            label="Hourly rate"
                            value=hourly_rate
                            placeholder="30"
                            on_input=Callback::new(move |value| hourly_rate.set(value))
                        />
                    </Show>
                    <PrimaryButton label="Save profile" pending=pending pending_label="Saving..." />
                </form>
                <div class="bg-surface-muted border border-border rounded-lg p-4 text-sm text-fg-muted">
                    "Payouts are coming soon. Until then, settle lessons directly with your students."
                </div>
            </div>
        </Layout>
    }
}
