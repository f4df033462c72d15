use crate::{api::UserResponse, components::layout::LoadingSpinner, state::auth::use_auth};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Tutor-only surface, e.g. claiming on the job board. Students are sent back
/// to their dashboard.
#[component]
pub fn RequireTutor(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_tutor = create_memo(move |_| is_tutor_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if !state.is_authenticated {
            "/login"
        } else if !is_tutor_user(state.user.as_ref()) {
            "/dashboard"
        } else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_tutor_children(is_authenticated.get(), is_loading.get(), is_tutor.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn is_tutor_user(user: Option<&UserResponse>) -> bool {
    user.map(|u| u.role.is_tutor()).unwrap_or(false)
}

fn should_render_tutor_children(is_authenticated: bool, is_loading: bool, is_tutor: bool) -> bool {
    is_authenticated && is_tutor && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAuth, RequireTutor};
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{student_user, tutor_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_auth_state(is_authenticated: bool, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            user: if is_authenticated {
                Some(student_user())
            } else {
                None
            },
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(false, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn require_tutor_renders_children_for_tutors() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                user: Some(tutor_user()),
                is_authenticated: true,
                loading: false,
            });
            provide_context((auth, set_auth));
            view! {
                <RequireTutor>
                    {|| view! { <div>"tutor-only"</div> }}
                </RequireTutor>
            }
        });
        assert!(html.contains("tutor-only"));
    }

    #[test]
    fn require_tutor_hides_children_for_students() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                user: Some(student_user()),
                is_authenticated: true,
                loading: false,
            });
            provide_context((auth, set_auth));
            view! {
                <RequireTutor>
                    {|| view! { <div>"tutor-only"</div> }}
                </RequireTutor>
            }
        });
        assert!(!html.contains("tutor-only"));
    }
}
