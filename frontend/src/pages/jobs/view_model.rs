use crate::api::{ApiClient, ApiError, CreateOfferRequest, OfferResponse};
use crate::pages::jobs::{repository, utils::should_subscribe};
use crate::state::auth::{use_api, use_auth};
use crate::state::offers::{claim_offer, load_open_offers, OffersState};
use leptos::*;

#[derive(Clone)]
pub struct JobsViewModel {
    pub api: ApiClient,
    pub state: (ReadSignal<OffersState>, WriteSignal<OffersState>),
    pub offers_resource: Resource<(), Result<(), ApiError>>,
    pub claim_action: Action<String, Result<(), ApiError>>,
    pub claim_error: RwSignal<Option<ApiError>>,
    pub post_action: Action<CreateOfferRequest, Result<OfferResponse, ApiError>>,
    pub post_error: RwSignal<Option<ApiError>>,
    pub post_success: RwSignal<Option<String>>,
}

impl JobsViewModel {
    pub fn new() -> Self {
        let api = use_api();
        let (auth, _) = use_auth();
        let (state, set_state) = crate::state::offers::use_offers();

        let api_for_fetch = api.clone();
        let offers_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_fetch.clone();
                async move { load_open_offers(&api, set_state).await }
            },
        );

        // The guard has already settled the auth state by the time this page
        // mounts, so the role check is a one-shot decision.
        if should_subscribe(auth.get_untracked().user.as_ref()) {
            spawn_offer_feed(api.clone(), set_state);
        }

        let api_for_claim = api.clone();
        let claim_action = create_action(move |offer_id: &String| {
            let api = api_for_claim.clone();
            let offer_id = offer_id.clone();
            async move { claim_offer(&api, set_state, offer_id).await }
        });

        let claim_error = create_rw_signal(None::<ApiError>);
        create_effect(move |_| {
            if let Some(result) = claim_action.value().get() {
                match result {
                    Ok(_) => claim_error.set(None),
                    Err(err) => claim_error.set(Some(err)),
                }
            }
        });

        let api_for_post = api.clone();
        let post_action = create_action(move |request: &CreateOfferRequest| {
            let api = api_for_post.clone();
            let request = request.clone();
            async move { repository::post_offer(&api, request).await }
        });

        let post_error = create_rw_signal(None::<ApiError>);
        let post_success = create_rw_signal(None::<String>);
        create_effect(move |_| {
            if let Some(result) = post_action.value().get() {
                match result {
                    Ok(offer) => {
                        post_error.set(None);
                        post_success.set(Some(format!(
                            "Your request \"{}\" is now on the board.",
                            offer.subject
                        )));
                    }
                    Err(err) => {
                        post_success.set(None);
                        post_error.set(Some(err));
                    }
                }
            }
        });

        Self {
            api,
            state: (state, set_state),
            offers_resource,
            claim_action,
            claim_error,
            post_action,
            post_error,
            post_success,
        }
    }
}

pub fn use_jobs_view_model() -> JobsViewModel {
    match use_context::<JobsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = JobsViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_offer_feed(api: ApiClient, set_state: WriteSignal<OffersState>) {
    use crate::api::stream::OfferFeed;
    use crate::state::offers::apply_offer_event;

    let feed_slot: StoredValue<Option<OfferFeed>> = store_value(None);
    spawn_local(async move {
        let base = crate::config::await_ws_base_url().await;
        let url = match api.bearer_token() {
            Some(token) => format!("{}/offers/feed?token={}", base, token),
            None => format!("{}/offers/feed", base),
        };
        match OfferFeed::connect(&url, move |event| apply_offer_event(set_state, event)) {
            Ok(feed) => {
                // The scope may already be gone; then the feed drops and
                // closes the socket right here.
                let _ = feed_slot.try_set_value(Some(feed));
            }
            Err(err) => log::warn!("offer feed unavailable: {}", err),
        }
    });
    on_cleanup(move || {
        let _ = feed_slot.try_update_value(|slot| {
            slot.take();
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_offer_feed(_api: ApiClient, _set_state: WriteSignal<OffersState>) {}
