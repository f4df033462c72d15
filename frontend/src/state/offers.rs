use leptos::*;

use crate::api::{ApiClient, ApiError, OfferEvent, OfferResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

/// Non-blocking banner shown above the listing; replaced by the next event.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferNotice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct OffersState {
    pub offers: Vec<OfferResponse>,
    pub loading: bool,
    pub notice: Option<OfferNotice>,
}

pub fn use_offers() -> (ReadSignal<OffersState>, WriteSignal<OffersState>) {
    create_signal(OffersState::default())
}

/// Remove an offer by id. Idempotent: removing an id that is no longer
/// present is a no-op, which is what lets the optimistic-claim path and the
/// broadcast path converge in either arrival order.
pub fn remove_offer(offers: &mut Vec<OfferResponse>, offer_id: &str) -> Option<OfferResponse> {
    let index = offers.iter().position(|offer| offer.id == offer_id)?;
    Some(offers.remove(index))
}

/// One authoritative fetch of the open listing. A failed fetch leaves no
/// stale partial state behind: the list is cleared and the error returned.
pub async fn load_open_offers(
    api: &ApiClient,
    set_state: WriteSignal<OffersState>,
) -> Result<(), ApiError> {
    let _ = set_state.try_update(|state| state.loading = true);
    match api.get_open_offers().await {
        Ok(offers) => {
            let _ = set_state.try_update(|state| {
                state.offers = offers;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            let _ = set_state.try_update(|state| {
                state.offers.clear();
                state.loading = false;
            });
            Err(error)
        }
    }
}

/// Fold a push event into the local listing. Uses `try_update` so an event
/// that arrives after the owning view was torn down is silently dropped.
pub fn apply_offer_event(set_state: WriteSignal<OffersState>, event: OfferEvent) {
    match event {
        OfferEvent::Claimed {
            offer_id,
            claimed_by_label,
        } => {
            let _ = set_state.try_update(|state| {
                if let Some(removed) = remove_offer(&mut state.offers, &offer_id) {
                    state.notice = Some(OfferNotice {
                        kind: NoticeKind::Info,
                        message: format!(
                            "\"{}\" was just claimed by {}.",
                            removed.subject, claimed_by_label
                        ),
                    });
                }
            });
        }
    }
}

/// Local-initiator claim. On success the offer is removed right away; on
/// failure the listing is left untouched and the caller surfaces the error —
/// the server's own broadcast will converge the list either way.
pub async fn claim_offer(
    api: &ApiClient,
    set_state: WriteSignal<OffersState>,
    offer_id: String,
) -> Result<(), ApiError> {
    api.claim_offer(&offer_id).await?;
    let _ = set_state.try_update(|state| {
        if let Some(removed) = remove_offer(&mut state.offers, &offer_id) {
            state.notice = Some(OfferNotice {
                kind: NoticeKind::Success,
                message: format!("You claimed \"{}\".", removed.subject),
            });
        }
    });
    Ok(())
}

pub fn dismiss_notice(set_state: WriteSignal<OffersState>) {
    let _ = set_state.try_update(|state| state.notice = None);
}
