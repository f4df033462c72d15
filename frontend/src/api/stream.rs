use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

use crate::api::types::{ApiError, OfferEvent};

/// Handle on the live offer feed. Dropping it detaches the callbacks and
/// closes the socket, so a view model can tie the subscription's lifetime to
/// its own scope with `on_cleanup`.
pub struct OfferFeed {
    socket: WebSocket,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(ErrorEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl OfferFeed {
    pub fn connect(
        url: &str,
        on_event: impl Fn(OfferEvent) + 'static,
    ) -> Result<Self, ApiError> {
        let socket = WebSocket::new(url)
            .map_err(|_| ApiError::request_failed("Failed to open the offer feed"))?;

        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            match serde_json::from_str::<OfferEvent>(&text) {
                Ok(parsed) => on_event(parsed),
                Err(err) => log::debug!("ignoring unrecognized offer feed frame: {}", err),
            }
        });
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        // Losing the stream is not fatal: the listing simply stops updating
        // until the next full fetch.
        let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(move |_event: ErrorEvent| {
            log::warn!("offer feed transport error; live updates paused");
        });
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            log::warn!("offer feed closed (code {})", event.code());
        });
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }
}

impl Drop for OfferFeed {
    fn drop(&mut self) {
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);
        let _ = self.socket.close();
    }
}
