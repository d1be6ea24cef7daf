//! Browser geolocation lookup for the "parishes near me" search.
//!
//! Wraps the callback-based `navigator.geolocation` API in a future. The
//! proximity search itself is delegated to the backend; this module only
//! produces a coordinate pair or a French error message for the search
//! page to display.

/// A device position fix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

pub const UNSUPPORTED_MESSAGE: &str = "Géolocalisation non supportée par votre navigateur";
pub const DENIED_MESSAGE: &str =
    "Impossible d'obtenir votre position. Veuillez autoriser la géolocalisation.";

/// Resolve the current device position once.
///
/// # Errors
///
/// A user-facing French message when geolocation is unavailable, denied,
/// or times out.
pub async fn current_position() -> Result<GeoPosition, String> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let geolocation = web_sys::window()
            .and_then(|w| w.navigator().geolocation().ok())
            .ok_or_else(|| UNSUPPORTED_MESSAGE.to_owned())?;

        let (tx, rx) = futures::channel::oneshot::channel::<Result<GeoPosition, String>>();
        // Both callbacks race for the single sender; whichever fires first wins.
        let sender = Rc::new(RefCell::new(Some(tx)));

        let success_sender = Rc::clone(&sender);
        let on_success = Closure::once(move |position: web_sys::Position| {
            if let Some(tx) = success_sender.borrow_mut().take() {
                let coords = position.coords();
                let _ = tx.send(Ok(GeoPosition {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                }));
            }
        });

        let error_sender = Rc::clone(&sender);
        let on_error = Closure::once(move |error: web_sys::PositionError| {
            log::warn!("geolocation error {}: {}", error.code(), error.message());
            if let Some(tx) = error_sender.borrow_mut().take() {
                let _ = tx.send(Err(DENIED_MESSAGE.to_owned()));
            }
        });

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|_| UNSUPPORTED_MESSAGE.to_owned())?;

        // The browser holds the callbacks until one fires; leak them to keep
        // them alive past this scope.
        on_success.forget();
        on_error.forget();

        rx.await.unwrap_or_else(|_| Err(DENIED_MESSAGE.to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(UNSUPPORTED_MESSAGE.to_owned())
    }
}
