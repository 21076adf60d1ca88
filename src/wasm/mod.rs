//! Browser entry point.
//!
//! The page loads the module and calls one export:
//!
//! ```text
//! <script type="module">import init, { initChristmasCard } from './pkg/tinsel.js'; init().then(initChristmasCard);</script>
//! ```
//!
//! Each timeline entry gets its own `setTimeout`; every callback advances the
//! shared controller to its own offset, which fires that entry (and any
//! earlier one a late timer has not fired yet) exactly once.
//!
//! Log events (cap hits, failed actions) go to the browser console.

mod console;

pub use console::{init_console_tracing, ConsoleMakeWriter, ConsoleWriter};

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::CardConfig;
use crate::engine::SceneTime;
use crate::error::CardError;
use crate::scene::{SceneController, TIMELINE};
use crate::surface::DomSurface;

fn to_js(err: &CardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn start(config: &CardConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_console_tracing();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let surface = DomSurface::from_window().map_err(|e| to_js(&e))?;
    let controller = Rc::new(RefCell::new(SceneController::new(surface, config)));

    for (offset, _) in TIMELINE {
        let controller = Rc::clone(&controller);
        let callback = Closure::once_into_js(move || {
            let result = controller
                .borrow_mut()
                .advance_to(SceneTime::from_millis(offset));
            if let Err(e) = result {
                tracing::error!(error = %e, "scene action failed");
            }
        });

        let delay = i32::try_from(offset).unwrap_or(i32::MAX);
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay,
        )?;
    }

    Ok(())
}

/// Start the card with a fresh random seed - call from JavaScript.
///
/// # Errors
///
/// Returns an error outside a browser window or if a timer is rejected.
#[wasm_bindgen(js_name = initChristmasCard)]
pub fn init_christmas_card() -> Result<(), JsValue> {
    start(&CardConfig::default())
}

/// Start the card with a fixed seed, reproducing an earlier card.
///
/// # Errors
///
/// See [`init_christmas_card`].
#[wasm_bindgen(js_name = initChristmasCardWithSeed)]
pub fn init_christmas_card_with_seed(seed: u64) -> Result<(), JsValue> {
    start(&CardConfig::builder().seed(seed).build())
}
