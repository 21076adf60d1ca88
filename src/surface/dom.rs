//! Browser document surface via `web-sys`.
//!
//! Only available with the `wasm` feature.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{RevealScope, SceneSurface, CONTAINER_ID, STAR_DONE_CLASS, STAR_ID};
use crate::error::{CardError, CardResult};

fn js_err(context: &str, value: &JsValue) -> CardError {
    CardError::surface(format!("{context}: {value:?}"))
}

/// Surface backed by the page's `Document`.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Wrap a document.
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// Wrap the current window's document.
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser window.
    pub fn from_window() -> CardResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CardError::surface("no window document"))?;
        Ok(Self::new(document))
    }

    fn element_by_id(&self, id: &str) -> CardResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| CardError::missing_element(id))
    }
}

impl SceneSurface for DomSurface {
    type Element = Element;

    fn find_marked(&self, scope: RevealScope) -> CardResult<Vec<Element>> {
        // The collection is live; copy it out before anything mutates it.
        let live = self
            .document
            .get_elements_by_class_name(&scope.class_selector());
        Ok((0..live.length()).filter_map(|i| live.item(i)).collect())
    }

    fn clear_marker(&mut self, element: &Element, scope: RevealScope) -> CardResult<()> {
        element
            .class_list()
            .remove_1(scope.marker())
            .map_err(|e| js_err("classList.remove", &e))
    }

    fn append_markup(&mut self, markup: &str) -> CardResult<()> {
        self.element_by_id(CONTAINER_ID)?
            .insert_adjacent_html("beforeend", markup)
            .map_err(|e| js_err("insertAdjacentHTML", &e))
    }

    fn mark_star_done(&mut self) -> CardResult<()> {
        self.element_by_id(STAR_ID)?
            .class_list()
            .add_1(STAR_DONE_CLASS)
            .map_err(|e| js_err("classList.add", &e))
    }
}
