//! Headless in-memory document.
//!
//! A flat list of elements with ids and class lists, enough to play the
//! card's timeline without a browser. Appended markup is kept as opaque
//! fragments on the container element, in append order.

use serde::{Deserialize, Serialize};

use super::{RevealScope, SceneSurface, CONTAINER_ID, STAR_DONE_CLASS, STAR_ID};
use crate::error::{CardError, CardResult};

/// One element of a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryElement {
    /// Optional element id.
    pub id: Option<String>,
    /// Class list, in insertion order.
    pub classes: Vec<String>,
    /// Appended markup fragments.
    pub children: Vec<String>,
}

impl MemoryElement {
    /// Create an element from a space-separated class string.
    #[must_use]
    pub fn new(classes: &str) -> Self {
        Self {
            id: None,
            classes: classes.split_whitespace().map(str::to_string).collect(),
            children: Vec::new(),
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check for a single class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Check for every class in `classes`.
    #[must_use]
    pub fn has_all<S: AsRef<str>>(&self, classes: &[S]) -> bool {
        classes.iter().all(|c| self.has_class(c.as_ref()))
    }

    /// Add a class unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove every occurrence of a class.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Concatenated child markup.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.children.concat()
    }

    /// Serialize as a `div`.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut attrs = String::new();
        if let Some(id) = &self.id {
            attrs.push_str(&format!(r#" id="{id}""#));
        }
        if !self.classes.is_empty() {
            attrs.push_str(&format!(r#" class="{}""#, self.classes.join(" ")));
        }
        format!("<div{attrs}>{}</div>", self.inner_html())
    }
}

/// Headless document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySurface {
    elements: Vec<MemoryElement>,
}

impl MemorySurface {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the card's page skeleton: trunk, three tiers of branches
    /// (two halves each), star, decoration container, greeting text.
    #[must_use]
    pub fn card_skeleton() -> Self {
        let mut surface = Self::new();
        surface.push(MemoryElement::new("tree-root hidden-slide root"));
        for level in 1..=3 {
            for side in ["left", "right"] {
                surface.push(MemoryElement::new(&format!(
                    "branch {side} hidden-slide level-{level}"
                )));
            }
        }
        surface.push(MemoryElement::new("star").with_id(STAR_ID));
        surface.push(MemoryElement::new("decorations").with_id(CONTAINER_ID));
        surface.push(MemoryElement::new("greeting show-text hidden"));
        surface.push(MemoryElement::new("signature show-text hidden"));
        surface
    }

    /// Add an element; returns its index.
    pub fn push(&mut self, element: MemoryElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// All elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    /// Find an element by id.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    fn element_by_id_mut(&mut self, id: &str) -> CardResult<&mut MemoryElement> {
        self.elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .ok_or_else(|| CardError::missing_element(id))
    }

    /// Number of elements carrying every class in `classes`.
    #[must_use]
    pub fn count_with_classes(&self, classes: &[&str]) -> usize {
        self.elements.iter().filter(|e| e.has_all(classes)).count()
    }

    /// Fragments appended to `#decorate`, in append order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        self.element_by_id(CONTAINER_ID)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    /// Whether `#star` carries `done`.
    #[must_use]
    pub fn star_done(&self) -> bool {
        self.element_by_id(STAR_ID)
            .is_some_and(|e| e.has_class(STAR_DONE_CLASS))
    }

    /// Serialize the whole document, one element per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.elements
            .iter()
            .map(MemoryElement::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SceneSurface for MemorySurface {
    type Element = usize;

    fn find_marked(&self, scope: RevealScope) -> CardResult<Vec<usize>> {
        let classes = scope.classes();
        Ok(self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_all(&classes))
            .map(|(i, _)| i)
            .collect())
    }

    fn clear_marker(&mut self, element: &usize, scope: RevealScope) -> CardResult<()> {
        let target = self
            .elements
            .get_mut(*element)
            .ok_or_else(|| CardError::surface(format!("no element at index {element}")))?;
        target.remove_class(scope.marker());
        Ok(())
    }

    fn append_markup(&mut self, markup: &str) -> CardResult<()> {
        self.element_by_id_mut(CONTAINER_ID)?
            .children
            .push(markup.to_string());
        Ok(())
    }

    fn mark_star_done(&mut self) -> CardResult<()> {
        self.element_by_id_mut(STAR_ID)?.add_class(STAR_DONE_CLASS);
        Ok(())
    }
}
