//! In-memory document used as the mount provider outside a browser.

use std::sync::{Arc, PoisonError, RwLock};

use askama::Template;
use events_widget_core::mount::{MountElement, MountProvider};
use events_widget_core::render::RenderError;

use crate::error::Result;

/// Shared handle to an element in an [`InMemoryDocument`].
///
/// Clones point at the same element, so content written through one handle is
/// visible through all of them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryElement {
    id: Option<String>,
    html: Arc<RwLock<String>>,
}

impl InMemoryElement {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            html: Arc::default(),
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self::new(Some(id.into()))
    }

    /// Whether both handles refer to the same element.
    pub fn same_element(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.html, &other.html)
    }
}

impl MountElement for InMemoryElement {
    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn inner_html(&self) -> String {
        self.html
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_inner_html(&self, html: &str) {
        let mut content = self.html.write().unwrap_or_else(PoisonError::into_inner);
        content.clear();
        content.push_str(html);
    }
}

/// A document body holding a flat list of elements.
///
/// Selectors are limited to `#id`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    body: Arc<RwLock<Vec<InMemoryElement>>>,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{{ title }}</title></head>
<body>
{% for element in elements %}<div{% if let Some(id) = element.id() %} id="{{ id }}"{% endif %}>{{ element.inner_html() }}</div>
{% endfor %}</body>
</html>
"#,
    ext = "html",
    escape = "none"
)]
struct PageTemplate<'a> {
    title: &'a str,
    elements: &'a [InMemoryElement],
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the body, as host page markup would.
    pub fn append(&self, element: InMemoryElement) {
        self.body
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(element);
    }

    /// Body elements in document order.
    pub fn elements(&self) -> Vec<InMemoryElement> {
        self.body
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.body.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the document as a standalone HTML page.
    pub fn to_html(&self, title: &str) -> Result<String> {
        let elements = self.elements();
        let page = PageTemplate {
            title,
            elements: &elements,
        };
        Ok(page.render().map_err(RenderError::from)?)
    }
}

impl MountProvider for InMemoryDocument {
    type Element = InMemoryElement;

    fn query_selector(&self, selector: &str) -> Option<InMemoryElement> {
        let id = selector.strip_prefix('#')?;
        self.body
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|element| element.id.as_deref() == Some(id))
            .cloned()
    }

    fn create_and_attach(&self, id: &str) -> InMemoryElement {
        let element = InMemoryElement::with_id(id);
        self.append(element.clone());
        tracing::debug!(id, "Created mount element");
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use events_widget_core::mount::{resolve_mount, DEFAULT_CONTAINER_ID};

    #[test]
    fn test_query_selector_by_id() {
        let document = InMemoryDocument::new();
        document.append(InMemoryElement::with_id("agenda"));

        assert!(document.query_selector("#agenda").is_some());
        assert!(document.query_selector("#other").is_none());
        assert!(document.query_selector("agenda").is_none());
    }

    #[test]
    fn test_clones_share_content() {
        let element = InMemoryElement::with_id("events");
        let handle = element.clone();
        handle.set_inner_html("<p>hi</p>");

        assert_eq!(element.inner_html(), "<p>hi</p>");
        assert!(element.same_element(&handle));
    }

    #[test]
    fn test_set_inner_html_replaces_content() {
        let element = InMemoryElement::default();
        element.set_inner_html("first");
        element.set_inner_html("second");
        assert_eq!(element.inner_html(), "second");
    }

    #[test]
    fn test_resolve_without_container_attaches_one_element() {
        let document = InMemoryDocument::new();
        let element = resolve_mount(&document, None).into_element();

        assert_eq!(document.len(), 1);
        let found = document
            .query_selector(&format!("#{}", DEFAULT_CONTAINER_ID))
            .unwrap();
        assert!(found.same_element(&element));
    }

    #[test]
    fn test_resolve_with_selector_reuses_element() {
        let document = InMemoryDocument::new();
        let existing = InMemoryElement::with_id("agenda");
        document.append(existing.clone());

        let element = resolve_mount(&document, Some("#agenda")).into_element();

        assert_eq!(document.len(), 1);
        assert!(element.same_element(&existing));
    }

    #[test]
    fn test_to_html_renders_body_elements() {
        let document = InMemoryDocument::new();
        let element = document.create_and_attach("events");
        element.set_inner_html("<div>Gala</div>");
        document.append(InMemoryElement::default());

        let html = document.to_html("Events").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Events</title>"));
        assert!(html.contains(r#"<div id="events"><div>Gala</div></div>"#));
        assert!(html.contains("<div></div>"));
    }
}
