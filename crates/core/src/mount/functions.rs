use super::{MountElement, MountProvider};

/// Id given to the container created when no existing element is used.
pub const DEFAULT_CONTAINER_ID: &str = "events";

/// Outcome of mount resolution.
#[derive(Debug)]
pub enum Mount<E> {
    /// The selector matched an element already in the document.
    Existing(E),
    /// A new element was created and attached to the body.
    Created(E),
}

impl<E: MountElement> Mount<E> {
    pub fn into_element(self) -> E {
        match self {
            Self::Existing(element) | Self::Created(element) => element,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Resolves the mount element for a widget.
///
/// Uses the element matching `container` when there is one, otherwise creates a
/// new element with id [`DEFAULT_CONTAINER_ID`] in the document body.
pub fn resolve_mount<P: MountProvider + ?Sized>(
    provider: &P,
    container: Option<&str>,
) -> Mount<P::Element> {
    match container.and_then(|selector| provider.query_selector(selector)) {
        Some(element) => Mount::Existing(element),
        None => Mount::Created(provider.create_and_attach(DEFAULT_CONTAINER_ID)),
    }
}
