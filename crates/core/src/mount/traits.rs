/// An element whose content the widget replaces with rendered markup.
pub trait MountElement: Send + Sync {
    /// Element identifier, if it has one.
    fn id(&self) -> Option<String>;

    /// Current inner markup.
    fn inner_html(&self) -> String;

    /// Replaces the inner markup.
    fn set_inner_html(&self, html: &str);
}

/// Document capability used to locate or create the mount element.
pub trait MountProvider {
    type Element: MountElement;

    /// Looks up the first element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Creates an element with the given id and appends it to the document body.
    fn create_and_attach(&self, id: &str) -> Self::Element;
}
