//! HTML page output.

use crate::document::InMemoryDocument;
use crate::error::Result;

const PAGE_TITLE: &str = "Events";

/// Format the whole document as an HTML page.
pub fn format_page(document: &InMemoryDocument) -> Result<String> {
    document.to_html(PAGE_TITLE)
}
