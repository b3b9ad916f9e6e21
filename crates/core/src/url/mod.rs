mod path;
mod query;

pub use path::{ApiPath, PathEncoding};
pub use query::{encode_query, QueryParams};

use crate::filters::Filters;

/// Base address of the public events API.
pub const DEFAULT_API_URL: &str = "https://iasievents.ro/api/events/";

/// Builds the request URL: `base`, the filter path segment, `?`, then the
/// encoded query string.
///
/// The `?` is always present, even when there are no query parameters.
///
/// # Examples
///
/// ```
/// use events_widget_core::filters::{Filters, WidgetOptions};
/// use events_widget_core::url::{build_url, PathEncoding, QueryParams};
/// use serde_json::json;
///
/// let filters = Filters::merge(&WidgetOptions::new(json!({"venue": "ateneu"})));
/// let params = QueryParams::new().with("limit", "5");
/// assert_eq!(
///     build_url("https://example.org/api/", &filters, &params, PathEncoding::Raw),
///     "https://example.org/api/venue/ateneu/?limit=5"
/// );
/// ```
pub fn build_url(
    base: &str,
    filters: &Filters,
    params: &QueryParams,
    encoding: PathEncoding,
) -> String {
    let path = ApiPath::select(filters);
    format!(
        "{}{}?{}",
        base,
        path.segment(encoding),
        encode_query(params)
    )
}
