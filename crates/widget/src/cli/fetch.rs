//! Fetch and URL command arguments.

use clap::Args;
use events_widget_core::filters::WidgetOptions;
use events_widget_core::url::QueryParams;
use serde_json::Value;

/// Filters, query parameters, and request behaviour.
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Venue identifier.
    #[arg(long)]
    pub venue: Option<String>,

    /// Publisher identifier.
    #[arg(long)]
    pub publisher: Option<String>,

    /// Free-text search.
    #[arg(long)]
    pub search: Option<String>,

    /// Extra query parameter as KEY=VALUE (repeatable, order is kept).
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Widget options as a JSON object, merged before the filter flags.
    #[arg(long, value_name = "JSON", value_parser = parse_options)]
    pub options: Option<Value>,

    /// Percent-encode filter values in the path.
    #[arg(long)]
    pub encode_path: bool,

    /// Report transport failures instead of running the error callback eagerly.
    #[arg(long)]
    pub report_errors: bool,
}

impl FetchArgs {
    /// Widget options: the `--options` object with the filter flags on top.
    pub fn widget_options(&self) -> WidgetOptions {
        let mut object = match &self.options {
            Some(Value::Object(map)) => map.clone(),
            _ => serde_json::Map::new(),
        };
        for (key, value) in [
            ("venue", &self.venue),
            ("publisher", &self.publisher),
            ("search", &self.search),
        ] {
            if let Some(value) = value {
                object.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        WidgetOptions::new(Value::Object(object))
    }

    pub fn query_params(&self) -> QueryParams {
        self.params.iter().cloned().collect()
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    Ok((key.to_string(), value.to_string()))
}

fn parse_options(s: &str) -> Result<Value, String> {
    match serde_json::from_str(s) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err("options must be a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
