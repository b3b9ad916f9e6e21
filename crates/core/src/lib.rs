//! events_widget_core - pure building blocks for the events widget.
//!
//! Filters, URL building, response decoding and rendering live here, along
//! with the capability traits the widget is given by its host.

pub mod filters;
pub mod mount;
pub mod render;
pub mod response;
pub mod transport;
pub mod url;
