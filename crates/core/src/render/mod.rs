mod default;
mod error;
mod traits;

pub use default::{render_events, DefaultRenderer};
pub use error::RenderError;
pub use traits::Renderer;
