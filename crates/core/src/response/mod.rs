mod decode;
mod error;
mod types;

pub use decode::decode_response;
pub use error::ResponseError;
pub use types::{ApiPayload, EventRecord};
