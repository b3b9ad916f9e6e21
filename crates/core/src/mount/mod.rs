mod functions;
mod traits;

pub use functions::{resolve_mount, Mount, DEFAULT_CONTAINER_ID};
pub use traits::{MountElement, MountProvider};
