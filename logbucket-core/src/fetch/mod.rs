mod coordinator;
mod error;
mod source;

pub use coordinator::fetch_all;
pub use error::FetchError;
pub use source::{LogSource, read_source};
