pub mod entry;
pub mod error;
pub mod payload;
pub mod period;
pub mod range;
pub mod snapshot;

pub use entry::*;
pub use error::*;
pub use payload::*;
pub use period::*;
pub use range::*;
pub use snapshot::*;
