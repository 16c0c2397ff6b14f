pub mod client;
pub mod error;
pub mod model;

pub use client::ActivityLogApi;
pub use error::ActivityLogError;
pub use model::{ActivityEntry, NewActivityEntry};
