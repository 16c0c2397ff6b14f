pub mod client;
pub mod error;
pub mod model;

pub use client::PickupsApi;
pub use error::PickupsError;
pub use model::{
    Coordinates, NewPickupRequest, PickupRequest, PickupStatus, Priority, RequestScope, WasteType,
};
