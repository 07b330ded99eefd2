pub mod access;
pub mod config;
pub mod lifecycle;
pub mod models;

mod credentials;
pub use credentials::{default_credential_store, CredentialStore, MemoryStore};

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::LocalStorageStore;

pub use config::FleetOpsConfig;
pub use lifecycle::ReturnEstimate;
pub use models::{
    Car, CarStatus, Customer, FinancialRow, OccupancyRow, Rental, RentalStatus, ReturnOutcome,
    Role, UserInfo,
};
