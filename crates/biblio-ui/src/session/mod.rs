//! Who is logged in, surviving page reloads.
//!
//! [`SessionStore`] is the plain state container with its persistence
//! contract; [`SessionContext`] owns one store per application root and
//! mirrors it into signals for the components.

mod context;
mod storage;
mod store;

pub use context::{provide_session, use_session, SessionContext};
#[cfg(feature = "hydrate")]
pub use storage::BrowserStorage;
pub use storage::{MemoryStorage, PlatformStorage, SessionStorage, StorageError};
pub use store::{SessionStore, STORAGE_KEY};
