//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, defaults on absence)
//!     → ServiceConfig (immutable snapshot)
//!     → published via ArcSwap in store.rs
//!
//! On reload (POST /reload or file change):
//!     watcher.rs detects change / handler invokes reload
//!     → loader.rs loads new config
//!     → store.rs atomically swaps the Arc<ServiceConfig>
//!     → in-flight requests keep the snapshot they already hold
//! ```
//!
//! # Design Decisions
//! - A snapshot is immutable once published; changes require a full reload
//! - All fields have defaults so the service runs with no config file at all
//! - Readers never lock; they load one tear-free Arc pointer

pub mod loader;
pub mod schema;
pub mod store;
pub mod watcher;

pub use schema::ServiceConfig;
pub use store::ConfigStore;
