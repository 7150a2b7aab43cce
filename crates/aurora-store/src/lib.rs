//! Persistence for the aurora people directory.
//!
//! The collection is stored as a single JSON array under one key of a
//! key-value [`Storage`] medium. [`UserStore`] reads and writes that blob;
//! [`UserRepository`] layers list/get/upsert/delete on top and seeds demo
//! records the first time nothing usable is stored.

pub mod error;
mod repository;
mod seed;
pub mod storage;
mod user_store;

pub use error::{Error, Result};
pub use repository::UserRepository;
pub use seed::demo_users;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use user_store::{DEFAULT_STORAGE_KEY, UserStore};
