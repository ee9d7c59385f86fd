//! Session Management
//!
//! The authenticated user's identity and bearer token, plus the slot the
//! token is persisted in between runs.
//!
//! ## Lifecycle
//!
//! 1. [`SessionStore::restore`] at startup reads the persisted token
//! 2. `login` sets user and token and persists the token
//! 3. `logout` clears both and the persisted slot
//! 4. `register` only creates a remote account

mod store;
mod token;

pub use store::{Session, SessionStore};
pub use token::{FileTokenStore, MemoryTokenStore, SessionError, TokenStore};
