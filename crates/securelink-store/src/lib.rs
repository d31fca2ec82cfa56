//! # securelink-store
//!
//! The Link Store abstraction: durable mapping from id/token to link rows,
//! owner-scoped enumeration, and the atomic view counter.
//!
//! [`store::LinkStore`] is the trait every surface talks to. Two
//! implementations exist: [`postgres::PgLinkStore`] for production and
//! [`memory::MemoryLinkStore`] for tests.

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod token;

pub use connection::DatabasePool;
pub use memory::MemoryLinkStore;
pub use postgres::PgLinkStore;
pub use store::LinkStore;
