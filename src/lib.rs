//! Collection, wishlist, search and deep-link core for a collectible-figure shelf.
//!
//! # Examples
//!
//! In-memory usage with [`shelf::Shelf`]:
//! ```
//! use std::sync::Arc;
//!
//! use toyshelf::{
//!     catalog::Catalog,
//!     core::{OwnershipLookup, wishlist::WishlistDraft},
//!     shelf::Shelf,
//! };
//!
//! let mut shelf = Shelf::in_memory(Arc::new(Catalog::builtin()));
//! let id = shelf.add_to_wishlist(WishlistDraft::new("lemon")).expect("added");
//! assert!(shelf.move_to_collection(id));
//! assert!(shelf.collection().is_owned("lemon"));
//! assert_eq!(shelf.wishlist().count(), 0);
//! ```
//!
//! SQLite-backed usage with the background writer:
//! ```no_run
//! use std::sync::Arc;
//!
//! use toyshelf::{
//!     catalog::Catalog,
//!     config::ShelfConfig,
//!     persist::sqlite::SqliteKvStore,
//!     runtime::writer::spawn_writer,
//!     shelf::Shelf,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = ShelfConfig::default();
//! let source = SqliteKvStore::open("shelf.db").expect("open sqlite");
//! let sink = SqliteKvStore::open("shelf.db").expect("open sqlite");
//! let writer = spawn_writer(Box::new(sink), config.writer.clone());
//! let mut shelf = Shelf::open(Arc::new(Catalog::builtin()), &source, Box::new(writer.clone()), config);
//! shelf.toggle_owned("lemon");
//! writer.shutdown().await.expect("shutdown");
//! # }
//! ```

/// Compiled-in release catalog.
pub mod catalog;
/// TOML-backed configuration.
pub mod config;
/// Collection and wishlist stores.
pub mod core;
/// Key-value persistence with SQLite and in-memory backends.
pub mod persist;
/// Catalog search.
pub mod query;
/// Deep-link parsing and routing.
pub mod route;
/// Events and background writer.
pub mod runtime;
/// Facade tying the stores together.
pub mod shelf;
/// Shared primitive types and enums.
pub mod types;
