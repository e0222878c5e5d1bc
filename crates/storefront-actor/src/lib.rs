//! # Storefront Actor
//!
//! This crate provides the building blocks for serving append-only, ordered collections
//! from Tokio actors. Each collection is owned by exactly one task; every other part of
//! the program talks to it through a cheap, cloneable client.
//!
//! ## Why an Actor per Collection?
//!
//! - Isolated state: the items live inside the actor task, nothing else can reach them
//! - Message-passing concurrency: callers on any number of tasks send requests
//! - Sequential processing: an append and a read never interleave, with no locks
//!
//! When one collection depends on another (the cart resolves product ids against the
//! catalog), the dependent actor receives the other's client as its context and awaits
//! it during admission. Requests to the dependent collection queue up meanwhile, so the
//! lookup and the append still form one uninterrupted step.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Collection Layer** ([`Collection`]) - item, key and admission rules
//! 2. **Runtime Layer** ([`CollectionActor`]) - message processing and ordering
//! 3. **Interface Layer** ([`CollectionClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run()`, not at construction time:
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_actor::{Collection, CollectionActor, CollectionClient};
//! use async_trait::async_trait;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("{0}")]
//! struct Unavailable(String);
//!
//! // Words that anyone may register.
//! #[derive(Debug)]
//! struct Dictionary;
//!
//! #[async_trait]
//! impl Collection for Dictionary {
//!     type Item = Arc<String>; type Key = String; type Append = String;
//!     type Context = (); type Error = Unavailable;
//!     fn key_of(item: &Arc<String>) -> &String { item }
//!     async fn admit(word: String, _: &()) -> Result<Option<Arc<String>>, Unavailable> {
//!         Ok(Some(Arc::new(word)))
//!     }
//! }
//!
//! // Picks that must already be in the dictionary.
//! #[derive(Debug)]
//! struct Picks;
//!
//! #[async_trait]
//! impl Collection for Picks {
//!     type Item = Arc<String>; type Key = String; type Append = String;
//!     type Context = CollectionClient<Dictionary>; type Error = Unavailable;
//!     fn key_of(item: &Arc<String>) -> &String { item }
//!     async fn admit(
//!         word: String,
//!         dictionary: &CollectionClient<Dictionary>,
//!     ) -> Result<Option<Arc<String>>, Unavailable> {
//!         dictionary.find(word).await.map_err(|e| Unavailable(e.to_string()))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (dictionary_actor, dictionary) = CollectionActor::<Dictionary>::new(10);
//!     let (picks_actor, picks) = CollectionActor::<Picks>::new(10);
//!
//!     tokio::spawn(dictionary_actor.run(()));
//!     tokio::spawn(picks_actor.run(dictionary.clone()));
//!
//!     dictionary.append("apple".to_string()).await.unwrap();
//!
//!     let known = picks.append_and_list("apple".to_string()).await.unwrap();
//!     assert_eq!(known.len(), 1);
//!
//!     // Unknown words are declined, not rejected.
//!     let unknown = picks.append("pear".to_string()).await.unwrap();
//!     assert!(unknown.is_none());
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real client's requests from scripted expectations,
//! so admission hooks and client wrappers can be tested without their dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod collection;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::ActorClient;
pub use collection::Collection;
pub use error::FrameworkError;
pub use message::{CollectionRequest, Response};
