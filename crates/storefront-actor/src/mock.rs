//! # Mock Framework & Testing Guide
//!
//! The `MockClient<C>` type hands out a real `CollectionClient<C>`, but the requests it
//! sends are answered from a queue of expectations instead of by an actor. It lets you
//! test code that *uses* a collection (a client wrapper, or another actor's admission
//! hook) without the collection's real contents.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | Scripted replies | Real ordered items |
//! | **Use Case** | Logic *around* the client | The collection itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires a dead actor |
//!
//! ## Testing Strategies
//!
//! 0. **Client logic test (pure mock)**: a wrapper client over `mock.client()`.
//! 1. **Single actor test**: spawn one `CollectionActor` with a `()` context.
//! 2. **Actor with mocked dependencies**: spawn the real actor under test and pass
//!    clients built from mocks as its context. See `tests/cart_actor_test.rs` in the
//!    `storefront` crate, where the real cart resolves ids against a mocked catalog.
//! 3. **Full system**: `Storefront::new` and the public clients.
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_actor::mock::MockClient;
//! use storefront_actor::{Collection, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct Names;
//! #[derive(Debug, thiserror::Error)]
//! #[error("never")]
//! struct Never;
//!
//! #[async_trait]
//! impl Collection for Names {
//!     type Item = Arc<String>; type Key = String; type Append = String;
//!     type Context = (); type Error = Never;
//!     fn key_of(item: &Arc<String>) -> &String { item }
//!     async fn admit(name: String, _: &()) -> Result<Option<Arc<String>>, Never> {
//!         Ok(Some(Arc::new(name)))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Names>::new();
//!     mock.expect_find("alice".to_string())
//!         .return_ok(Some(Arc::new("alice".to_string())));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let found = client.find("alice".to_string()).await.unwrap();
//!     assert_eq!(found.unwrap().as_str(), "alice");
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver, or use the fluent [`MockClient`] API.

use crate::client::CollectionClient;
use crate::collection::Collection;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to send for it.
enum Expectation<C: Collection> {
    Append {
        response: Result<Option<C::Item>, FrameworkError>,
    },
    AppendAndList {
        response: Result<Vec<C::Item>, FrameworkError>,
    },
    List {
        response: Result<Vec<C::Item>, FrameworkError>,
    },
    Find {
        key: C::Key,
        response: Result<Option<C::Item>, FrameworkError>,
    },
}

type Expectations<C> = Arc<Mutex<VecDeque<Expectation<C>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does
/// not match the next expectation (or a `find` for a different key) panics the mock's
/// background task, and the caller sees `FrameworkError::ActorDropped`.
pub struct MockClient<C: Collection> {
    client: CollectionClient<C>,
    expectations: Expectations<C>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<C: Collection> Default for MockClient<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Collection> MockClient<C> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<C>>(100);
        let expectations: Expectations<C> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Append { respond_to, .. },
                        Some(Expectation::Append { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::AppendAndList { respond_to, .. },
                        Some(Expectation::AppendAndList { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Find { key, respond_to },
                        Some(Expectation::Find {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "find called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<C> {
        self.client.clone()
    }

    /// Expects an `append` operation.
    pub fn expect_append(&mut self) -> AppendExpectationBuilder<C> {
        AppendExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `append_and_list` operation.
    pub fn expect_append_and_list(&mut self) -> SnapshotExpectationBuilder<C> {
        SnapshotExpectationBuilder {
            after_append: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> SnapshotExpectationBuilder<C> {
        SnapshotExpectationBuilder {
            after_append: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find` operation for `key`.
    pub fn expect_find(&mut self, key: C::Key) -> FindExpectationBuilder<C> {
        FindExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `append` expectations.
pub struct AppendExpectationBuilder<C: Collection> {
    expectations: Expectations<C>,
}

impl<C: Collection> AppendExpectationBuilder<C> {
    /// Replies with the stored item, or `None` for a declined append.
    pub fn return_ok(self, item: Option<C::Item>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Append { response: Ok(item) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Append {
                response: Err(error),
            });
    }
}

/// Builder for `list` and `append_and_list` expectations.
pub struct SnapshotExpectationBuilder<C: Collection> {
    after_append: bool,
    expectations: Expectations<C>,
}

impl<C: Collection> SnapshotExpectationBuilder<C> {
    pub fn return_ok(self, items: Vec<C::Item>) {
        self.push(Ok(items));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<C::Item>, FrameworkError>) {
        let expectation = if self.after_append {
            Expectation::AppendAndList { response }
        } else {
            Expectation::List { response }
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder<C: Collection> {
    key: C::Key,
    expectations: Expectations<C>,
}

impl<C: Collection> FindExpectationBuilder<C> {
    pub fn return_ok(self, item: Option<C::Item>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                key: self.key,
                response: Ok(item),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                key: self.key,
                response: Err(error),
            });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Instead of spawning a `CollectionActor`, the test holds the receiver and answers
/// each request itself. That makes it possible to assert the exact payload a client
/// sent before deciding what to reply.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<C: Collection>(
    buffer_size: usize,
) -> (CollectionClient<C>, mpsc::Receiver<CollectionRequest<C>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Append request
pub async fn expect_append<C: Collection>(
    receiver: &mut mpsc::Receiver<CollectionRequest<C>>,
) -> Option<(
    C::Append,
    oneshot::Sender<Result<Option<C::Item>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Append { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an AppendAndList request
pub async fn expect_append_and_list<C: Collection>(
    receiver: &mut mpsc::Receiver<CollectionRequest<C>>,
) -> Option<(
    C::Append,
    oneshot::Sender<Result<Vec<C::Item>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::AppendAndList { params, respond_to }) => {
            Some((params, respond_to))
        }
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<C: Collection>(
    receiver: &mut mpsc::Receiver<CollectionRequest<C>>,
) -> Option<oneshot::Sender<Result<Vec<C::Item>, FrameworkError>>> {
    match receiver.recv().await {
        Some(CollectionRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<C: Collection>(
    receiver: &mut mpsc::Receiver<CollectionRequest<C>>,
) -> Option<(
    C::Key,
    oneshot::Sender<Result<Option<C::Item>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Find { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        code: u32,
        text: String,
    }

    #[derive(Debug)]
    struct Notes;

    #[derive(Debug, thiserror::Error)]
    #[error("Note error")]
    struct NoteError;

    #[async_trait]
    impl Collection for Notes {
        type Item = Arc<Note>;
        type Key = u32;
        type Append = Note;
        type Context = ();
        type Error = NoteError;

        fn key_of(item: &Arc<Note>) -> &u32 {
            &item.code
        }

        async fn admit(note: Note, _ctx: &()) -> Result<Option<Arc<Note>>, NoteError> {
            Ok(Some(Arc::new(note)))
        }
    }

    fn note(code: u32, text: &str) -> Note {
        Note {
            code,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers() {
        let (client, mut receiver) = create_mock_client::<Notes>(10);

        let append_task = tokio::spawn(async move { client.append(note(7, "seven")).await });

        let (payload, responder) = expect_append(&mut receiver)
            .await
            .expect("Expected Append request");
        assert_eq!(payload.text, "seven");
        responder.send(Ok(Some(Arc::new(payload)))).unwrap();

        let stored = append_task.await.unwrap().unwrap();
        assert_eq!(stored.map(|n| n.code), Some(7));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Notes>::new();

        mock.expect_append().return_ok(Some(Arc::new(note(1, "one"))));
        mock.expect_find(1).return_ok(Some(Arc::new(note(1, "one"))));
        mock.expect_append_and_list()
            .return_ok(vec![Arc::new(note(1, "one")), Arc::new(note(2, "two"))]);
        mock.expect_list().return_ok(vec![]);

        let client = mock.client();

        let stored = client.append(note(1, "one")).await.unwrap();
        assert!(stored.is_some());

        let fetched = client.find(1).await.unwrap();
        assert_eq!(fetched.unwrap().text, "one");

        let contents = client.append_and_list(note(2, "two")).await.unwrap();
        assert_eq!(contents.len(), 2);

        assert!(client.list().await.unwrap().is_empty());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Notes>::new();
        mock.expect_list().return_ok(vec![]);

        let client = mock.client();
        let result = client.find(3).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
