//! # Wallet Provider Capability Trait
//!
//! The external wallet software (browser extension, hardware bridge) is
//! consumed through an explicit capability set instead of a shared global
//! object. The controller receives an `Arc<dyn WalletProvider>`, which keeps
//! hidden mutable state out of the session logic and lets tests and
//! diagnostics substitute a scripted implementation.

use async_trait::async_trait;

use crate::error::Result;

/// Capability set of an external wallet provider.
///
/// This trait allows for dependency injection and mocking in tests. All
/// operations are asynchronous and may involve user interaction outside this
/// system's control; none of them are cancelled or timed out by the caller.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Return the identity of an already-established wallet session, if any.
    ///
    /// `Ok(None)` means the provider is reachable but no session exists.
    async fn get_current_identity(&self) -> Result<Option<String>>;

    /// Start the provider's interactive connection flow.
    ///
    /// Resolves with the identity key of the newly established session, or
    /// `Ok(None)` if the provider completed without yielding one.
    async fn connect(&self) -> Result<Option<String>>;

    /// Tear down the provider-side session.
    async fn disconnect(&self) -> Result<()>;
}

pub mod mock {
    //! Scripted [`WalletProvider`] for tests and diagnostics.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{ProviderError, Result};

    use super::WalletProvider;

    /// A wallet provider with scripted behavior and call counters.
    ///
    /// The default instance is reachable, holds no session, and resolves
    /// `connect` without an identity. Builder methods adjust one behavior at
    /// a time; counters let tests assert how often each capability was hit.
    pub struct MockProvider {
        state: Mutex<Scripted>,
        identity_calls: AtomicUsize,
        connect_calls: AtomicUsize,
        disconnect_calls: AtomicUsize,
    }

    struct Scripted {
        stored: Option<String>,
        connect_result: Result<Option<String>>,
        identity_failure: Option<ProviderError>,
        disconnect_failure: Option<ProviderError>,
    }

    impl MockProvider {
        pub fn new() -> Self {
            Self {
                state: Mutex::new(Scripted {
                    stored: None,
                    connect_result: Ok(None),
                    identity_failure: None,
                    disconnect_failure: None,
                }),
                identity_calls: AtomicUsize::new(0),
                connect_calls: AtomicUsize::new(0),
                disconnect_calls: AtomicUsize::new(0),
            }
        }

        /// Script an already-established provider session.
        pub fn with_stored_identity(self, identity: impl Into<String>) -> Self {
            self.state.lock().unwrap().stored = Some(identity.into());
            self
        }

        /// Script `connect` to resolve with `identity`.
        pub fn with_connect_identity(self, identity: impl Into<String>) -> Self {
            self.state.lock().unwrap().connect_result = Ok(Some(identity.into()));
            self
        }

        /// Script `connect` to be cancelled by the user.
        pub fn declining(self) -> Self {
            self.state.lock().unwrap().connect_result = Err(ProviderError::Declined);
            self
        }

        /// Script every capability to fail as unreachable.
        pub fn unavailable(self) -> Self {
            let failure = ProviderError::Unavailable("provider not reachable".to_string());
            let mut state = self.state.lock().unwrap();
            state.identity_failure = Some(failure.clone());
            state.connect_result = Err(failure.clone());
            state.disconnect_failure = Some(failure);
            drop(state);
            self
        }

        /// Script only `disconnect` to fail; probe and connect stay healthy.
        pub fn failing_disconnect(self) -> Self {
            self.state.lock().unwrap().disconnect_failure =
                Some(ProviderError::Unavailable("disconnect failed".to_string()));
            self
        }

        pub fn identity_calls(&self) -> usize {
            self.identity_calls.load(Ordering::SeqCst)
        }

        pub fn connect_calls(&self) -> usize {
            self.connect_calls.load(Ordering::SeqCst)
        }

        pub fn disconnect_calls(&self) -> usize {
            self.disconnect_calls.load(Ordering::SeqCst)
        }
    }

    impl Default for MockProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl WalletProvider for MockProvider {
        async fn get_current_identity(&self) -> Result<Option<String>> {
            self.identity_calls.fetch_add(1, Ordering::SeqCst);
            let state = self.state.lock().unwrap();
            match &state.identity_failure {
                Some(failure) => Err(failure.clone()),
                None => Ok(state.stored.clone()),
            }
        }

        async fn connect(&self) -> Result<Option<String>> {
            self.connect_calls.fetch_add(1, Ordering::SeqCst);
            let mut state = self.state.lock().unwrap();
            let result = state.connect_result.clone();
            if let Ok(Some(identity)) = &result {
                // A successful interactive connect establishes the
                // provider-side session as well.
                state.stored = Some(identity.clone());
            }
            result
        }

        async fn disconnect(&self) -> Result<()> {
            self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
            let mut state = self.state.lock().unwrap();
            match state.disconnect_failure.clone() {
                // A failed disconnect leaves the provider-side session in
                // place; only the controller's local view clears.
                Some(failure) => Err(failure),
                None => {
                    state.stored = None;
                    Ok(())
                }
            }
        }
    }
}
