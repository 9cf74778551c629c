//! # Session Controller
//!
//! Owns the connection state of one wallet session and mediates connect and
//! disconnect requests to the injected provider.
//!
//! ## Data Flow
//!
//! ```text
//! render surface → SessionController → WalletProvider
//!               ← watch channel      ← identity key
//! ```
//!
//! The controller is the single mutator of its session. Provider calls are
//! awaited directly; while one is in flight the channel keeps showing the
//! prior state, so the render surface stays responsive.
//!
//! ## Failure Policy
//!
//! Every provider failure is absorbed and mapped to signed-out. The two
//! failure kinds are logged at different levels (declined at `info`,
//! unavailable at `warn`) so telemetry can tell them apart, but the render
//! surface only ever sees a definite session state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use shared::utils::truncate_identity;

use crate::provider::WalletProvider;
use crate::session::WalletSession;

/// Controller for a single wallet session.
///
/// Starts in [`WalletSession::Initializing`] and leaves that state exactly
/// once, when [`probe`](Self::probe) settles. All operations return the
/// settled session snapshot so callers can await an explicit result instead
/// of wiring completion callbacks.
pub struct SessionController {
    provider: Arc<dyn WalletProvider>,
    state: watch::Sender<WalletSession>,
    probed: AtomicBool,
}

impl SessionController {
    /// Create a controller over an injected wallet provider.
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        let (state, _) = watch::channel(WalletSession::Initializing);
        Self {
            provider,
            state,
            probed: AtomicBool::new(false),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> WalletSession {
        self.state.borrow().clone()
    }

    /// Subscribe to session changes.
    ///
    /// The receiver immediately holds the current state; every transition
    /// the controller performs is observable through it.
    pub fn subscribe(&self) -> watch::Receiver<WalletSession> {
        self.state.subscribe()
    }

    /// Mount-time query for an existing provider session.
    ///
    /// Runs at most once per controller; later calls return the current
    /// session without touching the provider. Always leaves `Initializing`,
    /// even when the provider query fails or comes back empty.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> WalletSession {
        if self.probed.swap(true, Ordering::SeqCst) {
            debug!("probe already ran for this controller");
            return self.session();
        }

        let next = match self.provider.get_current_identity().await {
            Ok(identity) => WalletSession::from_identity(identity),
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "wallet probe failed");
                WalletSession::SignedOut
            }
        };

        debug!(status = next.status().label(), "wallet probe settled");
        self.state.send_replace(next.clone());
        next
    }

    /// Run the provider's interactive connection flow.
    ///
    /// No-op while already signed in (the provider is not called). The key
    /// resolved by the provider is accepted directly; failure, cancellation,
    /// or an empty key all land on signed-out.
    #[instrument(skip(self))]
    pub async fn request_connect(&self) -> WalletSession {
        if self.session().is_signed_in() {
            debug!("connect requested while already signed in");
            return self.session();
        }

        let next = match self.provider.connect().await {
            Ok(identity) => WalletSession::from_identity(identity),
            Err(err) if err.is_declined() => {
                info!("user declined the wallet connection request");
                WalletSession::SignedOut
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "wallet connect failed");
                WalletSession::SignedOut
            }
        };

        if let Some(identity) = next.identity() {
            info!(identity = %truncate_identity(identity), "wallet connected");
        }

        self.state.send_replace(next.clone());
        next
    }

    /// Tear down the session.
    ///
    /// The local state clears unconditionally, even when the provider call
    /// fails; the local view may diverge from the provider only toward
    /// signed-out, never toward a stale signed-in identity.
    #[instrument(skip(self))]
    pub async fn request_disconnect(&self) -> WalletSession {
        if let Err(err) = self.provider.disconnect().await {
            warn!(kind = err.kind(), error = %err, "provider disconnect failed, clearing local state anyway");
        }

        self.state.send_replace(WalletSession::SignedOut);
        WalletSession::SignedOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProvider;
    use shared::dto::session::SessionStatus;

    const IDENTITY: &str = "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37";
    const OTHER_IDENTITY: &str = "GAKDNFGSVSYZEDCJEXDSBSBRBENEPYYHLRFQCZRGTGQQTWPUNPUNAWBE";

    fn setup(provider: MockProvider) -> (Arc<MockProvider>, SessionController) {
        let provider = Arc::new(provider);
        let controller = SessionController::new(provider.clone());
        (provider, controller)
    }

    #[tokio::test]
    async fn test_controller_starts_initializing() {
        let (_, controller) = setup(MockProvider::new());
        assert_eq!(controller.session(), WalletSession::Initializing);
    }

    #[tokio::test]
    async fn test_probe_with_stored_identity_signs_in() {
        // Arrange
        let (_, controller) = setup(MockProvider::new().with_stored_identity(IDENTITY));

        // Act
        let session = controller.probe().await;

        // Assert
        assert!(session.is_signed_in());
        assert_eq!(session.identity(), Some(IDENTITY));
        assert_eq!(controller.session(), session);
    }

    #[tokio::test]
    async fn test_probe_without_identity_signs_out() {
        let (_, controller) = setup(MockProvider::new());

        let session = controller.probe().await;

        assert_eq!(session, WalletSession::SignedOut);
    }

    #[tokio::test]
    async fn test_probe_with_blank_identity_signs_out() {
        let (_, controller) = setup(MockProvider::new().with_stored_identity("  "));

        let session = controller.probe().await;

        assert_eq!(session, WalletSession::SignedOut);
    }

    #[tokio::test]
    async fn test_probe_failure_never_sticks_on_initializing() {
        let (_, controller) = setup(MockProvider::new().unavailable());

        let session = controller.probe().await;

        // Soft failure: an unreachable provider reads as signed-out.
        assert_eq!(session, WalletSession::SignedOut);
        assert_ne!(controller.session().status(), SessionStatus::Initializing);
    }

    #[tokio::test]
    async fn test_probe_queries_provider_at_most_once() {
        let (provider, controller) = setup(MockProvider::new().with_stored_identity(IDENTITY));

        let first = controller.probe().await;
        let second = controller.probe().await;

        assert_eq!(provider.identity_calls(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_connect_success_signs_in() {
        // Arrange
        let (_, controller) = setup(MockProvider::new().with_connect_identity(IDENTITY));
        controller.probe().await;

        // Act
        let session = controller.request_connect().await;

        // Assert
        assert!(session.is_signed_in());
        assert_eq!(session.identity(), Some(IDENTITY));
    }

    #[tokio::test]
    async fn test_connect_resolving_empty_signs_out() {
        let (_, controller) = setup(MockProvider::new());
        controller.probe().await;

        let session = controller.request_connect().await;

        assert_eq!(session, WalletSession::SignedOut);
    }

    #[tokio::test]
    async fn test_connect_declined_stays_signed_out() {
        let (_, controller) = setup(MockProvider::new().declining());
        controller.probe().await;

        let session = controller.request_connect().await;

        assert_eq!(session, WalletSession::SignedOut);
    }

    #[tokio::test]
    async fn test_connect_unavailable_stays_signed_out() {
        let (_, controller) = setup(MockProvider::new().unavailable());
        controller.probe().await;

        let session = controller.request_connect().await;

        assert_eq!(session, WalletSession::SignedOut);
    }

    #[tokio::test]
    async fn test_connect_is_noop_while_signed_in() {
        // Arrange: probe establishes the signed-in session
        let (provider, controller) = setup(
            MockProvider::new()
                .with_stored_identity(IDENTITY)
                .with_connect_identity(OTHER_IDENTITY),
        );
        controller.probe().await;

        // Act
        let session = controller.request_connect().await;

        // Assert: provider untouched, identity unchanged
        assert_eq!(provider.connect_calls(), 0);
        assert_eq!(session.identity(), Some(IDENTITY));
    }

    #[tokio::test]
    async fn test_disconnect_clears_session() {
        let (provider, controller) = setup(MockProvider::new().with_stored_identity(IDENTITY));
        controller.probe().await;
        assert!(controller.session().is_signed_in());

        let session = controller.request_disconnect().await;

        assert_eq!(session, WalletSession::SignedOut);
        assert_eq!(provider.disconnect_calls(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_clears_even_when_provider_fails() {
        let (_, controller) = setup(
            MockProvider::new()
                .with_stored_identity(IDENTITY)
                .failing_disconnect(),
        );
        controller.probe().await;
        assert!(controller.session().is_signed_in());

        let session = controller.request_disconnect().await;

        // Divergence from the provider is allowed only toward signed-out.
        assert_eq!(session, WalletSession::SignedOut);
        assert!(controller.session().identity().is_none());
    }

    #[tokio::test]
    async fn test_disconnect_is_idempotent() {
        let (_, controller) = setup(MockProvider::new().with_stored_identity(IDENTITY));
        controller.probe().await;

        let once = controller.request_disconnect().await;
        let twice = controller.request_disconnect().await;

        assert_eq!(once, twice);
        assert_eq!(twice, WalletSession::SignedOut);
    }

    #[tokio::test]
    async fn test_subscriber_observes_probe_transition() {
        let (_, controller) = setup(MockProvider::new().with_stored_identity(IDENTITY));
        let mut updates = controller.subscribe();
        assert_eq!(*updates.borrow_and_update(), WalletSession::Initializing);

        controller.probe().await;

        updates.changed().await.unwrap();
        let session = updates.borrow_and_update().clone();
        assert_eq!(session.status(), SessionStatus::SignedIn);
        assert_eq!(session.identity(), Some(IDENTITY));
    }

    #[tokio::test]
    async fn test_subscriber_observes_full_lifecycle() {
        // Arrange: no stored session, connect resolves an identity
        let (_, controller) = setup(MockProvider::new().with_connect_identity(IDENTITY));
        let mut updates = controller.subscribe();
        updates.borrow_and_update();

        // Act + Assert: probe lands on signed-out
        controller.probe().await;
        updates.changed().await.unwrap();
        assert_eq!(
            updates.borrow_and_update().status(),
            SessionStatus::SignedOut
        );

        // connect lands on signed-in
        controller.request_connect().await;
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().status(), SessionStatus::SignedIn);

        // disconnect lands back on signed-out
        controller.request_disconnect().await;
        updates.changed().await.unwrap();
        assert_eq!(
            updates.borrow_and_update().status(),
            SessionStatus::SignedOut
        );
    }
}
