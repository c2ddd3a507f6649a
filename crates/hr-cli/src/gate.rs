use crate::client::{CliClientResult, Client, ClientError};
use crate::models::SignupRequest;

use hr_auth::{AuthState, Identity, Role, SessionStore};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;

const REGISTRATION_SUCCESSFUL: &str = "Registration successful";

/// Owns the authentication state and publishes every change.
///
/// The gate is the only writer of the watch cell; views and commands hold
/// receivers. A 401 seen by the [`Client`] publishes `Unauthenticated`
/// through the eviction hook installed here.
pub struct AuthGate {
    client: Arc<Client>,
    session: SessionStore,
    state: Arc<watch::Sender<AuthState>>,
}

impl AuthGate {
    /// Create the gate and restore any persisted identity before returning.
    pub fn new(client: Arc<Client>) -> Self {
        let gate = Self::pending(client);
        gate.bootstrap();
        gate
    }

    /// Create the gate in `Bootstrapping`; call [`AuthGate::bootstrap`] later.
    pub fn pending(client: Arc<Client>) -> Self {
        let (sender, _) = watch::channel(AuthState::Bootstrapping);
        let state = Arc::new(sender);

        let evicted = Arc::clone(&state);
        client.set_eviction_hook(Arc::new(move || {
            evicted.send_replace(AuthState::Unauthenticated);
        }));

        Self {
            session: client.session().clone(),
            client,
            state,
        }
    }

    /// Rehydrate from the session store and leave the loading state.
    ///
    /// A record that cannot be read counts as no session.
    pub fn bootstrap(&self) -> AuthState {
        let next = match self.session.load_detailed() {
            Ok(loaded) => {
                if let Some(reason) = loaded.discarded {
                    warn!("Stored session was discarded: {reason}");
                }
                AuthState::from(loaded.identity)
            }
            Err(e) => {
                warn!("Could not restore session: {e}");
                AuthState::Unauthenticated
            }
        };

        info!("Auth bootstrap complete: {}", next.name());
        self.state.send_replace(next.clone());
        next
    }

    /// Authenticate against the backend, persist the identity and publish it.
    ///
    /// Logging in while already authenticated replaces the identity. A gate
    /// still bootstrapping restores its session first, so the state never
    /// jumps from `Bootstrapping` to `Authenticated`.
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Identity> {
        if self.is_loading() {
            self.bootstrap();
        }

        let response = self.client.login(email, password).await?;
        let identity = response.into_identity(email)?;

        self.session.save(&identity)?;
        info!("Signed in as {} ({})", identity.email, identity.role);
        self.state.send_replace(AuthState::Authenticated(identity.clone()));

        Ok(identity)
    }

    /// Register an account without signing in; returns the server's message.
    pub async fn signup(&self, registration: &SignupRequest) -> CliClientResult<String> {
        let reply = self.client.signup(registration).await?;
        info!("Registered {} as {}", registration.email, registration.role);

        Ok(reply
            .message
            .unwrap_or_else(|| REGISTRATION_SUCCESSFUL.to_string()))
    }

    /// Forget the identity locally and on disk. Idempotent.
    ///
    /// The in-memory identity is dropped even when the record cannot be
    /// removed; the storage error is still returned.
    pub fn logout(&self) -> CliClientResult<()> {
        let previous = self.state.send_replace(AuthState::Unauthenticated);
        if let Some(identity) = previous.identity() {
            info!("Signed out {}", identity.email);
        }

        self.session.clear().map_err(ClientError::from)
    }

    /// True iff someone is signed in and their role is in `allowed`.
    pub fn has_role(&self, allowed: &[Role]) -> bool {
        self.state.borrow().has_role(allowed)
    }

    pub fn current(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }
}
