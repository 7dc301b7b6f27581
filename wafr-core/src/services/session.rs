//! Session service - agent authentication and session persistence
//!
//! Holds the currently authenticated agent identity and mirrors it into
//! the durable session slot so it survives a restart. Exactly one demo
//! credential pair authenticates; signup synthesizes identities without
//! storing them anywhere.

use std::sync::{Arc, Mutex};

use tracing::warn;
use uuid::Uuid;

use crate::adapters::mock::Latency;
use crate::domain::result::{Error, Result};
use crate::domain::AgentIdentity;
use crate::ports::SessionStorage;

/// The one reserved demo account
pub const DEMO_EMAIL: &str = "agent@wafr.com";
const DEMO_PASSWORD: &str = "password";
const DEMO_AGENT_ID: &str = "agent1";
const DEMO_AGENT_NAME: &str = "WafR Agent";

const LOGIN_DELAY_MS: u64 = 800;
const SIGNUP_DELAY_MS: u64 = 1000;
const LOGOUT_DELAY_MS: u64 = 300;
const RESET_DELAY_MS: u64 = 1200;

/// Session service for agent authentication
///
/// State machine: anonymous --login ok--> authenticated --logout-->
/// anonymous. A failed login leaves the state anonymous.
pub struct SessionService {
    storage: Arc<dyn SessionStorage>,
    current: Mutex<Option<AgentIdentity>>,
    latency: Latency,
}

impl SessionService {
    /// Create the service, restoring any previously persisted session
    ///
    /// A missing, unreadable or malformed slot yields an anonymous
    /// session; a corrupt session must never block startup.
    pub fn new(storage: Arc<dyn SessionStorage>, latency: Latency) -> Self {
        let current = Self::restore(storage.as_ref());
        Self {
            storage,
            current: Mutex::new(current),
            latency,
        }
    }

    fn restore(storage: &dyn SessionStorage) -> Option<AgentIdentity> {
        let raw = match storage.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("failed to read persisted session, starting anonymous: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<AgentIdentity>(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("discarding malformed persisted session: {}", e);
                if let Err(e) = storage.clear() {
                    warn!("failed to clear malformed session slot: {}", e);
                }
                None
            }
        }
    }

    /// Authenticate with the fixed demo credential pair
    ///
    /// On success the identity is persisted and becomes the current
    /// session; any other pair fails with `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AgentIdentity> {
        self.latency.simulate(LOGIN_DELAY_MS).await;

        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return Err(Error::InvalidCredentials);
        }

        let identity = AgentIdentity::issue(DEMO_AGENT_ID, DEMO_AGENT_NAME, DEMO_EMAIL);
        self.storage.save(&serde_json::to_string(&identity)?)?;
        *self.current.lock().unwrap() = Some(identity.clone());
        Ok(identity)
    }

    /// Register a new agent account
    ///
    /// The reserved demo email fails with `EmailInUse`; any other email
    /// succeeds with a freshly generated identifier and token. Signup
    /// neither persists nor signs in the new identity.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<AgentIdentity> {
        self.latency.simulate(SIGNUP_DELAY_MS).await;

        if email == DEMO_EMAIL {
            return Err(Error::EmailInUse);
        }

        Ok(AgentIdentity::issue(
            format!("agent-{}", Uuid::new_v4()),
            name,
            email,
        ))
    }

    /// End the current session
    ///
    /// Best-effort: a failure to remove the persisted entry is logged,
    /// never surfaced.
    pub async fn logout(&self) {
        self.latency.simulate(LOGOUT_DELAY_MS).await;

        *self.current.lock().unwrap() = None;
        if let Err(e) = self.storage.clear() {
            warn!("failed to clear persisted session on logout: {}", e);
        }
    }

    /// Request a password reset email
    ///
    /// Always succeeds; the mock backend sends nothing.
    pub async fn reset_password(&self, _email: &str) -> Result<()> {
        self.latency.simulate(RESET_DELAY_MS).await;
        Ok(())
    }

    /// The currently authenticated identity, if any
    pub fn current(&self) -> Option<AgentIdentity> {
        self.current.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemorySessionStorage;

    fn service_with(storage: MemorySessionStorage) -> SessionService {
        SessionService::new(Arc::new(storage), Latency::none())
    }

    #[tokio::test]
    async fn test_login_with_demo_credentials_succeeds() {
        let service = service_with(MemorySessionStorage::new());

        let identity = service.login(DEMO_EMAIL, "password").await.unwrap();
        assert_eq!(identity.email, DEMO_EMAIL);
        assert_eq!(identity.role, "agent");
        assert!(service.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_fails_and_stays_anonymous() {
        let service = service_with(MemorySessionStorage::new());

        let err = service.login(DEMO_EMAIL, "wrong").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_persists_identity() {
        let storage = Arc::new(MemorySessionStorage::new());
        let service = SessionService::new(Arc::clone(&storage) as Arc<dyn SessionStorage>, Latency::none());

        service.login(DEMO_EMAIL, "password").await.unwrap();

        let raw = storage.load().unwrap().expect("identity persisted");
        let stored: AgentIdentity = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.email, DEMO_EMAIL);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_slot() {
        let storage = Arc::new(MemorySessionStorage::new());
        let service = SessionService::new(Arc::clone(&storage) as Arc<dyn SessionStorage>, Latency::none());

        service.login(DEMO_EMAIL, "password").await.unwrap();
        service.logout().await;

        assert!(!service.is_authenticated());
        assert!(storage.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_signup_with_reserved_email_fails() {
        let service = service_with(MemorySessionStorage::new());

        let err = service.signup("Someone", DEMO_EMAIL, "pw").await.unwrap_err();
        assert!(matches!(err, Error::EmailInUse));
    }

    #[tokio::test]
    async fn test_signup_generates_distinct_ids() {
        let service = service_with(MemorySessionStorage::new());

        let a = service.signup("A", "a@example.com", "pw").await.unwrap();
        let b = service.signup("B", "b@example.com", "pw").await.unwrap();
        assert!(a.id.starts_with("agent-"));
        assert_ne!(a.id, b.id);
        // Signup does not sign in
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_from_valid_slot() {
        let identity = AgentIdentity::issue("agent1", "WafR Agent", DEMO_EMAIL);
        let storage = MemorySessionStorage::with_value(serde_json::to_string(&identity).unwrap());

        let service = service_with(storage);
        assert_eq!(service.current().unwrap().id, "agent1");
    }

    #[tokio::test]
    async fn test_restore_from_corrupt_slot_is_anonymous() {
        let storage = Arc::new(MemorySessionStorage::with_value("{not json"));
        let service = SessionService::new(Arc::clone(&storage) as Arc<dyn SessionStorage>, Latency::none());

        assert!(!service.is_authenticated());
        // The corrupt value is discarded, not left to fail the next start
        assert!(storage.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset_password_always_succeeds() {
        let service = service_with(MemorySessionStorage::new());
        service.reset_password("anyone@example.com").await.unwrap();
    }
}
