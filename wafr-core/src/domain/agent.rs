//! Authenticated agent identity

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of random bytes behind an opaque session token
const TOKEN_BYTES: usize = 24;

/// The authenticated support agent operating the console
///
/// Note: role is a freeform string; every identity this system issues
/// carries "agent", but any string round-trips through storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Opaque session token, freshly generated per login/signup
    pub token: String,
}

impl AgentIdentity {
    /// Issue a new agent identity with a fresh opaque token
    pub fn issue(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: "agent".to_string(),
            token: generate_token(),
        }
    }
}

/// Generate an opaque session token
///
/// The token carries no verifiable claims; it only has to be unguessable
/// and distinct per issuance.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_sets_role_and_token() {
        let identity = AgentIdentity::issue("agent1", "WafR Agent", "agent@wafr.com");
        assert_eq!(identity.role, "agent");
        assert!(!identity.token.is_empty());
    }

    #[test]
    fn test_tokens_are_distinct() {
        let a = AgentIdentity::issue("agent1", "WafR Agent", "agent@wafr.com");
        let b = AgentIdentity::issue("agent1", "WafR Agent", "agent@wafr.com");
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_identity_round_trips_through_json() {
        let identity = AgentIdentity::issue("agent1", "WafR Agent", "agent@wafr.com");
        let json = serde_json::to_string(&identity).unwrap();
        let parsed: AgentIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, identity);
    }
}
