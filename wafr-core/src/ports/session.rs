//! Session storage port - the durable key-value slot

use crate::domain::result::Result;

/// Durable storage for the serialized agent identity
///
/// One slot, read once at startup, written on login and cleared on logout.
/// The stored value is an opaque string (serialized identity); parsing and
/// validation are the session service's concern, so a corrupt slot never
/// fails here.
pub trait SessionStorage: Send + Sync {
    /// Read the stored value, `None` if the slot is empty
    fn load(&self) -> Result<Option<String>>;

    /// Write the slot, replacing any previous value
    fn save(&self, value: &str) -> Result<()>;

    /// Empty the slot (a no-op if already empty)
    fn clear(&self) -> Result<()>;
}
