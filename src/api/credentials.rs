//! Client credentials.

use std::fmt;

/// Identifier, key and secret issued by the provider.
///
/// Immutable once built. The secret is only reachable from inside the
/// crate and is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    api_key: String,
    api_secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new("cid", "key", "super-secret");
        let debug = format!("{creds:?}");

        assert!(debug.contains("cid"));
        assert!(debug.contains("key"));
        assert!(!debug.contains("super-secret"));
    }
}
