//! Connect metadata forwarded with `account.post`.

use std::collections::BTreeMap;

/// Header carrying URL-encoded metadata from the connect flow.
pub const CONNECT_META_HEADER: &str = "x-connect-meta";

/// Key/value pairs the caller attached when starting the connect flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectMeta(BTreeMap<String, String>);

impl ConnectMeta {
    /// Parses `k=v&k2=v2`. Undecodable pairs are kept lossily; on repeated
    /// keys the last value wins.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(
            url::form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
