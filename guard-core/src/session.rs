//! The persisted login record and the key-value store it lives in.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

pub const SESSION_STORAGE_KEY: &str = "authState";

/// Organization codes come back as either strings or numbers depending on
/// the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrgCode {
    Number(i64),
    Text(String),
}

impl fmt::Display for OrgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrgCode::Number(n) => write!(f, "{n}"),
            OrgCode::Text(s) => f.write_str(s),
        }
    }
}

impl OrgCode {
    pub fn same_as(&self, other: &OrgCode) -> bool {
        self.to_string() == other.to_string()
    }
}

/// `null` where a list or map is expected reads as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Profile fields are cached as the login flow wrote them; ids may be numbers
// or strings and any text field may be null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: Option<serde_json::Value>,
    pub name: Option<String>,
    pub code: Option<OrgCode>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_consent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_modules: Option<Vec<String>>,
    pub member: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: Option<serde_json::Value>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub organizations: Vec<Organization>,
}

/// The single blob written under [`SESSION_STORAGE_KEY`]. `Default` is the
/// logged-out shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionRecord {
    pub is_logged_in: bool,
    pub user: Option<UserProfile>,
    pub role: Option<String>,
    pub token: Option<String>,
    pub has_user_profile: Option<bool>,
    pub org_code: Option<OrgCode>,
    pub global_consent: Option<bool>,
}

impl SessionRecord {
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// The organization the session is acting for: the one whose code matches
    /// `orgCode`, else the first one on the profile.
    pub fn active_organization(&self) -> Option<&Organization> {
        let orgs = &self.user.as_ref()?.organizations;
        self.org_code
            .as_ref()
            .and_then(|code| {
                orgs.iter()
                    .find(|o| o.code.as_ref().is_some_and(|c| c.same_as(code)))
            })
            .or_else(|| orgs.first())
    }

    pub fn subscribed_modules(&self) -> Vec<String> {
        self.active_organization()
            .and_then(|o| o.subscribed_modules.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage rejected write: {0}")]
    Rejected(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Cloning shares the underlying map, like two handles on `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("malformed session record: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to encode session record: {0}")]
    Encode(#[source] serde_json::Error),
}

pub struct SessionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: SESSION_STORAGE_KEY.to_string(),
        }
    }

    pub fn read(&self) -> Result<Option<SessionRecord>, SessionError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(SessionError::Malformed)
    }

    pub fn write(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record).map_err(SessionError::Encode)?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }

    /// Overwrites the record with the logged-out shape.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.write(&SessionRecord::logged_out())
    }

    /// Bearer token of the current session. Only the `token` field has to be
    /// well formed; the rest of the record is not looked at.
    pub fn token(&self) -> Option<String> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("session storage unreadable: {e}");
                return None;
            }
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => value
                .get("token")
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string),
            Err(e) => {
                warn!("ignoring unreadable session: {e}");
                None
            }
        }
    }
}
