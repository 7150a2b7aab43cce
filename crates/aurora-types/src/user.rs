use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::id::UserId;
use crate::profile::Profile;

/// One person in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub id: UserId,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "crate::lenient::record")]
    pub profile: Profile,
}

impl User {
    /// A record with an empty profile.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            profile: Profile::default(),
        }
    }

    /// `"<first> <last>"` from the basic sub-record, or `None` when both are blank.
    pub fn composed_name(&self) -> Option<String> {
        let basic = &self.profile.basic;
        let full = format!("{} {}", basic.first_name.trim(), basic.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }
}

/// Decode a serialized collection.
///
/// Only a non-array is an error. Entries that are not objects are skipped,
/// and fields with unexpected types read as empty.
pub fn users_from_json(raw: &str) -> Result<Vec<User>> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    let mut users = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_object() {
            users.push(serde_json::from_value(entry)?);
        }
    }
    Ok(users)
}

/// Encode a collection as a compact JSON array.
pub fn users_to_json(users: &[User]) -> Result<String> {
    Ok(serde_json::to_string(users)?)
}
