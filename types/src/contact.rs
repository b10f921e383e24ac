//! Contact record shared by the store and the command line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ContactId;

/// A flat contact record.
///
/// `id` is `None` until the store assigns one on creation. Update and delete
/// require it; the store rejects records without one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl Contact {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.email.is_empty() {
            write!(f, " <{}>", self.email)?;
        }
        if !self.address.is_empty() {
            write!(f, ", {}", self.address)?;
        }
        if !self.phone.is_empty() {
            write!(f, ", {}", self.phone)?;
        }
        match self.id {
            Some(id) => write!(f, " (id {id})"),
            None => write!(f, " (unsaved)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactId};

    #[test]
    fn new_contact_is_unsaved() {
        let fred = Contact::new("Fred", "Bedrock", "fred@whatever.net", "555-1212");
        assert!(fred.id.is_none());
        assert_eq!(
            fred.to_string(),
            "Fred <fred@whatever.net>, Bedrock, 555-1212 (unsaved)"
        );
    }

    #[test]
    fn display_skips_empty_fields() {
        let barney = Contact::new("Barney", "", "", "").with_id(ContactId::new(7));
        assert_eq!(barney.to_string(), "Barney (id 7)");
    }

    #[test]
    fn serde_omits_missing_id() {
        let json = serde_json::to_value(Contact::new("Wilma", "", "", "")).unwrap();
        assert!(json.get("id").is_none());

        let parsed: Contact =
            serde_json::from_value(serde_json::json!({ "id": 3, "name": "Betty" })).unwrap();
        assert_eq!(parsed.id, Some(ContactId::new(3)));
        assert_eq!(parsed.email, "");
    }
}
