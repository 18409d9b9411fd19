//! Customer entity and the partial-update merge rules.

use chrono::{DateTime, Utc};

/// Contact details attached to a customer.
///
/// Both fields are nullable in storage: a contact created through a partial
/// update against a customer that had no contact may only carry one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub contact: Option<Contact>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(
        id: i64,
        name: String,
        contact: Option<Contact>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            contact,
            created_at,
            updated_at,
        }
    }

    /// Returns a copy of this customer with `patch` merged in field by field.
    ///
    /// - `name` is replaced only when the patch carries one
    /// - when the patch carries a contact, each of `phone` and `email` falls
    ///   back to the existing value if the patch omits it
    /// - a patch without a contact leaves the existing contact untouched
    /// - an empty contact patch never creates a contact
    pub fn merged(&self, patch: &CustomerPatch) -> Customer {
        let name = patch.name.clone().unwrap_or_else(|| self.name.clone());

        let contact = match (&patch.contact, &self.contact) {
            (None, existing) => existing.clone(),
            (Some(update), Some(existing)) => Some(Contact {
                phone: update.phone.clone().or_else(|| existing.phone.clone()),
                email: update.email.clone().or_else(|| existing.email.clone()),
            }),
            // No prior contact: the patch is the whole contact, if it has one.
            (Some(update), None) if update.is_empty() => None,
            (Some(update), None) => Some(Contact {
                phone: update.phone.clone(),
                email: update.email.clone(),
            }),
        };

        Customer {
            name,
            contact,
            ..self.clone()
        }
    }
}

/// Input data for creating a new customer.
///
/// All three fields are required; presence is checked at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Partial update for the contact of a customer.
///
/// `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactPatch {
    /// Returns true if neither field is set.
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// Partial update for an existing customer.
///
/// `None` fields are left unchanged. Empty strings are normalised to `None`
/// when the patch is built from a request, so they never overwrite data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub contact: Option<ContactPatch>,
}

impl CustomerPatch {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact.is_none()
    }
}
