//! DTOs for customer endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::application::services::customer_service::MISSING_UPDATE_FIELD_MESSAGE;
use crate::domain::entities::{Contact, ContactPatch, Customer, CustomerPatch, NewCustomer};
use crate::error::AppError;

pub const MISSING_CREATE_FIELDS_MESSAGE: &str = "Missing fields in request body";

/// Request body for `POST /customers`.
///
/// Fields are optional at the serde level so that absent, `null`, and empty
/// values all surface as the same 400 instead of a decoder error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub phone: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

impl TryFrom<CreateCustomerRequest> for NewCustomer {
    type Error = AppError;

    fn try_from(req: CreateCustomerRequest) -> Result<Self, Self::Error> {
        req.validate()
            .map_err(|_| AppError::bad_request(MISSING_CREATE_FIELDS_MESSAGE))?;

        let (Some(name), Some(phone), Some(email)) = (req.name, req.phone, req.email) else {
            return Err(AppError::bad_request(MISSING_CREATE_FIELDS_MESSAGE));
        };

        Ok(NewCustomer { name, phone, email })
    }
}

/// Contact part of an update request.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Request body for `PATCH /customers/{id}`.
///
/// At least a non-empty `name` or a `contact` object must be present. An
/// empty `contact` object counts as present and changes nothing.
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_has_update_field"))]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub contact: Option<ContactRequest>,
}

fn validate_has_update_field(req: &UpdateCustomerRequest) -> Result<(), ValidationError> {
    let has_name = req.name.as_deref().is_some_and(|n| !n.is_empty());

    if has_name || req.contact.is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("missing_field")
            .with_message(MISSING_UPDATE_FIELD_MESSAGE.into()))
    }
}

impl UpdateCustomerRequest {
    /// Checks field presence, mapping failure to the update 400.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|_| AppError::bad_request(MISSING_UPDATE_FIELD_MESSAGE))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<UpdateCustomerRequest> for CustomerPatch {
    fn from(req: UpdateCustomerRequest) -> Self {
        CustomerPatch {
            name: non_empty(req.name),
            contact: req.contact.map(|c| ContactPatch {
                phone: non_empty(c.phone),
                email: non_empty(c.email),
            }),
        }
    }
}

/// Contact details as returned to clients.
#[derive(Debug, Serialize)]
pub struct ContactItem {
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<Contact> for ContactItem {
    fn from(c: Contact) -> Self {
        Self {
            phone: c.phone,
            email: c.email,
        }
    }
}

/// Customer as returned to clients.
#[derive(Debug, Serialize)]
pub struct CustomerItem {
    pub id: i64,
    pub name: String,
    pub contact: Option<ContactItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerItem {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            contact: c.contact.map(ContactItem::from),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Envelope for single-customer responses: `{"customer": {...}}`.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub customer: CustomerItem,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self { customer: c.into() }
    }
}
