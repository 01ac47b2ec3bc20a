//! Form state holders.
//!
//! DESIGN
//! ======
//! Every form keeps raw string input keyed by field name so views can bind
//! inputs generically from [`Form::FIELDS`]. Typed conversion happens once,
//! at submit time, in [`Form::to_request`].

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::error::FormError;
use crate::types::{LoanRequest, LoginRequest, NewItemRequest, ReturnRequest};

/// How a field is rendered and converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// Parsed as a whole number on submit.
    Integer,
    /// Free text with the known shop locations offered as suggestions.
    Location,
}

/// Static description of one form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec { name, label, kind, required }
}

/// A mapping from field name to string input with a typed submit payload.
pub trait Form: Clone + Default {
    type Request;

    const FIELDS: &'static [FieldSpec];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Convert the current input into a request payload.
    ///
    /// # Errors
    ///
    /// [`FormError`] for a blank required field or a non-numeric integer field.
    fn to_request(&self) -> Result<Self::Request, FormError>;

    /// Store `value` under `name`. Returns `false` for an unknown field.
    fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Back to empty defaults.
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_blank(&self) -> bool {
        Self::FIELDS.iter().all(|spec| self.field(spec.name).is_none_or(|v| v.trim().is_empty()))
    }
}

fn required(value: &str, label: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(label));
    }
    Ok(trimmed.to_owned())
}

fn integer(value: &str, label: &'static str) -> Result<i64, FormError> {
    required(value, label)?.parse::<i64>().map_err(|_| FormError::NotANumber(label))
}

fn integer_or_zero(value: &str, label: &'static str) -> Result<i64, FormError> {
    if value.trim().is_empty() {
        return Ok(0);
    }
    integer(value, label)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

// =============================================================
// Login
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Form for LoginForm {
    type Request = LoginRequest;

    const FIELDS: &'static [FieldSpec] = &[
        field("email", "Email", FieldKind::Email, true),
        field("password", "Password", FieldKind::Password, true),
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }

    fn to_request(&self) -> Result<LoginRequest, FormError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        Ok(LoginRequest { email, password: self.password.clone() })
    }
}

// =============================================================
// Loan
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub item_id: String,
    pub quantity: String,
    pub to_location: String,
}

impl Form for LoanForm {
    type Request = LoanRequest;

    const FIELDS: &'static [FieldSpec] = &[
        field("item_id", "Item ID", FieldKind::Integer, true),
        field("quantity", "Quantity", FieldKind::Integer, true),
        field("to_location", "To location", FieldKind::Location, true),
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "item_id" => Some(&self.item_id),
            "quantity" => Some(&self.quantity),
            "to_location" => Some(&self.to_location),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "item_id" => Some(&mut self.item_id),
            "quantity" => Some(&mut self.quantity),
            "to_location" => Some(&mut self.to_location),
            _ => None,
        }
    }

    fn to_request(&self) -> Result<LoanRequest, FormError> {
        Ok(LoanRequest {
            item_id: integer(&self.item_id, "Item ID")?,
            quantity: integer(&self.quantity, "Quantity")?,
            to_location: required(&self.to_location, "To location")?,
        })
    }
}

// =============================================================
// Return
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReturnForm {
    pub item_id: String,
    pub quantity: String,
    pub from_location: String,
}

impl Form for ReturnForm {
    type Request = ReturnRequest;

    const FIELDS: &'static [FieldSpec] = &[
        field("item_id", "Item ID", FieldKind::Integer, true),
        field("quantity", "Quantity", FieldKind::Integer, true),
        field("from_location", "From location", FieldKind::Location, true),
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "item_id" => Some(&self.item_id),
            "quantity" => Some(&self.quantity),
            "from_location" => Some(&self.from_location),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "item_id" => Some(&mut self.item_id),
            "quantity" => Some(&mut self.quantity),
            "from_location" => Some(&mut self.from_location),
            _ => None,
        }
    }

    fn to_request(&self) -> Result<ReturnRequest, FormError> {
        Ok(ReturnRequest {
            item_id: integer(&self.item_id, "Item ID")?,
            quantity: integer(&self.quantity, "Quantity")?,
            from_location: required(&self.from_location, "From location")?,
        })
    }
}

// =============================================================
// New item
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewItemForm {
    pub item: String,
    pub quantity: String,
    pub reserved: String,
    pub sku: String,
    pub vendor: String,
    pub paper_finish: String,
    pub paper_weight: String,
    pub size: String,
    pub color: String,
    pub location: String,
}

impl Form for NewItemForm {
    type Request = NewItemRequest;

    const FIELDS: &'static [FieldSpec] = &[
        field("item", "Item name", FieldKind::Text, true),
        field("quantity", "Quantity", FieldKind::Integer, true),
        field("reserved", "Reserved", FieldKind::Integer, false),
        field("sku", "SKU", FieldKind::Text, false),
        field("vendor", "Vendor", FieldKind::Text, false),
        field("paper_finish", "Paper finish", FieldKind::Text, false),
        field("paper_weight", "Paper weight", FieldKind::Text, false),
        field("size", "Size", FieldKind::Text, false),
        field("color", "Color", FieldKind::Text, false),
        field("location", "Location", FieldKind::Location, false),
    ];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "item" => &self.item,
            "quantity" => &self.quantity,
            "reserved" => &self.reserved,
            "sku" => &self.sku,
            "vendor" => &self.vendor,
            "paper_finish" => &self.paper_finish,
            "paper_weight" => &self.paper_weight,
            "size" => &self.size,
            "color" => &self.color,
            "location" => &self.location,
            _ => return None,
        };
        Some(value)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "item" => &mut self.item,
            "quantity" => &mut self.quantity,
            "reserved" => &mut self.reserved,
            "sku" => &mut self.sku,
            "vendor" => &mut self.vendor,
            "paper_finish" => &mut self.paper_finish,
            "paper_weight" => &mut self.paper_weight,
            "size" => &mut self.size,
            "color" => &mut self.color,
            "location" => &mut self.location,
            _ => return None,
        };
        Some(value)
    }

    fn to_request(&self) -> Result<NewItemRequest, FormError> {
        Ok(NewItemRequest {
            item: required(&self.item, "Item name")?,
            quantity: integer(&self.quantity, "Quantity")?,
            reserved: integer_or_zero(&self.reserved, "Reserved")?,
            sku: optional(&self.sku),
            vendor: optional(&self.vendor),
            paper_finish: optional(&self.paper_finish),
            paper_weight: optional(&self.paper_weight),
            size: optional(&self.size),
            color: optional(&self.color),
            location: optional(&self.location),
        })
    }
}
