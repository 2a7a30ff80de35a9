//! Registration form fields and their per-field validation results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fields of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Cpf,
    Name,
    Address,
    Phone,
}

impl FieldKind {
    /// All form fields, in the order they appear on screen.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Cpf,
        FieldKind::Name,
        FieldKind::Address,
        FieldKind::Phone,
    ];
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Cpf => "CPF",
            FieldKind::Name => "Nome",
            FieldKind::Address => "Endereço",
            FieldKind::Phone => "Telefone",
        };
        write!(f, "{label}")
    }
}

/// The registration form's text fields.
///
/// Created empty when the form screen is entered, mutated on every keystroke,
/// and discarded when the screen is left. Nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub cpf: String,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl FormFields {
    /// Read a field by kind.
    pub fn get(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Cpf => &self.cpf,
            FieldKind::Name => &self.name,
            FieldKind::Address => &self.address,
            FieldKind::Phone => &self.phone,
        }
    }

    /// Overwrite a field by kind.
    pub fn set(&mut self, field: FieldKind, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldKind::Cpf => self.cpf = value,
            FieldKind::Name => self.name = value,
            FieldKind::Address => self.address = value,
            FieldKind::Phone => self.phone = value,
        }
    }
}

/// Outcome of validating a single form field.
///
/// All four results are recomputed together on every Verify action; they are
/// never partially stale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidationResult {
    pub field: FieldKind,
    pub valid: bool,
    /// User-facing message: the error text when invalid, the success text
    /// when valid.
    pub message: String,
}
