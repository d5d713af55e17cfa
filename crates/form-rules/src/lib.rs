//! Form Rules
//!
//! Declarative validation for the registration form.
//! One static rule per field, interpreted by a single ordered pipeline,
//! plus the password confirmation check and the strength heuristic.

mod field;
mod rules;
mod strength;
mod validate;

pub use field::{FieldName, FieldStatus, FieldValue};
pub use rules::{rule_for, Constraint, Rule};
pub use strength::{PasswordStrength, Requirement, StrengthLevel};
pub use validate::{check_confirmation, validate, ValidationError};
