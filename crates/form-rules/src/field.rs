//! Form Fields
//!
//! Identifiers and raw values of the validated inputs.

/// Inputs that carry a declarative rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Email,
    Password,
    Age,
    Terms,
}

impl FieldName {
    /// Every ruled field, in submission order
    pub const ALL: [FieldName; 5] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::Age,
        FieldName::Terms,
    ];

    /// Element id (also the form data name)
    pub fn id(self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::Age => "age",
            FieldName::Terms => "terms",
        }
    }

    /// Id of the error slot paired with this field
    pub fn error_id(self) -> String {
        format!("{}-error", self.id())
    }

    /// Id with its first letter upper-cased, used in "is required" messages
    pub fn label(self) -> String {
        let mut chars = self.id().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Raw value read from an input element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text-like inputs (text, email, password, number)
    Text(&'a str),
    /// Checkbox state
    Checked(bool),
}

impl FieldValue<'_> {
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Checked(checked) => !checked,
        }
    }
}

/// Visual state of a field after its last check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    /// Class added to the input element
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Untouched => "",
            FieldStatus::Valid => "success",
            FieldStatus::Invalid => "error",
        }
    }
}
