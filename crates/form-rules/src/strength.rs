//! Password Strength
//!
//! One point per satisfied composition requirement, five in total.

/// Composition requirements, in the order they are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

const SPECIAL_CHARS: &str = "@$!%*?&";

impl Requirement {
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Lowercase,
        Requirement::Uppercase,
        Requirement::Digit,
        Requirement::Special,
    ];

    pub fn is_met(self, password: &str) -> bool {
        match self {
            Requirement::Length => password.chars().count() >= 8,
            Requirement::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Requirement::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Requirement::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Requirement::Special => password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Requirement::Length => "at least 8 characters",
            Requirement::Lowercase => "lowercase letter",
            Requirement::Uppercase => "uppercase letter",
            Requirement::Digit => "number",
            Requirement::Special => "special character",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "password-strength weak",
            StrengthLevel::Medium => "password-strength medium",
            StrengthLevel::Strong => "password-strength strong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub missing: Vec<Requirement>,
}

impl PasswordStrength {
    /// `None` for an empty password (the indicator is cleared)
    pub fn assess(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        let missing: Vec<Requirement> = Requirement::ALL
            .into_iter()
            .filter(|req| !req.is_met(password))
            .collect();
        Some(Self {
            score: (Requirement::ALL.len() - missing.len()) as u8,
            missing,
        })
    }

    pub fn level(&self) -> StrengthLevel {
        match self.score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    /// Indicator text
    pub fn summary(&self) -> String {
        let missing = self
            .missing
            .iter()
            .map(|req| req.describe())
            .collect::<Vec<_>>()
            .join(", ");
        match self.level() {
            StrengthLevel::Weak => format!("Weak - Missing: {missing}"),
            StrengthLevel::Medium => format!("Medium - Missing: {missing}"),
            StrengthLevel::Strong => "Strong password! ✓".to_string(),
        }
    }
}
