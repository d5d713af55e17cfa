//! Rule Table
//!
//! Static mapping from field to its rule. Constraints are listed in the
//! order the pipeline checks them: length, then pattern, then numeric range.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::FieldName;

/// A single non-required check
#[derive(Debug)]
pub enum Constraint {
    MinLength(usize),
    MaxLength(usize),
    /// Every expression must match
    Pattern(&'static Lazy<Vec<Regex>>),
    Min(i64),
    Max(i64),
}

impl Constraint {
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Constraint::MinLength(min) => text.chars().count() >= *min,
            Constraint::MaxLength(max) => text.chars().count() <= *max,
            Constraint::Pattern(patterns) => patterns.iter().all(|re| re.is_match(text)),
            // Unparsable numbers skip the bound
            Constraint::Min(min) => leading_int(text).map_or(true, |n| n >= *min),
            Constraint::Max(max) => leading_int(text).map_or(true, |n| n <= *max),
        }
    }
}

/// Declarative rule for one field
#[derive(Debug)]
pub struct Rule {
    pub required: bool,
    pub constraints: &'static [Constraint],
    /// Shared message for every non-required failure
    pub message: &'static str,
}

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(src).expect("rule pattern is a valid regex"))
        .collect()
}

static USERNAME_PATTERN: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"^[a-zA-Z0-9_]+$"]));

static EMAIL_PATTERN: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"^[^\s@]+@[^\s@]+\.[^\s@]+$"]));

// Lookahead-free form of "has lower, upper, digit and symbol, starts with an allowed char"
static PASSWORD_PATTERN: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"[a-z]",
        r"[A-Z]",
        r"[0-9]",
        r"[@$!%*?&]",
        r"^[A-Za-z0-9@$!%*?&]",
    ])
});

static USERNAME: Rule = Rule {
    required: true,
    constraints: &[
        Constraint::MinLength(3),
        Constraint::MaxLength(20),
        Constraint::Pattern(&USERNAME_PATTERN),
    ],
    message: "Username must be 3-20 characters, letters, numbers, and underscores only",
};

static EMAIL: Rule = Rule {
    required: true,
    constraints: &[Constraint::Pattern(&EMAIL_PATTERN)],
    message: "Please enter a valid email address",
};

static PASSWORD: Rule = Rule {
    required: true,
    constraints: &[
        Constraint::MinLength(8),
        Constraint::Pattern(&PASSWORD_PATTERN),
    ],
    message: "Password must be 8+ characters with uppercase, lowercase, number, and special character",
};

static AGE: Rule = Rule {
    required: false,
    constraints: &[Constraint::Min(13), Constraint::Max(120)],
    message: "Age must be between 13 and 120",
};

static TERMS: Rule = Rule {
    required: true,
    constraints: &[],
    message: "You must agree to the terms and conditions",
};

pub fn rule_for(field: FieldName) -> &'static Rule {
    match field {
        FieldName::Username => &USERNAME,
        FieldName::Email => &EMAIL,
        FieldName::Password => &PASSWORD,
        FieldName::Age => &AGE,
        FieldName::Terms => &TERMS,
    }
}

/// Integer prefix of `text` ("25abc" -> 25), `None` when there are no digits
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}
