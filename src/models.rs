//! Page Models
//!
//! Fixed page content and display projections.

/// One FAQ question with its answer element id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub target: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        target: "faq-answer-1",
        question: "What does this page demonstrate?",
        answer: "Event handling in the browser: clicks, key presses, blur and submit events each update the page directly.",
    },
    FaqEntry {
        target: "faq-answer-2",
        question: "Is my theme choice remembered?",
        answer: "Yes. The light or dark choice is kept in your browser's local storage and restored on the next visit.",
    },
    FaqEntry {
        target: "faq-answer-3",
        question: "Is the registration form sent anywhere?",
        answer: "No. Validation runs entirely in the page and the dashboard only mirrors what you entered.",
    },
    FaqEntry {
        target: "faq-answer-4",
        question: "Can I use the keyboard?",
        answer: "Press Enter on a focused question to open it, and Escape to close every open answer.",
    },
];

/// Shown when age is left empty
pub const AGE_PLACEHOLDER: &str = "Not specified";

/// Dashboard view of the last successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub username: String,
    pub email: String,
    pub age: String,
    pub contact: String,
}

impl DashboardSnapshot {
    pub fn new(username: &str, email: &str, age: &str, contact: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            age: if age.is_empty() {
                AGE_PLACEHOLDER.to_string()
            } else {
                age.to_string()
            },
            contact: if contact == "email" { "Email" } else { "Phone" }.to_string(),
        }
    }

    /// (heading, value) pairs in display order
    pub fn items(&self) -> [(&'static str, &str); 4] {
        [
            ("Username", self.username.as_str()),
            ("Email", self.email.as_str()),
            ("Age", self.age.as_str()),
            ("Preferred Contact", self.contact.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_placeholders() {
        let snapshot = DashboardSnapshot::new("ferris", "ferris@rust.dev", "", "phone");
        assert_eq!(
            snapshot.items(),
            [
                ("Username", "ferris"),
                ("Email", "ferris@rust.dev"),
                ("Age", "Not specified"),
                ("Preferred Contact", "Phone"),
            ]
        );
    }

    #[test]
    fn test_dashboard_with_age_and_email_contact() {
        let snapshot = DashboardSnapshot::new("ferris", "ferris@rust.dev", "30", "email");
        assert_eq!(snapshot.age, "30");
        assert_eq!(snapshot.contact, "Email");
    }

    #[test]
    fn test_faq_targets_are_unique() {
        let mut targets: Vec<_> = FAQ_ENTRIES.iter().map(|e| e.target).collect();
        targets.sort_unstable();
        targets.dedup();
        assert_eq!(targets.len(), FAQ_ENTRIES.len());
    }
}
