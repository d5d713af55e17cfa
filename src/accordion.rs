//! Accordion State
//!
//! Single-open-item state over a fixed list of answer targets.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    targets: Vec<&'static str>,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(targets: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            open: None,
        }
    }

    /// Open `target` (closing any other) or close it if already open.
    /// Returns false for targets that are not in the list.
    pub fn toggle(&mut self, target: &str) -> bool {
        let Some(index) = self.targets.iter().position(|t| *t == target) else {
            return false;
        };
        self.open = if self.open == Some(index) { None } else { Some(index) };
        true
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, target: &str) -> bool {
        self.open_target() == Some(target)
    }

    pub fn open_target(&self) -> Option<&'static str> {
        self.open.map(|index| self.targets[index])
    }
}

/// Icon glyph for an item
pub fn icon(open: bool) -> &'static str {
    if open {
        "−"
    } else {
        "+"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion() -> Accordion {
        Accordion::new(["faq-1", "faq-2", "faq-3"])
    }

    fn open_count(acc: &Accordion) -> usize {
        ["faq-1", "faq-2", "faq-3"].iter().filter(|t| acc.is_open(t)).count()
    }

    #[test]
    fn test_opening_one_closes_the_other() {
        let mut acc = accordion();
        assert!(acc.toggle("faq-1"));
        assert!(acc.is_open("faq-1"));
        acc.toggle("faq-2");
        assert!(!acc.is_open("faq-1"));
        assert!(acc.is_open("faq-2"));
        assert_eq!(open_count(&acc), 1);
    }

    #[test]
    fn test_toggling_open_item_closes_it() {
        let mut acc = accordion();
        acc.toggle("faq-3");
        acc.toggle("faq-3");
        assert_eq!(acc.open_target(), None);
        assert_eq!(icon(acc.is_open("faq-3")), "+");
    }

    #[test]
    fn test_escape_closes_everything() {
        let mut acc = accordion();
        acc.toggle("faq-2");
        acc.close_all();
        assert_eq!(open_count(&acc), 0);
        acc.close_all();
        assert_eq!(open_count(&acc), 0);
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut acc = accordion();
        acc.toggle("faq-1");
        assert!(!acc.toggle("missing"));
        assert!(acc.is_open("faq-1"));
    }

    #[test]
    fn test_at_most_one_open_over_any_sequence() {
        let mut acc = accordion();
        for target in ["faq-1", "faq-2", "faq-2", "faq-3", "faq-1", "faq-1", "faq-3"] {
            acc.toggle(target);
            assert!(open_count(&acc) <= 1);
        }
        assert_eq!(icon(true), "−");
    }
}
