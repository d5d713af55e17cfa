//! Counter State
//!
//! The counter value and the feedback chosen for it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCommand {
    Increment,
    Decrement,
    Reset,
}

impl CounterCommand {
    pub const ALL: [CounterCommand; 3] = [
        CounterCommand::Decrement,
        CounterCommand::Reset,
        CounterCommand::Increment,
    ];

    /// Id of the button issuing this command
    pub fn button_id(self) -> &'static str {
        match self {
            CounterCommand::Increment => "increase-btn",
            CounterCommand::Decrement => "decrease-btn",
            CounterCommand::Reset => "reset-btn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CounterCommand::Increment => "+",
            CounterCommand::Decrement => "−",
            CounterCommand::Reset => "Reset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn value(self) -> i64 {
        self.value
    }

    pub fn apply(&mut self, command: CounterCommand) {
        match command {
            CounterCommand::Increment => self.value += 1,
            CounterCommand::Decrement => self.value -= 1,
            CounterCommand::Reset => self.value = 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub tone: Tone,
}

impl Feedback {
    pub fn for_value(value: i64) -> Self {
        let (message, tone) = match value {
            0 => ("Starting fresh!", Tone::Success),
            1..=5 => ("Keep going!", Tone::Success),
            6.. => ("Wow, you're on fire!", Tone::Success),
            -5..=-1 => ("Going negative...", Tone::Warning),
            _ => ("Deep in the negatives!", Tone::Warning),
        };
        Self { message, tone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increments_minus_decrements() {
        for (n, m) in [(0, 0), (3, 1), (2, 9), (7, 0)] {
            let mut counter = Counter::default();
            (0..n).for_each(|_| counter.apply(CounterCommand::Increment));
            (0..m).for_each(|_| counter.apply(CounterCommand::Decrement));
            assert_eq!(counter.value(), n - m);
        }
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut counter = Counter::default();
        counter.apply(CounterCommand::Decrement);
        counter.apply(CounterCommand::Decrement);
        counter.apply(CounterCommand::Reset);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_feedback_boundaries() {
        let cases = [
            (0, "Starting fresh!", Tone::Success),
            (1, "Keep going!", Tone::Success),
            (5, "Keep going!", Tone::Success),
            (6, "Wow, you're on fire!", Tone::Success),
            (-1, "Going negative...", Tone::Warning),
            (-5, "Going negative...", Tone::Warning),
            (-6, "Deep in the negatives!", Tone::Warning),
        ];
        for (value, message, tone) in cases {
            let feedback = Feedback::for_value(value);
            assert_eq!(feedback.message, message, "value {value}");
            assert_eq!(feedback.tone, tone, "value {value}");
        }
    }
}
