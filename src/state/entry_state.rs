//! Entry state and its transition function

use tracing::debug;

use crate::timing::{Digit, ElapsedSummary, TimeField, TimeValue};

/// A single user action on the keypad or field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Make a field active, or none
    Select(Option<TimeField>),
    Digit(Digit),
    Backspace,
    Clear,
    /// Start over with empty fields, as after a page reload
    Reset,
}

/// Both time values plus the field currently receiving input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryState {
    pub engine_start: TimeValue,
    pub engine_stop: TimeValue,
    pub active: Option<TimeField>,
}

impl EntryState {
    /// Create an empty state with no active field
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting state
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Select(field) => self.set_active(field),
            Action::Digit(digit) => self.input_digit(digit),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear(),
            Action::Reset => self.reset(),
        }
        self
    }

    pub fn set_active(&mut self, field: Option<TimeField>) {
        self.active = field;
    }

    /// Append a digit to the active field, advancing once it holds four
    pub fn input_digit(&mut self, digit: Digit) {
        let Some(field) = self.active else {
            debug!("Digit ignored: no active field");
            return;
        };

        let value = self.value_mut(field);
        if !value.push(digit) {
            debug!("Digit ignored: {} is full", field.as_str());
            return;
        }

        if value.is_full() {
            self.active = Some(field.next());
        }
    }

    /// Remove the last digit of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active {
            self.value_mut(field).pop();
        }
    }

    /// Empty the active field, leaving the other field and selection alone
    pub fn clear(&mut self) {
        if let Some(field) = self.active {
            self.value_mut(field).clear();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn value(&self, field: TimeField) -> &TimeValue {
        match field {
            TimeField::EngineStart => &self.engine_start,
            TimeField::EngineStop => &self.engine_stop,
        }
    }

    fn value_mut(&mut self, field: TimeField) -> &mut TimeValue {
        match field {
            TimeField::EngineStart => &mut self.engine_start,
            TimeField::EngineStop => &mut self.engine_stop,
        }
    }

    /// Display string of a field
    pub fn formatted(&self, field: TimeField) -> String {
        self.value(field).formatted()
    }

    /// Elapsed time derived from the current values
    pub fn summary(&self) -> ElapsedSummary {
        ElapsedSummary::compute(
            &self.formatted(TimeField::EngineStart),
            &self.formatted(TimeField::EngineStop),
        )
    }
}
