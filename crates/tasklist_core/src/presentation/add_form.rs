//! Add-task form state.

use crate::model::task::{Category, NewTask, Priority};
use crate::service::intent::Intent;
use chrono::NaiveDate;
use std::time::Duration;

/// Length of the invalid-submission cue.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Form collecting a new task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub text: String,
    pub priority: Priority,
    pub category: Category,
    pub due_date: Option<NaiveDate>,
    expanded: bool,
    shaking: bool,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Focusing the text input reveals the option row.
    pub fn focus(&mut self) {
        self.expanded = true;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Whether the invalid-input cue is showing.
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// Ends the invalid-input cue after [`SHAKE_DURATION`].
    pub fn settle(&mut self) {
        self.shaking = false;
    }

    /// Submits the form.
    ///
    /// Blank text starts the invalid-input cue and returns `None`. Otherwise
    /// returns an add intent and resets the form to its defaults.
    pub fn submit(&mut self) -> Option<Intent> {
        if !self.can_submit() {
            self.shaking = true;
            self.expanded = true;
            return None;
        }

        let new = NewTask::new(self.text.trim())
            .priority(self.priority)
            .category(self.category)
            .due_date(self.due_date);
        *self = Self::default();
        Some(Intent::Add(new))
    }
}

#[cfg(test)]
mod tests {
    use super::AddForm;
    use crate::model::task::{Category, Priority};
    use crate::service::intent::Intent;

    #[test]
    fn blank_submit_shakes_without_intent() {
        let mut form = AddForm::new();
        form.text = "   ".to_string();

        assert_eq!(form.submit(), None);
        assert!(form.is_shaking());
        assert!(form.is_expanded());

        form.settle();
        assert!(!form.is_shaking());
    }

    #[test]
    fn submit_emits_trimmed_add_and_resets() {
        let mut form = AddForm::new();
        form.focus();
        form.text = "  Buy milk ".to_string();
        form.priority = Priority::High;
        form.category = Category::Shopping;

        let Some(Intent::Add(new)) = form.submit() else {
            panic!("expected add intent");
        };
        assert_eq!(new.text, "Buy milk");
        assert_eq!(new.priority, Priority::High);
        assert_eq!(new.category, Category::Shopping);
        assert_eq!(form, AddForm::new());
    }
}
