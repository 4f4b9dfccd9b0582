// Rust guideline compliant 2026-10-15

//! Session state machine.
//!
//! A session owns the record store, the three form fields and the single
//! error line. The error line is either:
//!
//! - `Idle` - nothing shown
//! - `Invalid(reason)` - the reason of the last failed add attempt
//!
//! Transitions:
//!
//! - failed submit → `Invalid(reason)`, replacing any earlier reason
//! - successful submit → `Idle`, form cleared, focus back on the name field
//! - delete → no change to the error line

use crate::{CategorySet, Record, RecordStore, Rejection};

/// Default text of the price field.
pub const DEFAULT_PRICE: &str = "0";

/// State of the error line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// No error shown.
    #[default]
    Idle,
    /// The last add attempt was rejected.
    Invalid(Rejection),
}

impl Feedback {
    /// Returns the text of the error line, empty when idle.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Feedback::Idle => String::new(),
            Feedback::Invalid(reason) => reason.to_string(),
        }
    }

    /// Returns whether no error is shown.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Feedback::Idle)
    }
}

/// Input field of the form row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Free-text item name.
    #[default]
    Name,
    /// Category selection.
    Category,
    /// Price input.
    Price,
}

impl Field {
    /// Returns the lower-case field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Price => "price",
        }
    }
}

/// Raw contents of the form row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// Item name as typed.
    pub name: String,
    /// Selected category name, empty when nothing is selected.
    pub category: String,
    /// Price as typed.
    pub price: String,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: DEFAULT_PRICE.to_string(),
        }
    }
}

impl Form {
    /// Resets every field to its default value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// An interactive editing session over one record store.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: RecordStore,
    categories: CategorySet,
    form: Form,
    feedback: Feedback,
    focus: Field,
}

impl Session {
    /// Creates a session with an empty store.
    ///
    /// # Arguments
    ///
    /// * `categories` - Categories accepted by the category field
    #[must_use]
    pub fn new(categories: CategorySet) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    /// Returns the record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the records in display order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        self.store.list()
    }

    /// Returns the configured categories.
    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Returns the form row.
    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the state of the error line.
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Returns the text of the error line, empty when idle.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.feedback.message()
    }

    /// Returns the field that has input focus.
    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Replaces the name field.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
        self.focus = Field::Name;
    }

    /// Replaces the category field.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.form.category = value.into();
        self.focus = Field::Category;
    }

    /// Replaces the price field.
    pub fn set_price(&mut self, value: impl Into<String>) {
        self.form.price = value.into();
        self.focus = Field::Price;
    }

    /// Attempts to add the record described by the form row.
    ///
    /// On success the record is stored, the error line is cleared, the form
    /// is reset and focus returns to the name field. On failure only the
    /// error line changes.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reported by the validator.
    pub fn submit(&mut self) -> Result<Record, Rejection> {
        let outcome = crate::validate(
            &self.form.name,
            &self.form.category,
            &self.form.price,
            self.store.list(),
            &self.categories,
        );

        match outcome {
            Ok(candidate) => {
                let record = self.store.add(candidate);
                self.feedback = Feedback::Idle;
                self.form.clear();
                self.focus = Field::Name;
                Ok(record)
            }
            Err(reason) => {
                tracing::debug!(code = reason.code(), "add rejected");
                self.feedback = Feedback::Invalid(reason);
                Err(reason)
            }
        }
    }

    /// Fills all three fields and submits the form.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reported by the validator.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Result<Record, Rejection> {
        self.form = Form {
            name: name.into(),
            category: category.into(),
            price: price.into(),
        };
        self.submit()
    }

    /// Deletes the record with the given id.
    ///
    /// The error line is left untouched.
    ///
    /// # Returns
    ///
    /// `true` if a record was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_with_default_form() {
        let session = Session::new(CategorySet::default());
        assert!(session.feedback().is_idle());
        assert_eq!(session.error_message(), "");
        assert_eq!(session.form(), &Form::default());
        assert_eq!(session.form().price, "0");
        assert_eq!(session.focus(), Field::Name);
    }

    #[test]
    fn test_setters_move_focus() {
        let mut session = Session::default();
        session.set_price("3");
        assert_eq!(session.focus(), Field::Price);
        session.set_category("Appliance");
        assert_eq!(session.focus(), Field::Category);
        session.set_name("Kettle");
        assert_eq!(session.focus(), Field::Name);
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let mut session = Session::default();
        session.set_name("Mug");
        session.set_price("-5");

        assert_eq!(session.submit(), Err(Rejection::InvalidCategory));
        assert_eq!(session.form().name, "Mug");
        assert_eq!(session.form().price, "-5");
        assert_eq!(session.focus(), Field::Price);
    }
}
