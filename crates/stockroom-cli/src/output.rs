// Rust guideline compliant 2026-10-15

//! Output formatting module for the Stockroom shell.
//!
//! This module renders the item table, the form row and the error line in
//! the supported output formats (JSON, table, plain text).

use serde_json::json;
use std::io::Write;
use stockroom_core::{icons, CategorySet, Feedback, Field, Form, OutputFormat, Record};
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Title shown above the item table.
pub const TITLE: &str = "Item Management";

/// Output formatter trait.
///
/// Defines the interface for rendering session state in different formats.
pub trait OutputFormatter {
    /// Formats the item table.
    fn format_list(&self, records: &[Record]) -> String;

    /// Formats the confirmation for a newly added record.
    fn format_added(&self, record: &Record) -> String;

    /// Formats the result of a delete action.
    fn format_deleted(&self, id: u64, removed: bool) -> String;

    /// Formats the error line.
    ///
    /// Renders to an empty string when the line is idle, except for JSON
    /// which always reports the state.
    fn format_feedback(&self, feedback: &Feedback) -> String;

    /// Formats the form row and the focused field.
    fn format_form(&self, form: &Form, focus: Field) -> String;

    /// Formats the configured categories with their icons.
    fn format_categories(&self, categories: &CategorySet) -> String;

    /// Formats a shell-level error message (bad command, bad id).
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Emits one JSON document per response for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_list(&self, records: &[Record]) -> String {
        json!({
            "items": records,
            "total": records.len(),
        })
        .to_string()
    }

    fn format_added(&self, record: &Record) -> String {
        json!({
            "status": "ok",
            "item": record,
            "error": "",
        })
        .to_string()
    }

    fn format_deleted(&self, id: u64, removed: bool) -> String {
        json!({
            "id": id,
            "deleted": removed,
        })
        .to_string()
    }

    fn format_feedback(&self, feedback: &Feedback) -> String {
        match feedback {
            Feedback::Idle => json!({ "status": "idle", "error": "" }).to_string(),
            Feedback::Invalid(reason) => json!({
                "status": "invalid",
                "code": reason.code(),
                "error": reason.to_string(),
            })
            .to_string(),
        }
    }

    fn format_form(&self, form: &Form, focus: Field) -> String {
        json!({
            "name": form.name,
            "category": form.category,
            "price": form.price,
            "focus": focus.name(),
        })
        .to_string()
    }

    fn format_categories(&self, categories: &CategorySet) -> String {
        let entries: Vec<_> = categories
            .iter()
            .map(|category| {
                json!({
                    "name": category.name(),
                    "icon": category.icon().asset,
                })
            })
            .collect();
        json!({ "categories": entries }).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Renders the item table with box drawing and colours status lines.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_list(&self, records: &[Record]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Category", "Price", "Action"]);

        for record in records {
            let icon = record.category.icon();
            builder.push_record(vec![
                record.id.to_string(),
                record.name.clone(),
                format!("{} {}", icon.glyph, record.category),
                record.price.to_string(),
                format!("{} delete {}", icons::DELETE.glyph, record.id),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        if records.is_empty() {
            format!("{}\n{}\nNo items yet.", TITLE, table)
        } else {
            format!("{}\n{}", TITLE, table)
        }
    }

    fn format_added(&self, record: &Record) -> String {
        format!(
            "{} Added item {}: {}",
            self.paint("✓", Color::Green),
            record.id,
            record.name
        )
    }

    fn format_deleted(&self, id: u64, removed: bool) -> String {
        if removed {
            format!("{} Deleted item {}", self.paint("✓", Color::Green), id)
        } else {
            format!("No item with id {}", id)
        }
    }

    fn format_feedback(&self, feedback: &Feedback) -> String {
        match feedback {
            Feedback::Idle => String::new(),
            Feedback::Invalid(reason) => {
                format!("{} {}", self.paint("✗", Color::Red), reason)
            }
        }
    }

    fn format_form(&self, form: &Form, focus: Field) -> String {
        let marker = |field: Field| if field == focus { ">" } else { " " };
        format!(
            "{} Name:     {}\n{} Category: {}\n{} Price:    {}",
            marker(Field::Name),
            form.name,
            marker(Field::Category),
            form.category,
            marker(Field::Price),
            form.price
        )
    }

    fn format_categories(&self, categories: &CategorySet) -> String {
        categories
            .iter()
            .map(|category| format!("{} {}", category.icon().glyph, category))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", self.paint("Error:", Color::Red), error)
    }
}

/// Plain text output formatter.
///
/// One line per item, fields separated by tabs, no colours.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_list(&self, records: &[Record]) -> String {
        records
            .iter()
            .map(|record| {
                format!(
                    "{}\t{}\t{}\t{}",
                    record.id, record.name, record.category, record.price
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_added(&self, record: &Record) -> String {
        format!("added {}", record.id)
    }

    fn format_deleted(&self, id: u64, removed: bool) -> String {
        if removed {
            format!("deleted {}", id)
        } else {
            format!("not found {}", id)
        }
    }

    fn format_feedback(&self, feedback: &Feedback) -> String {
        feedback.message()
    }

    fn format_form(&self, form: &Form, focus: Field) -> String {
        format!(
            "{}\t{}\t{}\tfocus={}",
            form.name,
            form.category,
            form.price,
            focus.name()
        )
    }

    fn format_categories(&self, categories: &CategorySet) -> String {
        categories
            .iter()
            .map(|category| category.name())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Creates the formatter for the given output format.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
