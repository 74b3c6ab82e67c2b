//! Form model of the edit modal.
//!
//! Inputs are kept as raw strings exactly as typed. On submit the form is turned
//! into the same JSON shape the API accepts and run through the shared validator,
//! so the browser rejects precisely what the server would reject.

use common::model::error::ValidationErrors;
use common::model::source::{Source, SourceUpdate};
use common::validation::validate_source;
use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Year,
    Edition,
    Publisher,
    SourceUrl,
}

impl FormField {
    /// Key of the field in the API payload and in validation errors.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Year => "year",
            FormField::Edition => "edition",
            FormField::Publisher => "publisher",
            FormField::SourceUrl => "source_url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Year => "Year",
            FormField::Edition => "Edition",
            FormField::Publisher => "Publisher",
            FormField::SourceUrl => "Source URL",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub edition: String,
    pub publisher: String,
    pub source_url: String,
}

impl EditForm {
    /// Pre-populates the form from the record's full editable state; missing
    /// values become empty inputs.
    pub fn from_source(source: &Source) -> Self {
        let current = SourceUpdate::from_source(source);
        Self {
            title: current.title,
            author: current.author.into_option().unwrap_or_default(),
            year: current
                .year
                .into_option()
                .map(|y| y.to_string())
                .unwrap_or_default(),
            edition: current.edition.into_option().unwrap_or_default(),
            publisher: current.publisher.into_option().unwrap_or_default(),
            source_url: current.source_url.into_option().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Year => &self.year,
            FormField::Edition => &self.edition,
            FormField::Publisher => &self.publisher,
            FormField::SourceUrl => &self.source_url,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Author => self.author = value,
            FormField::Year => self.year = value,
            FormField::Edition => self.edition = value,
            FormField::Publisher => self.publisher = value,
            FormField::SourceUrl => self.source_url = value,
        }
    }

    /// JSON candidate for the validator. Every key is present; blank optional
    /// inputs become `null` so saving clears them in the store.
    pub fn to_candidate(&self) -> Value {
        let mut object = Map::new();
        object.insert("title".to_string(), Value::String(self.title.clone()));
        for field in [
            FormField::Author,
            FormField::Edition,
            FormField::Publisher,
            FormField::SourceUrl,
        ] {
            let raw = self.get(field);
            let value = if raw.trim().is_empty() {
                Value::Null
            } else {
                Value::String(raw.to_string())
            };
            object.insert(field.key().to_string(), value);
        }
        object.insert("year".to_string(), year_value(&self.year));
        Value::Object(object)
    }

    pub fn validate(&self, current_year: i32) -> Result<SourceUpdate, ValidationErrors> {
        validate_source(&self.to_candidate(), current_year)
    }
}

/// Numeric text becomes a JSON number; anything else is passed through as text so
/// the validator reports it.
fn year_value(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(year) = raw.parse::<i64>() {
        return Value::Number(year.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
