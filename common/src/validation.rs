//! # Source Validation Schema
//!
//! Field constraints for the editable part of a [`Source`](crate::model::source::Source).
//! The same function runs on the server before any store call and in the browser
//! before the edit form is allowed to submit, so both sides always agree.
//!
//! Validation never corrects input beyond trimming: strings are trimmed before any
//! length or range check, empty optional strings become "no value", and every other
//! problem is reported back as a [`FieldViolation`](crate::model::error::FieldViolation).

use crate::model::error::ValidationErrors;
use crate::model::source::{FieldChange, SourceUpdate};
use serde_json::{Map, Value};
use url::Url;

pub const TITLE_MAX_LENGTH: usize = 500;
pub const YEAR_MIN: i64 = 1000;
pub const URL_MAX_LENGTH: usize = 2048;

/// Latest accepted publication year for a given calendar year.
pub fn max_year(current_year: i32) -> i64 {
    i64::from(current_year) + 1
}

/// Validates a candidate record and returns its normalized editable fields.
///
/// `candidate` is the decoded JSON body (or the edit form rendered as JSON); keys
/// outside the editable set are ignored. `current_year` bounds the `year` field and
/// is passed in so the function stays pure.
///
/// All violations are collected before returning.
pub fn validate_source(
    candidate: &Value,
    current_year: i32,
) -> Result<SourceUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(object) = candidate.as_object() else {
        errors.push("body", "Expected an object");
        return Err(errors);
    };

    let title = validate_title(object, &mut errors);
    let author = optional_text(object, "author", "Author", &mut errors);
    let year = validate_year(object, current_year, &mut errors);
    let edition = optional_text(object, "edition", "Edition", &mut errors);
    let publisher = optional_text(object, "publisher", "Publisher", &mut errors);
    let source_url = validate_url(object, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SourceUpdate {
        title: title.unwrap_or_default(),
        author,
        year,
        edition,
        publisher,
        source_url,
    })
}

fn validate_title(object: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<String> {
    match object.get("title") {
        None | Some(Value::Null) => {
            errors.push("title", "Title is required");
            None
        }
        Some(Value::String(raw)) => {
            let title = raw.trim();
            if title.is_empty() {
                errors.push("title", "Title is required");
                None
            } else if title.chars().count() > TITLE_MAX_LENGTH {
                errors.push("title", "Title is too long");
                None
            } else {
                Some(title.to_string())
            }
        }
        Some(_) => {
            errors.push("title", "Title must be text");
            None
        }
    }
}

/// Reads an optional free-text field. Absent keys stay unchanged, `null` and
/// blank strings clear the stored value.
fn optional_text(
    object: &Map<String, Value>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> FieldChange<String> {
    match object.get(field) {
        None => FieldChange::Unchanged,
        Some(Value::Null) => FieldChange::Cleared,
        Some(Value::String(raw)) => {
            let value = raw.trim();
            if value.is_empty() {
                FieldChange::Cleared
            } else {
                FieldChange::Set(value.to_string())
            }
        }
        Some(_) => {
            errors.push(field, &format!("{label} must be text"));
            FieldChange::Unchanged
        }
    }
}

fn validate_year(
    object: &Map<String, Value>,
    current_year: i32,
    errors: &mut ValidationErrors,
) -> FieldChange<i32> {
    let number = match object.get("year") {
        None => return FieldChange::Unchanged,
        Some(Value::Null) => return FieldChange::Cleared,
        Some(Value::Number(number)) => number,
        Some(_) => {
            errors.push("year", "Year must be a whole number");
            return FieldChange::Unchanged;
        }
    };

    let whole = number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    });

    match whole {
        None => errors.push("year", "Year must be a whole number"),
        Some(year) if year < YEAR_MIN => errors.push("year", "Year must be after 1000"),
        Some(year) if year > max_year(current_year) => {
            errors.push("year", "Year cannot be in the future")
        }
        Some(year) => {
            if let Ok(year) = i32::try_from(year) {
                return FieldChange::Set(year);
            }
            errors.push("year", "Year cannot be in the future");
        }
    }
    FieldChange::Unchanged
}

fn validate_url(object: &Map<String, Value>, errors: &mut ValidationErrors) -> FieldChange<String> {
    let change = optional_text(object, "source_url", "Source URL", errors);
    let FieldChange::Set(url) = &change else {
        return change;
    };

    if url.chars().count() > URL_MAX_LENGTH {
        errors.push("source_url", "URL is too long");
        return FieldChange::Unchanged;
    }
    if Url::parse(url).is_err() {
        errors.push("source_url", "Please enter a valid URL");
        return FieldChange::Unchanged;
    }
    change
}
