use serde::{Deserialize, Serialize, Serializer};

/// One bibliographic metadata entry of the `rag_sources` table.
///
/// Records are created and deleted by the ingestion pipeline; the admin panel only
/// reads them and edits the fields carried by [`SourceUpdate`]. Optional fields are
/// `None` when the store holds `null`, never an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Unique, immutable lookup key.
    pub source_id: String,
    /// Original file path of the ingested document. Display-only.
    pub filename: String,
    pub title: String,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub edition: Option<String>,
    pub publisher: Option<String>,
    pub source_url: Option<String>,
}

impl Source {
    /// Last component of `filename`, accepting both Windows and POSIX separators.
    pub fn file_name(&self) -> &str {
        self.filename
            .rsplit(|c: char| c == '\\' || c == '/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.filename)
    }
}

/// State of a single optional field inside an update.
///
/// `Unchanged` fields are left out of the serialized body so the store keeps its
/// current value; `Cleared` is written as `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldChange<T> {
    #[default]
    Unchanged,
    Cleared,
    Set(T),
}

impl<T> FieldChange<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldChange::Unchanged)
    }

    /// Builds a change that always writes the field, clearing it on `None`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldChange::Set(v),
            None => FieldChange::Cleared,
        }
    }

    /// Value the field ends up with when the change is written to an empty record.
    pub fn into_option(self) -> Option<T> {
        match self {
            FieldChange::Set(v) => Some(v),
            FieldChange::Unchanged | FieldChange::Cleared => None,
        }
    }

    /// Applies the change to the stored value in place.
    pub fn apply(self, target: &mut Option<T>) {
        match self {
            FieldChange::Unchanged => {}
            FieldChange::Cleared => *target = None,
            FieldChange::Set(v) => *target = Some(v),
        }
    }
}

impl<T: Serialize> Serialize for FieldChange<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldChange::Set(v) => v.serialize(serializer),
            FieldChange::Unchanged | FieldChange::Cleared => serializer.serialize_none(),
        }
    }
}

/// Normalized set of editable fields, as produced by
/// [`validate_source`](crate::validation::validate_source).
///
/// Serializes to exactly the JSON object sent to the store: `title` is always
/// present, unchanged optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SourceUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "FieldChange::is_unchanged")]
    pub author: FieldChange<String>,
    #[serde(skip_serializing_if = "FieldChange::is_unchanged")]
    pub year: FieldChange<i32>,
    #[serde(skip_serializing_if = "FieldChange::is_unchanged")]
    pub edition: FieldChange<String>,
    #[serde(skip_serializing_if = "FieldChange::is_unchanged")]
    pub publisher: FieldChange<String>,
    #[serde(skip_serializing_if = "FieldChange::is_unchanged")]
    pub source_url: FieldChange<String>,
}

impl SourceUpdate {
    /// Full editable state of `source`, with every optional field written.
    pub fn from_source(source: &Source) -> Self {
        Self {
            title: source.title.clone(),
            author: FieldChange::from_option(source.author.clone()),
            year: FieldChange::from_option(source.year),
            edition: FieldChange::from_option(source.edition.clone()),
            publisher: FieldChange::from_option(source.publisher.clone()),
            source_url: FieldChange::from_option(source.source_url.clone()),
        }
    }

    /// Writes the update onto `source`. `source_id` and `filename` are never touched.
    pub fn apply_to(self, source: &mut Source) {
        source.title = self.title;
        self.author.apply(&mut source.author);
        self.year.apply(&mut source.year);
        self.edition.apply(&mut source.edition);
        self.publisher.apply(&mut source.publisher);
        self.source_url.apply(&mut source.source_url);
    }
}
