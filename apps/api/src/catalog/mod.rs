//! Career catalog: the static reference list of careers and the skills each
//! one requires. Loaded once at startup from a CSV source and shared read-only.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::skills::split_skills;

/// Column holding the comma-joined required skills. Must be present.
pub const REQUIRED_SKILLS_COLUMN: &str = "required_skills";

/// Columns tried, in order, for a career's display name.
const NAME_COLUMNS: &[&str] = &["name", "career", "title"];

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("career source is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("malformed career row at line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("failed to read career source: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for DataFormatError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => DataFormatError::Io(e),
            _ => DataFormatError::Malformed { line, message },
        }
    }
}

/// One career row. Columns other than the name and `required_skills` are
/// carried through unchanged in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerRecord {
    pub name: String,
    pub required_skills: Vec<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl CareerRecord {
    pub fn new(name: impl Into<String>, required_skills: &str) -> Self {
        Self {
            name: name.into(),
            required_skills: split_skills(required_skills),
            fields: BTreeMap::new(),
        }
    }
}

/// Ordered, immutable sequence of careers.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    records: Vec<CareerRecord>,
}

impl CareerCatalog {
    pub fn new(records: Vec<CareerRecord>) -> Self {
        Self { records }
    }

    /// Loads the catalog from a CSV file on disk.
    pub fn load_path(path: &Path) -> Result<Self, DataFormatError> {
        let file = File::open(path)?;
        let catalog = Self::load(file)?;
        info!(
            "Loaded {} careers ({} distinct skills) from {}",
            catalog.len(),
            catalog.all_skills().len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parses CSV with a header row. Column names match case-insensitively.
    /// Fails if the `required_skills` column is absent or any row has a
    /// different field count than the header.
    pub fn load<R: Read>(source: R) -> Result<Self, DataFormatError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let skills_idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(REQUIRED_SKILLS_COLUMN))
            .ok_or(DataFormatError::MissingColumn(REQUIRED_SKILLS_COLUMN))?;
        let name_idx = NAME_COLUMNS
            .iter()
            .find_map(|col| headers.iter().position(|h| h.eq_ignore_ascii_case(col)));

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut fields = BTreeMap::new();
            for (idx, (header, value)) in headers.iter().zip(row.iter()).enumerate() {
                if idx != skills_idx && Some(idx) != name_idx {
                    fields.insert(header.to_string(), value.to_string());
                }
            }
            let name = name_idx.and_then(|i| row.get(i)).unwrap_or_default().trim();
            let mut record = CareerRecord::new(name, row.get(skills_idx).unwrap_or_default());
            record.fields = fields;
            records.push(record);
        }

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every distinct required-skill token across all careers, sorted.
    /// Tokens keep their original casing; `SQL` and `sql` are both listed.
    pub fn all_skills(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| r.required_skills.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
