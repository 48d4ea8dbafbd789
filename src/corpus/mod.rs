//! Reference corpus: the example scripts a style profile is learned from.

use crate::error::CorpusError;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_LOCATION_COLUMN: &str = "Restaurant";
pub const DEFAULT_SCRIPT_COLUMN: &str = "Script";

/// One reference review and the restaurant it was written about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceScript {
    pub location: String,
    pub script: String,
}

/// Header names of the two columns read from the corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusColumns {
    pub location: String,
    pub script: String,
}

impl Default for CorpusColumns {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION_COLUMN.to_string(),
            script: DEFAULT_SCRIPT_COLUMN.to_string(),
        }
    }
}

/// Ordered, immutable set of reference scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceCorpus {
    scripts: Vec<ReferenceScript>,
}

impl ReferenceCorpus {
    pub fn new(scripts: Vec<ReferenceScript>) -> Self {
        Self { scripts }
    }

    pub fn from_pairs<I, L, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(location, script)| ReferenceScript {
                    location: location.into(),
                    script: script.into(),
                })
                .collect(),
        )
    }

    /// Load a CSV file with a header row.
    pub fn load(path: &Path, columns: &CorpusColumns) -> Result<Self, CorpusError> {
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(file, columns)?;
        tracing::info!(
            path = %path.display(),
            scripts = corpus.len(),
            "Loaded reference corpus"
        );
        Ok(corpus)
    }

    /// Parse CSV from any reader. Rows shorter than the header yield empty
    /// strings for the missing cells.
    pub fn from_reader<R: Read>(reader: R, columns: &CorpusColumns) -> Result<Self, CorpusError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column_index = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| CorpusError::MissingColumn {
                    column: name.to_string(),
                    available: headers.iter().collect::<Vec<_>>().join(", "),
                })
        };
        let location_idx = column_index(&columns.location)?;
        let script_idx = column_index(&columns.script)?;

        let mut scripts = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            scripts.push(ReferenceScript {
                location: record.get(location_idx).unwrap_or_default().to_string(),
                script: record.get(script_idx).unwrap_or_default().to_string(),
            });
        }

        Ok(Self::new(scripts))
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceScript> {
        self.scripts.iter()
    }

    /// Concatenate every script into the prompt fragment fed to style
    /// extraction, in corpus order. Each entry is
    /// `"Restaurant name {location}: Script {script}\n"` with the quotes
    /// included and the newline inside them.
    pub fn render_fragment(&self) -> String {
        self.scripts.iter().fold(String::new(), |mut out, entry| {
            let _ = write!(
                out,
                "\"Restaurant name {}: Script {}\n\"",
                entry.location, entry.script
            );
            out
        })
    }
}

impl<'a> IntoIterator for &'a ReferenceCorpus {
    type Item = &'a ReferenceScript;
    type IntoIter = std::slice::Iter<'a, ReferenceScript>;

    fn into_iter(self) -> Self::IntoIter {
        self.scripts.iter()
    }
}
