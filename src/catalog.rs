// file: src/catalog.rs
// description: known document identifiers offered for selection
// reference: internal data structures

use crate::error::{QaError, Result};
use std::collections::HashSet;
use tracing::warn;

/// Collective labour agreements indexed by the default backend deployment.
const BUILTIN_DOCUMENTS: &[&str] = &[
    "387.Shell Nederland Raffinaderij en CH.01-03-2022.28-02-2025.pdf",
    "161.Nederlandse Gasunie NV Cao.01-01-2024.31-12-2025.pdf",
    "559.Ikea NL BV en Inter Ikea Systems BV.01-10-2023.31-12-2024.pdf",
    "242.Schiphol Nederland BV.01-04-2023.30-09-2024.pdf",
    "163.Openbaar Vervoer.01-01-2023.31-03-2025.pdf",
    "15.Philips.01-01-2023.01-07-2024.pdf",
    "136.HTM Cao.01-01-2024.30-06-2026.pdf",
    "50.Apotheken.01-07-2021.30-06-2024.pdf",
    "144.Royal Flora Holland.01-04-2024.31-03-2026.pdf",
    "365.ANWB Cao.01-04-2022.31-03-2024.pdf",
    "1633.Abn Amro.01-07-2024.30-06-2026.pdf",
    "1635.ING Bank Cao.01-01-2023.31-12-2024.pdf",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Keeps the first occurrence of every name, in the given order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| !name.trim().is_empty())
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self { names }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_DOCUMENTS.iter().copied())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    /// Resolves the documents a batch should query.
    ///
    /// `all` takes the whole catalog. Otherwise the requested names are used
    /// as given, repeats included; names the catalog does not know are still
    /// sent to the backend.
    pub fn select(&self, requested: &[String], all: bool) -> Result<Vec<String>> {
        if all {
            if !requested.is_empty() {
                return Err(QaError::Validation(
                    "--all cannot be combined with --document".to_string(),
                ));
            }
            return Ok(self.names.clone());
        }

        for name in requested.iter().filter(|name| !self.contains(name)) {
            warn!("Document not in catalog, sending anyway: {}", name);
        }

        Ok(requested.to_vec())
    }
}
