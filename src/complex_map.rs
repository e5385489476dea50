//! Complex name -> identifier directory
//!
//! Backed by a static JSON object file mapping complex names to the
//! provider-assigned identifiers. Loaded once at startup and read-only
//! afterwards; a missing or malformed file degrades to an empty directory
//! rather than an error.

use serde::Serialize;

/// One directory entry: complex name and its provider identifier
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ComplexEntry {
    pub name: String,
    pub id: String,
}

/// Read-only complex directory, preserving the file's entry order
#[derive(Debug, Default)]
pub struct ComplexMap {
    entries: Vec<ComplexEntry>,
}

impl ComplexMap {
    /// Load the directory from a JSON object file, or return an empty
    /// directory if the file is missing or unreadable.
    pub fn load(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Complex map not readable at {}: {}", path, e);
                return Self::default();
            }
        };

        // preserve_order keeps the file's entry order through the map
        let map: serde_json::Map<String, serde_json::Value> =
            match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("Failed to parse complex map {}: {}", path, e);
                    return Self::default();
                }
            };

        let entries: Vec<ComplexEntry> = map
            .into_iter()
            .filter_map(|(name, id)| {
                id.as_str().map(|id| ComplexEntry {
                    name,
                    id: id.to_string(),
                })
            })
            .collect();

        log::info!("Loaded {} complex(es) from {}", entries.len(), path);

        Self { entries }
    }

    /// Search by keyword: an empty keyword returns every entry, otherwise
    /// the entries whose name contains the keyword (case-sensitive),
    /// in stored order.
    pub fn search(&self, keyword: &str) -> Vec<ComplexEntry> {
        if keyword.is_empty() {
            return self.entries.clone();
        }
        self.entries
            .iter()
            .filter(|entry| entry.name.contains(keyword))
            .cloned()
            .collect()
    }

    /// Look up the identifier for an exact complex name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.id.as_str())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
