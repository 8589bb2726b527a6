//! Station catalog: the fixed, ordered set of claimable stations.

mod paris;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use paris::PARIS_METRO;

/// A claimable station.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Station {
    /// Display name, also the station's identity.
    pub name: String,
}

/// Immutable ordered catalog of stations.
///
/// Order is the canonical rendering order for clients. Names listed more
/// than once keep their first position.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Stations in canonical order.
    stations: Vec<Station>,
    /// Name → position in `stations`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from names in canonical order.
    ///
    /// Surrounding whitespace is trimmed, blank names are skipped and
    /// duplicates are collapsed onto their first occurrence.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stations = Vec::new();
        let mut index = HashMap::new();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || index.contains_key(name) {
                continue;
            }
            index.insert(name.to_string(), stations.len());
            stations.push(Station {
                name: name.to_string(),
            });
        }

        Self { stations, index }
    }

    /// The bundled Paris metro catalog.
    pub fn paris() -> Self {
        Self::new(PARIS_METRO)
    }

    /// Whether `name` is a station of this catalog (exact match).
    pub fn exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a station by exact name.
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.index.get(name).map(|&i| &self.stations[i])
    }

    /// All stations in canonical order. Restartable: each call iterates from
    /// the beginning.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &Station> {
        self.stations.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::paris()
    }
}
