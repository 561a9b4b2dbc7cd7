//! Reference element type: one row of a GDP dataset

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::utils::TableHash;

/// A country and its GDP.
///
/// Equality and both hash functions look at the country name only, so two records
/// for the same country are the same set element whatever their GDP. Ordering is
/// alphabetical on the country name and exists to drive sorted and reversed
/// workloads.
#[derive(Debug, Clone)]
pub struct GdpRecord {
    /// Country name, the equality key
    country: String,
    /// GDP value
    gdp: i32,
}

impl GdpRecord {
    /// Creates a record
    #[must_use]
    pub fn new(country: impl Into<String>, gdp: i32) -> Self {
        Self { country: country.into(), gdp }
    }

    /// Returns the country name
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the GDP value
    #[must_use]
    pub fn gdp(&self) -> i32 {
        self.gdp
    }
}

impl PartialEq for GdpRecord {
    fn eq(&self, other: &Self) -> bool {
        self.country == other.country
    }
}

impl Eq for GdpRecord {}

impl PartialOrd for GdpRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GdpRecord {
    /// Compares country names by UTF-16 code unit
    fn cmp(&self, other: &Self) -> Ordering {
        self.country.encode_utf16().cmp(other.country.encode_utf16())
    }
}

impl TableHash for GdpRecord {
    fn table_hash(&self) -> i32 {
        self.country.table_hash()
    }
}

impl Hash for GdpRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country.hash(state);
    }
}

impl fmt::Display for GdpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.country, self.gdp)
    }
}
