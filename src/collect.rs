use crate::error::{Gtf2BedError, Result};
use crate::gxf::GxfRecord;
use crate::report::Reporter;
use hashbrown::HashSet;

/// Progress is reported every this many records.
pub const PROGRESS_EVERY: usize = 10_000;

/// Feature-type request meaning "no restriction".
pub const ALL_FEATURES: &str = "all";

/// Everything retained from one pass over the input.
#[derive(Debug, Default)]
pub struct Collection {
    /// Records in input order.
    pub records: Vec<GxfRecord>,
    /// Union of attribute keys across all records.
    pub attribute_keys: HashSet<String>,
    /// Union of feature types across all records.
    pub feature_types: HashSet<String>,
}

impl Collection {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retains a record and registers its attribute keys and feature type.
    ///
    /// # Arguments
    ///
    /// * `record` - Next record in input order
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// let mut collection = Collection::new();
    /// collection.push(record);
    /// assert_eq!(collection.len(), 1);
    /// ```
    pub fn push(&mut self, record: GxfRecord) {
        for key in record.attributes.keys() {
            if !self.attribute_keys.contains(key.as_str()) {
                self.attribute_keys.insert(key.clone());
            }
        }
        if !self.feature_types.contains(record.feature.as_str()) {
            self.feature_types.insert(record.feature.clone());
        }
        self.records.push(record);
    }

    /// Attribute keys in ascending lexicographic order.
    ///
    /// # Returns
    ///
    /// Returns the keys as a new vector; the collection is left untouched.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys = self.attribute_keys.iter().cloned().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// User-requested set of feature types.
///
/// The filter is only checked against what the input contains; records
/// of other types are still retained and emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFilter {
    requested: HashSet<String>,
}

impl Default for FeatureFilter {
    fn default() -> Self {
        Self::new([ALL_FEATURES])
    }
}

impl FeatureFilter {
    /// Builds a filter from the requested feature types.
    ///
    /// # Arguments
    ///
    /// * `requested` - Feature types as given on the command line; duplicates collapse
    pub fn new<I, S>(requested: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requested: requested.into_iter().map(Into::into).collect(),
        }
    }

    /// True only for exactly `{"all"}`.
    pub fn is_default(&self) -> bool {
        self.requested.len() == 1 && self.requested.contains(ALL_FEATURES)
    }

    /// Checks every requested type against the observed ones.
    ///
    /// # Errors
    ///
    /// Returns `MissingFeatureTypes` listing, sorted, every requested type
    /// absent from `observed`.
    pub fn validate(&self, observed: &HashSet<String>) -> Result<()> {
        if self.is_default() {
            return Ok(());
        }

        let mut missing = self
            .requested
            .iter()
            .filter(|feature| !observed.contains(feature.as_str()))
            .cloned()
            .collect::<Vec<_>>();

        if missing.is_empty() {
            Ok(())
        } else {
            missing.sort_unstable();
            Err(Gtf2BedError::MissingFeatureTypes(missing))
        }
    }
}

/// Consumes the record stream once, retaining every record.
///
/// The first error from the stream aborts collection. After the stream is
/// exhausted, `filter` is validated against the observed feature types.
///
/// # Example
///
/// ```rust, ignore
/// let mut reporter = Reporter::quiet();
/// let collection = collect(records, &FeatureFilter::default(), &mut reporter)?;
/// let keys = collection.sorted_keys();
/// ```
pub fn collect<I>(
    records: I,
    filter: &FeatureFilter,
    reporter: &mut Reporter,
) -> Result<Collection>
where
    I: IntoIterator<Item = Result<GxfRecord>>,
{
    let mut collection = Collection::new();

    for record in records {
        collection.push(record?);
        if collection.len() % PROGRESS_EVERY == 0 {
            reporter.bullet(&format!("Read {} records", collection.len()));
        }
    }

    reporter.bullet(&format!(
        "Collected {} records, {} attribute keys, {} feature types",
        collection.len(),
        collection.attribute_keys.len(),
        collection.feature_types.len()
    ));

    filter.validate(&collection.feature_types)?;
    Ok(collection)
}
