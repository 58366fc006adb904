//! Static testimonial content and the tripled sequence the carousel scrolls over.
//!
//! The base list is immutable for the lifetime of the repository, so the
//! looped sequence is built once at construction and handed out by reference.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Number of copies of the base list laid end to end.
pub const COPIES: usize = 3;

/// One testimonial shown by the carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialRecord {
    /// Stable unique id
    pub id: u32,
    /// Person quoted
    pub name: String,
    /// Affiliation shown under the name
    pub company: String,
    /// The quote itself, without surrounding quotation marks
    pub quote: String,
    /// Photo URL
    pub photo: String,
}

/// One slot of the looped sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopedItem {
    /// Position in the looped sequence, `0..3N`
    pub index: usize,
    /// Position of the underlying record in the base list, `index mod N`
    pub base_index: usize,
    /// Shared record
    pub record: Arc<TestimonialRecord>,
}

impl LoopedItem {
    /// Render key unique across the whole looped sequence.
    pub fn key(&self) -> String {
        format!("{}-{}", self.record.id, self.index)
    }
}

/// The base list concatenated with itself [`COPIES`] times.
#[derive(Clone, Debug)]
pub struct LoopedSequence {
    items: Arc<[LoopedItem]>,
}

impl LoopedSequence {
    fn build(base: &[Arc<TestimonialRecord>]) -> Self {
        let n = base.len();
        let items = (0..n * COPIES)
            .map(|index| LoopedItem {
                index,
                base_index: index % n,
                record: Arc::clone(&base[index % n]),
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LoopedItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &LoopedItem> {
        self.items.iter()
    }
}

/// Immutable, validated testimonial list.
///
/// Cloning is cheap: the records and the looped sequence are shared.
#[derive(Clone, Debug)]
pub struct ItemRepository {
    base: Arc<[Arc<TestimonialRecord>]>,
    looped: LoopedSequence,
}

impl ItemRepository {
    /// Validate the records and build the looped sequence.
    ///
    /// Fails on an empty list (a carousel over zero items has no modulus)
    /// and on duplicate ids (render keys must be unique).
    pub fn new(records: Vec<TestimonialRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(CarouselError::EmptyRepository);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CarouselError::DuplicateId(record.id));
            }
        }

        let base: Arc<[Arc<TestimonialRecord>]> = records.into_iter().map(Arc::new).collect();
        let looped = LoopedSequence::build(&base);
        tracing::debug!(
            records = base.len(),
            looped = looped.len(),
            "testimonial repository ready"
        );
        Ok(Self { base, looped })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<TestimonialRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Read and parse a JSON file of records.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// The base records in configuration order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &TestimonialRecord> {
        self.base.iter().map(|record| record.as_ref())
    }

    pub fn get(&self, base_index: usize) -> Option<&TestimonialRecord> {
        self.base.get(base_index).map(|record| record.as_ref())
    }

    /// The cached tripled sequence.
    pub fn looped(&self) -> &LoopedSequence {
        &self.looped
    }

    /// Number of distinct testimonials (N). Never zero.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Length of the looped sequence (3N).
    pub fn looped_len(&self) -> usize {
        self.looped.len()
    }
}

#[cfg(test)]
pub(crate) fn sample_records(n: u32) -> Vec<TestimonialRecord> {
    (1..=n)
        .map(|id| TestimonialRecord {
            id,
            name: format!("Person {id}"),
            company: format!("Company {id}"),
            quote: format!("Quote {id}"),
            photo: format!("https://example.com/{id}.jpg"),
        })
        .collect()
}
