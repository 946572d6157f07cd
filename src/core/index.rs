use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::domain::model::Course;
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_number;

pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Fixed-size hash index over courses, keyed by identifier.
///
/// Collisions chain within a bucket in insertion order. The bucket count is
/// set at construction and never changes; there is no rehashing or resizing.
/// Duplicate identifiers are all kept, and lookup returns the first one
/// encountered in chain order.
#[derive(Debug, Clone)]
pub struct CourseIndex {
    buckets: Vec<Vec<Course>>,
}

impl CourseIndex {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_BUCKET_COUNT],
        }
    }

    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        validate_positive_number("bucket_count", bucket_count, 1)?;
        Ok(Self {
            buckets: vec![Vec::new(); bucket_count],
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Same identifier, same bucket, for the lifetime of the index.
    fn bucket_for(&self, identifier: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        identifier.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    pub fn insert(&mut self, course: Course) {
        let slot = self.bucket_for(&course.identifier);
        self.buckets[slot].push(course);
    }

    /// First course in the bucket chain whose identifier matches, if any.
    pub fn lookup(&self, identifier: &str) -> Option<&Course> {
        self.buckets[self.bucket_for(identifier)]
            .iter()
            .find(|course| course.identifier == identifier)
    }

    /// Every stored course, bucket by bucket, insertion order within each
    /// bucket. The order is incidental; callers wanting a sorted view sort.
    pub fn all_records(&self) -> impl Iterator<Item = &Course> {
        self.buckets.iter().flatten()
    }
}

impl Default for CourseIndex {
    fn default() -> Self {
        Self::new()
    }
}
