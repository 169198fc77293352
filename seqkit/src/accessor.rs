use seqkit_value::{Record, Value};

use crate::error::Result;

/// Extracts one field from records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccessor {
    key: String,
}

impl PropertyAccessor {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        record.get(&self.key)
    }

    /// The field's value; a missing field is an error.
    pub fn extract(&self, record: &Record) -> Result<Value> {
        Ok(record.field(&self.key)?.clone())
    }

    /// Borrow as a transform for [`map`](crate::map). A missing field maps
    /// to `None`.
    pub fn transform(&self) -> impl Fn(&Record, usize, &[Record]) -> Option<Value> + '_ {
        move |record: &Record, _: usize, _: &[Record]| self.get(record).cloned()
    }

    /// Turn into a transform for [`try_map`](crate::try_map).
    pub fn into_transform(self) -> impl FnMut(&Record, usize, &[Record]) -> Result<Value> {
        move |record: &Record, _: usize, _: &[Record]| self.extract(record)
    }
}

pub fn property_accessor(key: impl Into<String>) -> PropertyAccessor {
    PropertyAccessor::new(key)
}
