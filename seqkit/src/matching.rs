use seqkit_value::{Record, Value};

/// A predicate on records built from criteria.
///
/// A record matches when every field of the criteria is present in the
/// record and strictly equal to the criteria's value. Fields the criteria
/// don't mention are unconstrained, so empty criteria match any record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches {
    criteria: Record,
}

impl Matches {
    pub fn new(criteria: Record) -> Self {
        Self { criteria }
    }

    /// Criteria consisting of a single field.
    pub fn pair(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Record::single(key, value))
    }

    pub fn criteria(&self) -> &Record {
        &self.criteria
    }

    #[inline]
    pub fn test(&self, record: &Record) -> bool {
        record.contains_all(&self.criteria)
    }

    /// Borrow as a predicate for the sequence functions.
    pub fn predicate(&self) -> impl Fn(&Record, usize, &[Record]) -> bool + '_ {
        move |record: &Record, _: usize, _: &[Record]| self.test(record)
    }

    pub fn into_predicate(self) -> impl Fn(&Record, usize, &[Record]) -> bool {
        move |record: &Record, _: usize, _: &[Record]| self.test(record)
    }
}

impl From<Record> for Matches {
    fn from(criteria: Record) -> Self {
        Self::new(criteria)
    }
}

pub fn matches(criteria: Record) -> Matches {
    Matches::new(criteria)
}

pub fn matches_pair(key: impl Into<String>, value: impl Into<Value>) -> Matches {
    Matches::pair(key, value)
}
