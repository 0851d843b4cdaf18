use super::{MetricName, Tags, Timestamp};

/// One output measurement: a named value with its tag set and timestamp.
#[derive(Debug, PartialEq)]
pub struct MetricPoint {
    name: MetricName,
    tags: Tags,
    value: String,
    timestamp: Timestamp,
}

impl MetricPoint {
    pub fn new(name: MetricName, tags: Tags, value: String, timestamp: Timestamp) -> Self {
        Self {
            name,
            tags,
            value,
            timestamp,
        }
    }

    #[inline]
    pub fn name(&self) -> MetricName {
        self.name
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The value exactly as it was written in the input.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
