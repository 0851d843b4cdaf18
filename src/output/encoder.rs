use crate::error::Result;
use crate::model::{MetricPoint, TimestampTrait};

pub trait Encoder {
    fn encode(&self, point: &MetricPoint) -> Result<Vec<u8>>;
}

/// Renders points in the InfluxDB line protocol:
///
/// ```text
/// measurement,tag1=value1,tag2=value2 value=<raw> <nanoseconds>
/// ```
///
/// The field value is passed through exactly as it was read from the input,
/// so the output stays byte-for-byte reproducible.
pub struct LineProtocolEncoder {}

impl LineProtocolEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for LineProtocolEncoder {
    fn encode(&self, point: &MetricPoint) -> Result<Vec<u8>> {
        let tags = point
            .tags()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(",");

        Ok(format!(
            "{},{} value={} {}",
            point.name(),
            tags,
            point.value(),
            point.timestamp().to_nanos_string(),
        )
        .into_bytes())
    }
}
