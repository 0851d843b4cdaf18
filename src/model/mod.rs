mod column;
mod point;
mod record;
mod timestamp;

pub use column::*;
pub use point::*;
pub use record::*;
pub use timestamp::*;

pub type MetricName = &'static str;

pub type TagName = &'static str;

pub type TagValue = String;

// Tags render in insertion order; `emit` appends `hostname` last.
pub type Tags = Vec<(TagName, TagValue)>;
