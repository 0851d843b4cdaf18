mod line;
mod record;

pub use line::{DelimReader, LineReader};
pub use record::RecordReader;
