mod encoder;
mod output;
mod writer;

pub use encoder::{Encoder, LineProtocolEncoder};
pub use output::Output;
pub use writer::{LineWriter, Writer};
