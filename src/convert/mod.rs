mod converter;
mod family;

pub use converter::Converter;
pub use family::Family;
