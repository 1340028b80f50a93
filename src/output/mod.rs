//! Output emission and serialization

pub mod printer;

pub use printer::Printer;
