pub mod convert;
pub mod parse;
