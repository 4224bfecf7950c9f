pub mod emoji;
pub mod parse;
