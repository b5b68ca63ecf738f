pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod prompt;
pub mod range;
pub mod table;
