pub mod parser;
pub mod schema;

pub use parser::{load_document, parse_document};
pub use schema::*;
