pub mod validator;

pub use validator::{validate_reference_graph, ValidationSummary};
