//! Turtle ontologies used to exercise the converter and the validation gate.
//!
//! Each constant holds a complete Turtle 1.1 document.

mod bad_identifier;
mod building;
mod pizza;
mod unmapped_datatype;

pub use bad_identifier::BAD_IDENTIFIER;
pub use building::BUILDING;
pub use pizza::PIZZA;
pub use unmapped_datatype::UNMAPPED_DATATYPE;
