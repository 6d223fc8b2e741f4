//! Document validators.

pub mod dtdl;
