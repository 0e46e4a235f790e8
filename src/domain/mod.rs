pub mod error;

// Panel data module
pub mod panel;
