//! Input/output
mod ron;
