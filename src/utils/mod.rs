//! Utility functions

pub mod strings;
