//! Command actions

pub mod edit;
pub mod location;
pub mod path;
pub mod value;
