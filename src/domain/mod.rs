pub mod artifact;
pub mod change;
pub mod prompt;
pub mod revision;
