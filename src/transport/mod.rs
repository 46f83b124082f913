/// Filesystem reads and JSON-lines persistence.
pub mod fs;
