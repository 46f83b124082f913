/// Tab-separated split file source.
pub mod tsv_source;
