/// Dataset-assigned argument identifier.
/// Example: `A01002`
pub type ArgumentId = String;
/// Identifier for the source that produced a batch of records.
/// Examples: `train`, `/data/touche23/arguments-test.tsv`
pub type SourceId = String;
/// Single-character sub-dataset prefix taken from an argument id.
/// Examples: `A`, `D`, `E`
pub type SubdatasetCode = char;
/// Corpus tag written on every emitted node.
/// Example: `touche-23`
pub type DatasetTag = String;
/// Column header name in a tabular source.
/// Examples: `Argument ID`, `Conclusion`
pub type ColumnName = String;
