// Hit annotations in a BED4-like layout: seqid, start, end, name (tab-separated).
// Coordinates are written as provided by the caller. Records derived from show-coords keep its
// 1-based closed coordinates, so they are not converted to the 0-based half-open BED convention.

mod record;
pub mod validate;
mod writer;

pub use record::Record;
pub use writer::Writer;
