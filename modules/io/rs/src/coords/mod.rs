// Tabular output of MUMmer `show-coords -HT`: no header, one alignment per line.
//
// Columns:
// 1. S1: u64, alignment start in the reference
// 2. E1: u64, alignment end in the reference (S1 <= E1)
// 3. S2: u64, alignment start in the query
// 4. E2: u64, alignment end in the query (S2 > E2 for reverse complement alignments)
// 5. LEN 1: u64, aligned length in the reference
// 6. LEN 2: u64, aligned length in the query
// 7. % IDY: f64 [0, 100]
// 8. TAG 1: reference sequence id
// 9. TAG 2: query sequence id

// Coordinates are 1-based and closed, the way show-coords prints them.

mod reader;
mod record;

pub use reader::{parse, Reader};
pub use record::Record;
