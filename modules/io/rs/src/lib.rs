pub mod bed;
pub mod coords;
pub mod qfile;
mod traits;

pub use traits::{ReadRecord, WriteRecord};
