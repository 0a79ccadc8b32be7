pub use classifier::{group_by_reference, Classifier};
pub use config::Config;
pub use result::{Homolog, Report};

mod classifier;
mod config;
mod result;
