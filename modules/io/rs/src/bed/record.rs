use super::validate;
use contigprobe_core_rs::loc::Interval;
use derive_getters::{Dissolve, Getters};
use eyre::Result;

#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Dissolve, Getters)]
pub struct Record {
    seqid: String,
    interval: Interval<u64>,
    name: String,
}

impl Record {
    pub fn new(seqid: String, interval: Interval<u64>, name: String) -> Result<Self> {
        validate::seqid(&seqid)?;
        validate::name(&name)?;
        Ok(Self {
            seqid,
            interval,
            name,
        })
    }
}
