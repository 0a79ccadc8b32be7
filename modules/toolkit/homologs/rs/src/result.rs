use contigprobe_core_rs::loc::{Interval, Orientation};
use contigprobe_io_rs::{bed, qfile};
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::Result;

#[derive(Clone, PartialEq, Debug, Constructor, Dissolve, Getters)]
pub struct Homolog {
    // Query contig id as reported by show-coords
    query: String,
    query_length: u64,
    // Sum of aligned reference basepairs over all hits
    aligned: u64,
    // aligned / reference length, rounded to 4 decimals
    reference_fraction: f64,
    // Merged runs / hits
    merge_ratio: f64,
    // Reference spans of individual hits, in input order
    hits: Vec<Interval<u64>>,
}

#[derive(Clone, PartialEq, Debug, Constructor, Dissolve, Getters)]
pub struct Report {
    reference: String,
    reference_length: u64,
    homologs: Vec<Homolog>,
}

fn short_id(name: &str) -> &str {
    name.split('|').next().unwrap_or(name)
}

impl Report {
    /// mummerplot query file entries, one per homolog, all in forward orientation.
    pub fn qfile_entries(&self) -> Result<Vec<qfile::Entry>> {
        self.homologs
            .iter()
            .map(|homolog| {
                qfile::Entry::new(
                    homolog.query.clone(),
                    homolog.query_length,
                    Orientation::Forward,
                )
            })
            .collect()
    }

    /// Annotation of the reference regions hit by the given homolog.
    pub fn bed_records(&self, homolog: &Homolog) -> Result<Vec<bed::Record>> {
        homolog
            .hits
            .iter()
            .map(|hit| bed::Record::new(self.reference.clone(), *hit, homolog.query.clone()))
            .collect()
    }

    /// Conventional file name for the annotation of a homolog: `<reference>_<query>.bed`,
    /// with both ids cut at the first `|`.
    pub fn bed_file_name(&self, homolog: &Homolog) -> String {
        format!(
            "{}_{}.bed",
            short_id(&self.reference),
            short_id(&homolog.query)
        )
    }

    /// Conventional file name for the mummerplot query file of this reference.
    pub fn qfile_name(&self) -> String {
        format!("{}.qfile", qfile::strip_polish_suffix(&self.reference))
    }
}
