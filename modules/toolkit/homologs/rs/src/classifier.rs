use ahash::AHashMap;
use contigprobe_core_rs::loc::{Interval, IntervalOp};
use contigprobe_io_rs::{coords, qfile};
use eyre::{ensure, eyre, Result};
use itertools::Itertools;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::config::Config;
use crate::result::{Homolog, Report};

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Split a show-coords table into per-reference groups, sorted by reference id.
pub fn group_by_reference(
    records: impl IntoIterator<Item = coords::Record>,
) -> Vec<(String, Vec<coords::Record>)> {
    records
        .into_iter()
        .into_group_map_by(|record| record.reference().to_owned())
        .into_iter()
        .sorted_unstable_by(|a, b| a.0.cmp(&b.0))
        .collect()
}

pub struct Classifier {
    config: Config,
    lengths: AHashMap<String, u64>,
    thread_pool: Option<ThreadPool>,
}

impl Classifier {
    pub fn new(config: Config, lengths: AHashMap<String, u64>) -> Self {
        Self {
            config,
            lengths,
            thread_pool: None,
        }
    }

    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Length of a contig, looked up by its exact id first and by its unpolished id second.
    pub fn length(&self, contig: &str) -> Option<u64> {
        self.lengths
            .get(contig)
            .or_else(|| self.lengths.get(qfile::strip_polish_suffix(contig)))
            .copied()
    }

    /// Find queries sharing contiguous homology with the reference.
    ///
    /// Hits are grouped by query, ignoring self hits and hits against other references. For each
    /// query with enough hits, the reference spans are merged: a merge ratio close to 1 means the
    /// hits land on distinct parts of the reference rather than piling up on a single repeat.
    pub fn classify(&self, reference: &str, hits: &[coords::Record]) -> Result<Report> {
        let reference_length = self
            .length(reference)
            .ok_or_else(|| eyre!("Unknown length for reference contig {}", reference))?;
        ensure!(
            reference_length > 0,
            "Reference contig {} has zero length",
            reference
        );

        let foreign = hits.iter().filter(|x| x.reference() != reference).count();
        if foreign > 0 {
            log::debug!(
                "Ignoring {} hits that don't belong to the reference {}",
                foreign,
                reference
            );
        }

        let groups = hits
            .iter()
            .filter(|x| x.reference() == reference && !x.is_self_hit())
            .into_group_map_by(|x| x.query());

        let mut homologs = Vec::new();
        for (query, hits) in groups.into_iter().sorted_unstable_by_key(|(query, _)| *query) {
            if hits.len() < *self.config.min_hits() {
                log::debug!(
                    "{} vs {}: {} hits, below the minimum of {}",
                    reference,
                    query,
                    hits.len(),
                    self.config.min_hits()
                );
                continue;
            }

            let aligned: u64 = hits.iter().map(|x| x.reference_aligned()).sum();
            let fraction = round4(aligned as f64 / reference_length as f64);

            let spans: Vec<Interval<u64>> = hits.iter().map(|x| x.as_interval()).collect();
            let merged = Interval::merge(&spans);
            let Some(ratio) = merged.ratio() else {
                continue;
            };

            if !self.config.accepts(ratio, fraction) {
                log::debug!(
                    "{} vs {}: rejected with merge ratio {:.4} and reference fraction {}",
                    reference,
                    query,
                    ratio,
                    fraction
                );
                continue;
            }

            let query_length = self
                .length(query)
                .ok_or_else(|| eyre!("Unknown length for query contig {}", query))?;
            homologs.push(Homolog::new(
                query.to_owned(),
                query_length,
                aligned,
                fraction,
                ratio,
                spans,
            ));
        }

        log::info!(
            "{} shares homology with {}",
            reference,
            homologs.iter().map(|x| x.query()).join(",")
        );
        Ok(Report::new(reference.to_owned(), reference_length, homologs))
    }

    /// Classify every (reference, hits) group. Groups are processed in parallel, inside the
    /// configured thread pool if there is one. Reports follow the order of the groups.
    pub fn classify_all(&self, groups: &[(String, Vec<coords::Record>)]) -> Result<Vec<Report>> {
        let run = || {
            groups
                .par_iter()
                .map(|(reference, hits)| self.classify(reference, hits))
                .collect::<Result<Vec<_>>>()
        };
        match &self.thread_pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::ThreadPoolBuilder;

    fn hit(reference: &str, query: &str, start: u64, end: u64) -> coords::Record {
        let length = end - start + 1;
        coords::Record::new(
            Interval::new(start, end).unwrap(),
            1,
            length,
            length,
            length,
            99.0,
            reference.to_owned(),
            query.to_owned(),
        )
        .unwrap()
    }

    fn lengths() -> AHashMap<String, u64> {
        [("ref", 10_000), ("dispersed", 5_000), ("stacked", 5_000), ("ref2", 1_000)]
            .into_iter()
            .map(|(name, length)| (name.to_owned(), length))
            .collect()
    }

    fn hits() -> Vec<coords::Record> {
        vec![
            hit("ref", "ref", 1, 10_000),
            hit("ref", "dispersed|arrow", 100, 199),
            hit("ref", "dispersed|arrow", 1_000, 1_099),
            hit("ref", "dispersed|arrow", 2_000, 2_099),
            hit("ref", "dispersed|arrow", 3_000, 3_099),
            hit("ref", "stacked", 5_000, 5_400),
            hit("ref", "stacked", 5_100, 5_500),
            hit("ref", "stacked", 5_500, 5_600),
            hit("ref", "stacked", 7_000, 7_100),
            hit("ref", "sparse", 100, 199),
            hit("ref", "sparse", 900, 999),
            hit("other", "dispersed|arrow", 1, 1_000),
        ]
    }

    #[test]
    fn test_classify() -> Result<()> {
        let classifier = Classifier::new(Config::default(), lengths());
        let report = classifier.classify("ref", &hits())?;

        assert_eq!(report.reference(), "ref");
        assert_eq!(*report.reference_length(), 10_000);
        assert_eq!(report.homologs().len(), 1);

        let homolog = &report.homologs()[0];
        assert_eq!(homolog.query(), "dispersed|arrow");
        assert_eq!(*homolog.query_length(), 5_000);
        assert_eq!(*homolog.aligned(), 400);
        assert_eq!(*homolog.reference_fraction(), 0.04);
        assert_eq!(*homolog.merge_ratio(), 1.0);
        assert_eq!(homolog.hits().len(), 4);
        Ok(())
    }

    #[test]
    fn test_thresholds_are_configurable() -> Result<()> {
        // "stacked" merges into 2 runs out of 4 hits, "sparse" has only 2 hits
        let config = Config::new(2, 0.4, 0.01)?;
        let classifier = Classifier::new(config, lengths());

        let err = classifier.classify("ref", &hits()).unwrap_err();
        assert!(err.to_string().contains("sparse"), "{}", err);

        let mut lengths = lengths();
        lengths.insert("sparse".to_owned(), 3_000);
        let classifier = Classifier::new(Config::new(2, 0.4, 0.01)?, lengths);
        let report = classifier.classify("ref", &hits())?;
        let queries = report.homologs().iter().map(|x| x.query().as_str()).collect_vec();
        assert_eq!(queries, ["dispersed|arrow", "sparse", "stacked"]);

        let stacked = &report.homologs()[2];
        assert_eq!(*stacked.merge_ratio(), 0.5);
        assert_eq!(*stacked.aligned(), 401 + 401 + 101 + 101);
        Ok(())
    }

    #[test]
    fn test_fraction_threshold() -> Result<()> {
        let config = Config::new(4, 0.75, 0.05)?;
        let report = Classifier::new(config, lengths()).classify("ref", &hits())?;
        assert!(report.homologs().is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_reference() {
        let classifier = Classifier::new(Config::default(), lengths());
        assert!(classifier.classify("missing", &hits()).is_err());

        let mut lengths = lengths();
        lengths.insert("empty".to_owned(), 0);
        let classifier = Classifier::new(Config::default(), lengths);
        assert!(classifier.classify("empty", &[]).is_err());
    }

    #[test]
    fn test_no_hits() -> Result<()> {
        let classifier = Classifier::new(Config::default(), lengths());
        let report = classifier.classify("ref", &[])?;
        assert!(report.homologs().is_empty());
        Ok(())
    }

    #[test]
    fn test_classify_all() -> Result<()> {
        let mut records = hits();
        for start in [1, 201, 401, 601] {
            records.push(hit("ref2", "dispersed|arrow", start, start + 99));
        }
        let groups = group_by_reference(records);
        let references = groups.iter().map(|x| x.0.as_str()).collect_vec();
        assert_eq!(references, ["other", "ref", "ref2"]);

        // "other" has no known length
        let classifier = Classifier::new(Config::default(), lengths());
        assert!(classifier.classify_all(&groups).is_err());

        let pool = ThreadPoolBuilder::new().num_threads(2).build()?;
        let classifier = Classifier::new(Config::default(), lengths()).set_thread_pool(pool);
        let reports = classifier.classify_all(&groups[1..])?;
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].reference(), "ref");
        assert_eq!(reports[1].reference(), "ref2");
        assert_eq!(*reports[1].homologs()[0].reference_fraction(), 0.4);
        Ok(())
    }
}
