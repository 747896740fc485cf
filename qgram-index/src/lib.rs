//! Fuzzy prefix search over a list of named entities.
//!
//! Entity names are split into padded q-grams and stored in an inverted index. A
//! query only computes the prefix edit distance for entities that share enough
//! q-grams with it to possibly be within the allowed distance.

mod distance;
mod entity;
mod error;
mod postings;

pub use distance::prefix_edit_distance;
pub use entity::{Entity, Match};
pub use error::IndexError;
pub use postings::{merge_lists, Posting};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::postings::push_occurrence;

/// Lowercases and drops everything that isn't an ascii letter, digit or underscore.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Result of [`QGramIndex::find_matches`].
#[derive(Debug, Default)]
pub struct MatchSet<'a> {
    /// Ranked by distance, then by descending score.
    pub matches: Vec<Match<'a>>,
    pub ped_computations: usize,
}

#[derive(Debug)]
pub struct QGramIndex {
    q: usize,
    padding: String,
    inverted_lists: BTreeMap<String, Vec<Posting>>,
    entities: Vec<Entity>,
    with_synonyms: bool,
}

impl QGramIndex {
    pub fn new(q: usize, with_synonyms: bool) -> Result<Self, IndexError> {
        if q == 0 {
            return Err(IndexError::ZeroQ);
        }
        Ok(Self {
            q,
            padding: "$".repeat(q - 1),
            inverted_lists: BTreeMap::new(),
            entities: Vec::new(),
            with_synonyms,
        })
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn inverted_lists(&self) -> &BTreeMap<String, Vec<Posting>> {
        &self.inverted_lists
    }

    pub fn build_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), IndexError> {
        let path = path.as_ref();
        let start = Instant::now();
        let file = File::open(path)?;
        self.build_from_reader(BufReader::new(file))?;
        info!(
            "built {}-gram index over {} entities from {} in {:?}",
            self.q,
            self.entities.len(),
            path.display(),
            start.elapsed()
        );
        Ok(())
    }

    /// Reads one entity per line. The first line holds column headers and is skipped.
    pub fn build_from_reader(&mut self, reader: impl BufRead) -> Result<(), IndexError> {
        for (line_number, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let entity = Entity::from_tsv_line(&line).map_err(|value| IndexError::InvalidScore {
                line: line_number + 1,
                value,
            })?;
            self.add_entity(entity);
        }
        Ok(())
    }

    pub fn add_entity(&mut self, entity: Entity) {
        let entity_id = self.entities.len();
        let mut qgrams = self.compute_qgrams(&entity.name);
        if self.with_synonyms {
            for synonym in &entity.synonyms {
                qgrams.extend(self.compute_qgrams(synonym));
            }
        }
        for qgram in qgrams {
            push_occurrence(self.inverted_lists.entry(qgram).or_default(), entity_id);
        }
        self.entities.push(entity);
    }

    /// The q-grams of the normalized string, padded at the front only.
    pub fn compute_qgrams(&self, input: &str) -> Vec<String> {
        let padded = format!("{}{}", self.padding, normalize(input));
        if padded.len() < self.q {
            return Vec::new();
        }
        // normalize leaves only ascii, so byte windows are char windows
        (0..=padded.len() - self.q)
            .map(|i| padded[i..i + self.q].to_string())
            .collect()
    }

    /// All entities whose name (or a synonym) has a prefix within `delta` edits of `prefix`.
    pub fn find_matches(&self, prefix: &str, delta: usize) -> MatchSet<'_> {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return MatchSet::default();
        }
        let threshold = prefix.len() as isize - (self.q * delta) as isize;

        let qgrams = self.compute_qgrams(&prefix);
        let lists = qgrams
            .iter()
            .filter_map(|qgram| self.inverted_lists.get(qgram))
            .map(Vec::as_slice);

        let mut result = MatchSet::default();
        for posting in merge_lists(lists) {
            if (posting.frequency as isize) < threshold {
                continue;
            }
            let entity = &self.entities[posting.entity_id];
            let ped = prefix_edit_distance(&prefix, &normalize(&entity.name), delta);
            result.ped_computations += 1;
            if ped <= delta {
                result.matches.push(Match {
                    entity,
                    ped,
                    matched_synonym: None,
                });
                continue;
            }
            if self.with_synonyms {
                let mut best: Option<(usize, &str)> = None;
                for synonym in &entity.synonyms {
                    let ped = prefix_edit_distance(&prefix, &normalize(synonym), delta);
                    result.ped_computations += 1;
                    if ped <= delta && best.map_or(true, |(best_ped, _)| ped < best_ped) {
                        best = Some((ped, synonym));
                    }
                }
                if let Some((ped, synonym)) = best {
                    result.matches.push(Match {
                        entity,
                        ped,
                        matched_synonym: Some(synonym),
                    });
                }
            }
        }
        rank_matches(&mut result.matches);
        debug!(
            "{prefix:?} (delta {delta}): {} matches, {} ped computations",
            result.matches.len(),
            result.ped_computations
        );
        result
    }
}

/// Sorts by ascending distance, then descending score.
pub fn rank_matches(matches: &mut [Match<'_>]) {
    matches.sort_by(|a, b| {
        a.ped
            .cmp(&b.ped)
            .then_with(|| b.entity.score.cmp(&a.entity.score))
    });
}

#[cfg(test)]
mod test {
    use std::io::{Cursor, Write};

    use super::{normalize, Entity, IndexError, Posting, QGramIndex};

    const EXAMPLE: &str = "name\tscore\tdescription\nfrei\t3\tan adjective\nbrei\t2\ta dish\n";

    fn example_index() -> QGramIndex {
        let mut index = QGramIndex::new(3, false).unwrap();
        index.build_from_reader(Cursor::new(EXAMPLE)).unwrap();
        index
    }

    #[test]
    fn test_new() {
        let index = QGramIndex::new(3, false).unwrap();
        assert_eq!(index.q(), 3);
        assert_eq!(index.padding, "$$");
        assert!(index.inverted_lists().is_empty());
        assert!(matches!(QGramIndex::new(0, false), Err(IndexError::ZeroQ)));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("freiburg"), "freiburg");
        assert_eq!(normalize("Frei, burg !!"), "freiburg");
        assert_eq!(normalize("Ünter_den Linden 1"), "nter_denlinden1");
    }

    #[test]
    fn test_compute_qgrams() {
        let index = QGramIndex::new(3, false).unwrap();
        assert_eq!(
            index.compute_qgrams("freiburg"),
            vec!["$$f", "$fr", "fre", "rei", "eib", "ibu", "bur", "urg"]
        );
        assert!(index.compute_qgrams("").is_empty());
        assert!(index.compute_qgrams("!!").is_empty());
    }

    #[test]
    fn test_build_from_reader() {
        let index = example_index();
        let lists: Vec<(&str, Vec<Posting>)> = index
            .inverted_lists()
            .iter()
            .map(|(qgram, list)| (qgram.as_str(), list.clone()))
            .collect();
        assert_eq!(
            lists,
            vec![
                ("$$b", vec![Posting::new(1, 1)]),
                ("$$f", vec![Posting::new(0, 1)]),
                ("$br", vec![Posting::new(1, 1)]),
                ("$fr", vec![Posting::new(0, 1)]),
                ("bre", vec![Posting::new(1, 1)]),
                ("fre", vec![Posting::new(0, 1)]),
                ("rei", vec![Posting::new(0, 1), Posting::new(1, 1)]),
            ]
        );
        assert_eq!(index.entities()[1].description.as_deref(), Some("a dish"));
    }

    #[test]
    fn test_repeated_qgram_counts_twice() {
        let mut index = QGramIndex::new(2, false).unwrap();
        index.add_entity(Entity::new("aaa", 0));
        assert_eq!(index.inverted_lists()["aa"], vec![Posting::new(0, 2)]);
    }

    #[test]
    fn test_invalid_score() {
        let mut index = QGramIndex::new(3, false).unwrap();
        let err = index
            .build_from_reader(Cursor::new("name\tscore\nok\t1\nbad\tmany\n"))
            .unwrap_err();
        assert!(matches!(err, IndexError::InvalidScore { line: 3, ref value } if value == "many"));
    }

    #[test]
    fn test_build_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();
        let mut index = QGramIndex::new(3, false).unwrap();
        index.build_from_file(file.path()).unwrap();
        assert_eq!(index.entities().len(), 2);

        let mut missing = QGramIndex::new(3, false).unwrap();
        assert!(matches!(
            missing.build_from_file(file.path().with_extension("missing")),
            Err(IndexError::Io(_))
        ));
    }

    #[test]
    fn test_find_matches() {
        let mut index = QGramIndex::new(3, false).unwrap();
        index
            .build_from_reader(Cursor::new(
                "name\tscore\nfrei\t3\nbrei\t2\nfreiburg\t5\nbraunschweig\t4\n",
            ))
            .unwrap();

        let exact = index.find_matches("frei", 0);
        let names: Vec<_> = exact.matches.iter().map(|m| m.entity.name.as_str()).collect();
        // equal distance, ranked by score
        assert_eq!(names, vec!["freiburg", "frei"]);
        assert_eq!(exact.ped_computations, 2);

        let fuzzy = index.find_matches("frei", 1);
        let ranked: Vec<_> = fuzzy
            .matches
            .iter()
            .map(|m| (m.entity.name.as_str(), m.ped))
            .collect();
        assert_eq!(ranked, vec![("freiburg", 0), ("frei", 0), ("brei", 1)]);
        assert!(fuzzy.matches.iter().all(|m| m.matched_synonym.is_none()));
    }

    #[test]
    fn test_find_matches_empty_prefix() {
        let index = example_index();
        let result = index.find_matches("  ?! ", 2);
        assert!(result.matches.is_empty());
        assert_eq!(result.ped_computations, 0);
    }

    #[test]
    fn test_find_matches_synonyms() {
        let data = "name\tscore\tdescription\twikipedia\twikidata\tsynonyms\n\
                    Munich\t10\tcity\t\tQ1726\tMuenchen;Monaco di Baviera\n";
        let mut plain = QGramIndex::new(3, false).unwrap();
        plain.build_from_reader(Cursor::new(data)).unwrap();
        assert!(plain.find_matches("muench", 1).matches.is_empty());

        let mut with_synonyms = QGramIndex::new(3, true).unwrap();
        with_synonyms.build_from_reader(Cursor::new(data)).unwrap();
        let result = with_synonyms.find_matches("muench", 1);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].matched_synonym, Some("Muenchen"));
        assert_eq!(result.matches[0].ped, 0);
    }
}
