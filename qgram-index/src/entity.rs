/// A single row of the entity file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    /// Popularity, higher ranks first among equal distances.
    pub score: i64,
    pub description: Option<String>,
    pub wikipedia_url: Option<String>,
    pub wikidata_id: Option<String>,
    pub synonyms: Vec<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
            description: None,
            wikipedia_url: None,
            wikidata_id: None,
            synonyms: Vec::new(),
        }
    }

    /// Parses one tab separated line. Trailing columns may be missing.
    pub(crate) fn from_tsv_line(line: &str) -> Result<Self, String> {
        let mut parts = line.split('\t');
        let name = parts.next().unwrap_or_default().to_string();
        let score = match parts.next() {
            Some(score) => score.trim().parse().map_err(|_| score.to_string())?,
            None => 0,
        };
        let mut optional = || {
            parts
                .next()
                .filter(|part| !part.is_empty())
                .map(str::to_string)
        };
        let description = optional();
        let wikipedia_url = optional();
        let wikidata_id = optional();
        let synonyms = optional()
            .map(|synonyms| synonyms.split(';').map(str::to_string).collect())
            .unwrap_or_default();
        Ok(Self {
            name,
            score,
            description,
            wikipedia_url,
            wikidata_id,
            synonyms,
        })
    }
}

/// An entity that matched a query, with the distance it matched at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub entity: &'a Entity,
    pub ped: usize,
    /// Set when the entity only matched through one of its synonyms.
    pub matched_synonym: Option<&'a str>,
}
