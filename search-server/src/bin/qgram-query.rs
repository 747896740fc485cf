//! Interactive fuzzy search over an entity file, one query per line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use qgram_index::{normalize, MatchSet, QGramIndex};
use search_api_types::RESULT_LIMIT;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Tab separated entity file; the first line holds column headers.
    entities: PathBuf,
    /// Also index and match entity synonyms.
    #[arg(long)]
    with_synonyms: bool,
    #[arg(long = "q", default_value_t = 3)]
    q: usize,
}

fn print_results(out: &mut impl Write, result: &MatchSet<'_>, elapsed: Duration) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "Found {} matches. ", result.matches.len())?;
    let shown = result.matches.len().min(RESULT_LIMIT);
    if shown > 0 {
        writeln!(out, "The top-{shown} results are:")?;
        for (i, m) in result.matches.iter().take(shown).enumerate() {
            write!(out, "\n\x1b[1m({}) {}\x1b[0m ", i + 1, m.entity.name)?;
            match m.matched_synonym {
                Some(synonym) => writeln!(out, "(Matched Synonym: '{synonym}')")?,
                None => writeln!(out)?,
            }
            writeln!(
                out,
                "Description:   {}",
                m.entity.description.as_deref().unwrap_or_default()
            )?;
            if let Some(url) = &m.entity.wikipedia_url {
                writeln!(out, "Wikipedia-URL: {url}")?;
            }
            if let Some(id) = &m.entity.wikidata_id {
                writeln!(out, "Wikidata-URL:  http://www.wikidata.org/wiki/{id}")?;
            }
            writeln!(out, "PED:           {}", m.ped)?;
            writeln!(out, "Score:         {}", m.entity.score)?;
        }
    }
    writeln!(out)?;
    writeln!(
        out,
        "Time needed to find matches: {}ms, #PED computations: {}.",
        elapsed.as_millis(),
        result.ped_computations
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut index = QGramIndex::new(args.q, args.with_synonyms)?;
    index
        .build_from_file(&args.entities)
        .with_context(|| format!("Unable to build index from {}", args.entities.display()))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let mut line = String::new();
    loop {
        writeln!(out, "{}", "-".repeat(80))?;
        write!(out, "Query: ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = normalize(&line);
        let delta = query.len() / 4;
        let start = Instant::now();
        let result = index.find_matches(&query, delta);
        print_results(&mut out, &result, start.elapsed())?;
    }
    Ok(())
}
