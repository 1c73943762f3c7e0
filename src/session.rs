//! Interactive prompt loops.
//!
//! Both loops read one query per line from any [`BufRead`] and answer on
//! any [`Write`], so the binary drives them with stdin/stdout and tests
//! drive them with byte buffers. End of input ends a loop like its exit
//! word does, minus the farewell.

use crate::config::MiningConfig;
use crate::cuisine::{analyze_cuisine, title_case, RecipeBook};
use crate::error::Result;
use crate::songs::SongRecommender;
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt shown before each cuisine query.
pub const CUISINE_PROMPT: &str = "Please enter a cuisine type (or 'bye' to exit): ";

/// Prompt shown before each song query.
pub const SONG_PROMPT: &str = "Enter a song title for recommendations or type 'exit' to quit: ";

/// Reply for a cuisine or title that is not in the data.
pub fn no_recommendations(subject: &str) -> String {
    format!("We don\u{2019}t have recommendations for {subject}")
}

/// Read one line without its terminator; `None` at end of input.
fn read_query<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{text}")?;
    output.flush()?;
    Ok(())
}

/// Answer cuisine queries until `bye` or end of input.
///
/// Queries are trimmed and lowercased before matching.
///
/// # Errors
///
/// Returns [`PalateError::Session`](crate::PalateError::Session) on
/// terminal I/O failure and
/// [`PalateError::InvalidHyperparameter`](crate::PalateError::InvalidHyperparameter)
/// when `config` holds out-of-range thresholds.
pub fn run_cuisine_session<R: BufRead, W: Write>(
    book: &RecipeBook,
    config: &MiningConfig,
    mut input: R,
    mut output: W,
) -> Result<()> {
    loop {
        prompt(&mut output, CUISINE_PROMPT)?;
        let Some(line) = read_query(&mut input)? else {
            writeln!(output)?;
            debug!("cuisine session reached end of input");
            return Ok(());
        };

        let query = line.trim().to_lowercase();
        if query == "bye" {
            writeln!(output, "Goodbye!")?;
            return Ok(());
        }

        let Some(analysis) = analyze_cuisine(book, &query, config)? else {
            writeln!(output, "{}", no_recommendations(&title_case(&query)))?;
            continue;
        };

        writeln!(
            output,
            "Analyzing {} recipes for cuisine: {}",
            analysis.recipe_count, analysis.cuisine
        )?;
        writeln!(output, "Using support value: {:.4}", analysis.min_support)?;

        writeln!(output, "\nTop ingredient combinations:")?;
        for line in analysis.itemset_lines() {
            writeln!(output, "{line}")?;
        }
        writeln!(output, "\nRules with lift > {}:", analysis.lift_threshold)?;
        for line in analysis.rule_lines() {
            writeln!(output, "{line}")?;
        }
        writeln!(output, "\n")?;
    }
}

/// Answer song-title queries until `exit` (any case) or end of input.
///
/// Titles must match exactly.
///
/// # Errors
///
/// Returns [`PalateError::Session`](crate::PalateError::Session) on
/// terminal I/O failure.
pub fn run_song_session<R: BufRead, W: Write>(
    recommender: &SongRecommender,
    top_k: usize,
    mut input: R,
    mut output: W,
) -> Result<()> {
    loop {
        prompt(&mut output, SONG_PROMPT)?;
        let Some(title) = read_query(&mut input)? else {
            writeln!(output)?;
            debug!("song session reached end of input");
            return Ok(());
        };

        if title.to_lowercase() == "exit" {
            writeln!(output, "Exiting the recommender system. Goodbye!")?;
            return Ok(());
        }

        match recommender.recommend(&title, top_k) {
            Some(recommendations) => {
                writeln!(output, "Top recommendations for '{title}':")?;
                for (rank, rec) in recommendations.iter().enumerate() {
                    writeln!(output, "{}. {}", rank + 1, rec.title)?;
                }
            }
            None => writeln!(output, "{}", no_recommendations(&title))?,
        }
    }
}
