//! Human-readable rendering of dataset statistics.
//!
//! Headers and labels are colored with `colored`; the binary turns color
//! off when stdout is not a terminal.

use crate::cuisine::RecipeStats;
use crate::recommend::Recommendation;
use crate::songs::ColumnSummary;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Write a section header.
pub fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("=== {title} ===").cyan().bold())
}

/// Write an indented key-value pair.
pub fn kv<W: Write>(out: &mut W, key: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "  {}: {}", key.white().bold(), value)
}

fn header<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.bold())
}

/// Recipe collection overview: totals, per-cuisine counts and averages,
/// and the most common ingredients.
pub fn write_recipe_stats<W: Write>(out: &mut W, stats: &RecipeStats) -> io::Result<()> {
    section(out, "Recipes")?;
    kv(out, "Total number of instances (recipes)", stats.total_recipes)?;
    kv(out, "Number of unique cuisines", stats.unique_cuisines())?;

    let width = stats
        .cuisine_counts
        .iter()
        .map(|c| c.cuisine.len())
        .chain(std::iter::once("Cuisine Type".len()))
        .max()
        .unwrap_or_default();

    section(out, "Recipes per cuisine")?;
    header(out, &format!("{:<width$}  Number of Recipes", "Cuisine Type"))?;
    for count in &stats.cuisine_counts {
        writeln!(out, "{:<width$}  {}", count.cuisine, count.recipes)?;
    }

    section(out, "Average number of ingredients")?;
    header(out, &format!("{:<width$}  Average Number of Ingredients", "Cuisine Type"))?;
    for (cuisine, average) in &stats.average_ingredients {
        writeln!(out, "{cuisine:<width$}  {average:.6}")?;
    }

    section(out, "Most common ingredients overall")?;
    write_ingredient_counts(out, &stats.most_common)?;

    for (cuisine, counts) in &stats.most_common_by_cuisine {
        section(out, &format!("Most common ingredients for {cuisine}"))?;
        write_ingredient_counts(out, counts)?;
    }
    Ok(())
}

fn write_ingredient_counts<W: Write>(
    out: &mut W,
    counts: &[crate::cuisine::IngredientCount],
) -> io::Result<()> {
    let width = counts
        .iter()
        .map(|c| c.ingredient.len())
        .chain(std::iter::once("Ingredient".len()))
        .max()
        .unwrap_or_default();
    header(out, &format!("{:<width$}  Frequency", "Ingredient"))?;
    for count in counts {
        writeln!(out, "{:<width$}  {}", count.ingredient, count.count)?;
    }
    Ok(())
}

/// Column profile table of the raw song metadata.
pub fn write_column_summary<W: Write>(out: &mut W, columns: &[ColumnSummary]) -> io::Result<()> {
    section(out, "Exploration summary")?;
    let width = columns
        .iter()
        .map(|c| c.column.len())
        .chain(std::iter::once("Column".len()))
        .max()
        .unwrap_or_default();
    header(
        out,
        &format!(
            "{:<width$}  {:<9}  {:>10}  {:>18}  {:>16}  Unique Values or Note",
            "Column", "Data Type", "Null Count", "Empty String Count", "Empty List Count"
        ),
    )?;
    for c in columns {
        writeln!(
            out,
            "{:<width$}  {:<9}  {:>10}  {:>18}  {:>16}  {}",
            c.column, c.dtype, c.null_count, c.empty_string_count, c.empty_list_count, c.unique
        )?;
    }
    Ok(())
}

/// Catalog size and the saved recommendations for the first song.
pub fn write_song_overview<W: Write>(
    out: &mut W,
    songs: usize,
    first_title: &str,
    recommendations: &[Recommendation],
    saved_to: &Path,
) -> io::Result<()> {
    section(out, "Song catalog")?;
    kv(out, "Songs after filtering", songs)?;
    kv(out, "First song", first_title)?;
    kv(out, "Recommendations saved to", saved_to.display())?;
    for (rank, rec) in recommendations.iter().enumerate() {
        writeln!(out, "  {}. {} ({:.4})", rank + 1, rec.title, rec.score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cuisine::{Recipe, RecipeBook};
    use crate::songs::UniqueCount;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).expect("write to vec");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_recipe_stats() {
        let book = RecipeBook::from_recipes(vec![
            Recipe::new("greek", ["feta", "olives"]),
            Recipe::new("italian", ["pasta"]),
            Recipe::new("greek", ["feta"]),
        ]);
        let stats = RecipeStats::compute(&book, 10);
        let text = render(|out| write_recipe_stats(out, &stats));

        assert!(text.contains("=== Recipes ==="));
        assert!(text.contains("Total number of instances (recipes): 3"));
        assert!(text.contains("Number of unique cuisines: 2"));
        assert!(text.contains("greek         2\n"));
        assert!(text.contains("greek         1.500000\n"));
        assert!(text.contains("=== Most common ingredients for italian ==="));
    }

    #[test]
    fn test_column_summary() {
        let columns = vec![ColumnSummary {
            column: "description".to_string(),
            dtype: "object",
            null_count: 3,
            empty_string_count: 0,
            empty_list_count: 1,
            unique: UniqueCount::Unhashable,
        }];
        let text = render(|out| write_column_summary(out, &columns));
        assert!(text.contains("description"));
        assert!(text.contains("Contains unhashable types, unique count skipped"));
    }

    #[test]
    fn test_song_overview() {
        let recs = vec![Recommendation {
            index: 1,
            title: "Giant Steps".to_string(),
            score: 0.5,
        }];
        let text = render(|out| {
            write_song_overview(out, 2, "Blue Train", &recs, Path::new("out.csv"))
        });
        assert!(text.contains("First song: Blue Train"));
        assert!(text.contains("  1. Giant Steps (0.5000)"));
    }
}
