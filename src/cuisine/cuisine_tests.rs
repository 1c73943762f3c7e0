pub(crate) use super::*;
use crate::error::PalateError;
use std::io::Write;

fn sample_book() -> RecipeBook {
    RecipeBook::from_recipes(vec![
        Recipe::new("italian", ["pasta", "garlic", "basil"]),
        Recipe::new("mexican", ["tortilla", "garlic"]),
        Recipe::new("italian", ["pasta", "tomato"]),
        Recipe::new("greek", ["feta", "garlic", "olive oil", "oregano"]),
        Recipe::new("mexican", ["tortilla", "beans", "cumin"]),
    ])
}

#[test]
fn test_load_ignores_extra_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"id": 10259, "cuisine": "greek", "ingredients": ["feta", "olives"]}},
           {{"id": 25693, "cuisine": "southern_us", "ingredients": ["flour"]}}]"#
    )
    .expect("write");

    let book = RecipeBook::load(file.path()).expect("valid recipes");
    assert_eq!(book.len(), 2);
    assert_eq!(book.recipes()[0].cuisine, "greek");
    assert_eq!(book.recipes()[1].ingredients, ["flour"]);
}

#[test]
fn test_load_missing_file() {
    let err = RecipeBook::load(std::path::Path::new("/nonexistent/recipes.json"))
        .expect_err("missing file");
    assert!(matches!(err, PalateError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/recipes.json"));
}

#[test]
fn test_load_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"[{{"cuisine": "greek"}}]"#).expect("write");
    let err = RecipeBook::load(file.path()).expect_err("ingredients missing");
    assert!(matches!(err, PalateError::Json { line: None, .. }));
}

#[test]
fn test_by_cuisine_case_insensitive() {
    let book = sample_book();
    assert_eq!(book.by_cuisine("ITALIAN").count(), 2);
    assert!(book.has_cuisine("Greek"));
    assert!(!book.has_cuisine("thai"));
}

#[test]
fn test_stats_counts() {
    let stats = RecipeStats::compute(&sample_book(), 10);
    assert_eq!(stats.total_recipes, 5);
    assert_eq!(stats.unique_cuisines(), 3);

    let counts: Vec<(&str, usize)> = stats
        .cuisine_counts
        .iter()
        .map(|c| (c.cuisine.as_str(), c.recipes))
        .collect();
    // italian and mexican tie; italian was seen first
    assert_eq!(counts, vec![("italian", 2), ("mexican", 2), ("greek", 1)]);
}

#[test]
fn test_stats_average_ingredients_sorted_by_name() {
    let stats = RecipeStats::compute(&sample_book(), 10);
    let names: Vec<&str> = stats
        .average_ingredients
        .iter()
        .map(|(c, _)| c.as_str())
        .collect();
    assert_eq!(names, vec!["greek", "italian", "mexican"]);
    assert!((stats.average_ingredients[0].1 - 4.0).abs() < 1e-12);
    assert!((stats.average_ingredients[1].1 - 2.5).abs() < 1e-12);
    assert!((stats.average_ingredients[2].1 - 2.5).abs() < 1e-12);
}

#[test]
fn test_stats_most_common() {
    let stats = RecipeStats::compute(&sample_book(), 3);
    let top: Vec<(&str, usize)> = stats
        .most_common
        .iter()
        .map(|c| (c.ingredient.as_str(), c.count))
        .collect();
    assert_eq!(top, vec![("garlic", 3), ("pasta", 2), ("tortilla", 2)]);

    let cuisines: Vec<&str> = stats
        .most_common_by_cuisine
        .iter()
        .map(|(c, _)| c.as_str())
        .collect();
    assert_eq!(cuisines, vec!["italian", "mexican", "greek"]);
    assert_eq!(stats.most_common_by_cuisine[0].1[0].ingredient, "pasta");
    assert_eq!(stats.most_common_by_cuisine[2].1.len(), 3);
}

#[test]
fn test_stats_empty_book() {
    let stats = RecipeStats::compute(&RecipeBook::default(), 10);
    assert_eq!(stats.total_recipes, 0);
    assert_eq!(stats.unique_cuisines(), 0);
    assert!(stats.most_common.is_empty());
}
