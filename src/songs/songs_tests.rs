pub(crate) use super::*;
use crate::songs::write_recommendations_to;
use serde_json::json;

fn rows() -> Vec<MetadataRow> {
    let values = vec![
        json!({"title": "Blue Train", "brand": "John Coltrane", "asin": "B001",
               "description": ["Hard bop session", "with Lee Morgan on trumpet"]}),
        json!({"title": "Moment's Notice", "brand": "John Coltrane", "asin": "B002",
               "description": ["Hard bop trumpet and saxophone"]}),
        json!({"title": "", "brand": "Unknown", "asin": "B003"}),
        json!({"title": "Iron Man", "brand": null, "asin": "B004"}),
        json!({"title": "War Pigs", "brand": "Black Sabbath", "asin": "B005", "tech1": "x"}),
    ];
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| match value {
            serde_json::Value::Object(map) => MetadataRow::new(i + 1, map),
            other => panic!("not an object: {other}"),
        })
        .collect()
}

#[test]
fn test_rows_filtered_to_complete_products() {
    let catalog = SongCatalog::from_rows(&rows(), Path::new("meta.json")).expect("valid rows");
    let titles: Vec<&str> = catalog.products().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Blue Train", "Moment's Notice", "War Pigs"]);
    assert_eq!(catalog.first_title(), Some("Blue Train"));
}

#[test]
fn test_combined_text() {
    let catalog = SongCatalog::from_rows(&rows(), Path::new("meta.json")).expect("valid rows");
    assert_eq!(
        catalog.products()[0].combined_text(),
        "Blue Train Hard bop session with Lee Morgan on trumpet"
    );
    assert_eq!(
        catalog.products()[1].combined_text(),
        "Moment's Notice Hard bop trumpet and saxophone"
    );
    // missing description still leaves the separator
    assert_eq!(catalog.products()[2].combined_text(), "War Pigs ");
}

#[test]
fn test_description_must_be_a_list() {
    let row = |description: serde_json::Value| match json!({
        "title": "Giant Steps", "brand": "John Coltrane", "asin": "B010",
        "description": description,
    }) {
        serde_json::Value::Object(map) => MetadataRow::new(1, map),
        other => panic!("not an object: {other}"),
    };

    for value in [json!("Modal jazz classic"), json!(7), json!([1, 2])] {
        let product = Product::from_row(&row(value), Path::new("meta.json")).expect("lenient");
        assert_eq!(product.description, None);
        assert_eq!(product.combined_text(), "Giant Steps ");
    }

    let product = Product::from_row(&row(json!(["Modal", "jazz"])), Path::new("meta.json"))
        .expect("list description");
    assert_eq!(product.combined_text(), "Giant Steps Modal jazz");
}

#[test]
fn test_missing_or_null_brand_is_dropped() {
    let rows: Vec<MetadataRow> = [
        json!({"title": "Paranoid", "asin": "B020"}),
        json!({"title": "Iron Man", "brand": null, "asin": "B021"}),
        json!({"title": "Planet Caravan", "brand": "Black Sabbath", "asin": "B022"}),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, value)| match value {
        serde_json::Value::Object(map) => MetadataRow::new(i + 1, map),
        other => panic!("not an object: {other}"),
    })
    .collect();

    let catalog = SongCatalog::from_rows(&rows, Path::new("meta.json")).expect("valid rows");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.first_title(), Some("Planet Caravan"));
}

#[test]
fn test_mistyped_field_reports_line() {
    let bad = match json!({"title": 42, "brand": "x", "asin": "y"}) {
        serde_json::Value::Object(map) => MetadataRow::new(9, map),
        other => panic!("not an object: {other}"),
    };
    let err = SongCatalog::from_rows(&[bad], Path::new("meta.json")).expect_err("title is a number");
    assert!(matches!(
        err,
        crate::PalateError::Json { line: Some(9), .. }
    ));
}

#[test]
fn test_recommender_excludes_query() {
    let catalog = SongCatalog::from_rows(&rows(), Path::new("meta.json")).expect("valid rows");
    let recommender = SongRecommender::fit(&catalog).expect("fit");

    assert!(recommender.contains("War Pigs"));
    assert!(!recommender.contains("war pigs"));

    let recs = recommender.recommend("Blue Train", 10).expect("known title");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].title, "Moment's Notice");
    assert!(recs.iter().all(|r| r.title != "Blue Train"));

    assert!(recommender.recommend("Paranoid", 10).is_none());
}

#[test]
fn test_empty_catalog_cannot_fit() {
    let catalog = SongCatalog::from_products(vec![]);
    assert!(catalog.is_empty());
    assert!(SongRecommender::fit(&catalog).is_err());
}

#[test]
fn test_csv_export() {
    let catalog = SongCatalog::from_rows(&rows(), Path::new("meta.json")).expect("valid rows");
    let recommender = SongRecommender::fit(&catalog).expect("fit");
    let recs = recommender.recommend("War Pigs", 10).expect("known title");

    let mut buffer = Vec::new();
    write_recommendations_to(&mut buffer, &recs).expect("csv");
    let text = String::from_utf8(buffer).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("title"));
    assert_eq!(lines.count(), 2);

    let mut buffer = Vec::new();
    write_recommendations_to(&mut buffer, &[]).expect("csv");
    assert_eq!(String::from_utf8(buffer).expect("utf8"), "title\n");
}

#[test]
fn test_csv_quotes_commas() {
    let recs = vec![Recommendation {
        index: 0,
        title: "Hello, Goodbye".to_string(),
        score: 0.5,
    }];
    let mut buffer = Vec::new();
    write_recommendations_to(&mut buffer, &recs).expect("csv");
    assert_eq!(
        String::from_utf8(buffer).expect("utf8"),
        "title\n\"Hello, Goodbye\"\n"
    );
}
