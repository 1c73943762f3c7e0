pub(crate) use super::*;
pub(crate) use crate::text::tokenize::WhitespaceTokenizer;

#[test]
fn test_vocabulary_is_alphabetical() {
    let docs = vec!["zebra apple", "mango apple"];
    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    let vocab = vectorizer.vocabulary();
    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab["apple"], 0);
    assert_eq!(vocab["mango"], 1);
    assert_eq!(vocab["zebra"], 2);
}

#[test]
fn test_smooth_idf_values() {
    let docs = vec!["hello world", "hello rust"];
    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    let idf = vectorizer.idf_values();
    let hello = vectorizer.vocabulary()["hello"];
    let rust = vectorizer.vocabulary()["rust"];
    // ln(3/3) + 1 and ln(3/2) + 1
    assert!((idf[hello] - 1.0).abs() < 1e-12);
    assert!((idf[rust] - (1.5f64.ln() + 1.0)).abs() < 1e-12);
}

#[test]
fn test_raw_idf_values() {
    let docs = vec!["hello world", "hello rust"];
    let mut vectorizer = TfidfVectorizer::new().with_smooth_idf(false);
    vectorizer.fit(&docs).expect("fit should succeed");

    let world = vectorizer.vocabulary()["world"];
    assert!((vectorizer.idf_values()[world] - (2.0f64.ln() + 1.0)).abs() < 1e-12);
}

#[test]
fn test_rows_are_unit_length() {
    let docs = vec!["jazz piano jazz", "rock guitar", "piano sonata"];
    let mut vectorizer = TfidfVectorizer::new();
    let matrix = vectorizer.fit_transform(&docs).expect("fit_transform");

    assert_eq!(matrix.n_rows(), 3);
    assert_eq!(matrix.n_cols(), vectorizer.vocabulary_size());
    for row in matrix.rows() {
        assert!((row.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_rare_terms_weigh_more() {
    let docs = vec!["common rare", "common", "common"];
    let mut vectorizer = TfidfVectorizer::new();
    let matrix = vectorizer.fit_transform(&docs).expect("fit_transform");

    let common = vectorizer.vocabulary()["common"];
    let rare = vectorizer.vocabulary()["rare"];
    assert!(matrix.row(0).get(rare) > matrix.row(0).get(common));
}

#[test]
fn test_stop_words_and_lowercase() {
    let docs = vec!["The Best of THE Beatles"];
    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    vectorizer.fit(&docs).expect("fit should succeed");

    let vocab = vectorizer.vocabulary();
    assert_eq!(vocab.len(), 2);
    assert!(vocab.contains_key("best"));
    assert!(vocab.contains_key("beatles"));
}

#[test]
fn test_case_preserved_without_lowercase() {
    let docs = vec!["Abba abba"];
    let mut vectorizer = TfidfVectorizer::new().with_lowercase(false);
    vectorizer.fit(&docs).expect("fit should succeed");
    assert_eq!(vectorizer.vocabulary_size(), 2);
}

#[test]
fn test_custom_tokenizer() {
    let docs = vec!["a-b c"];
    let mut vectorizer =
        TfidfVectorizer::new().with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    vectorizer.fit(&docs).expect("fit should succeed");
    assert!(vectorizer.vocabulary().contains_key("a-b"));
    assert!(vectorizer.vocabulary().contains_key("c"));
}

#[test]
fn test_sublinear_tf() {
    let docs = vec!["word word word word other"];

    let mut normal = TfidfVectorizer::new();
    let mut sublinear = TfidfVectorizer::new().with_sublinear_tf(true);
    let m_normal = normal.fit_transform(&docs).expect("fit");
    let m_sub = sublinear.fit_transform(&docs).expect("fit");

    let word = normal.vocabulary()["word"];
    // after normalisation the repeated term dominates less
    assert!(m_sub.row(0).get(word) < m_normal.row(0).get(word));
}

#[test]
fn test_unknown_terms_give_empty_row() {
    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&["alpha beta"]).expect("fit");
    let matrix = vectorizer.transform(&["gamma", "alpha"]).expect("transform");

    assert!(matrix.row(0).is_empty());
    assert_eq!(matrix.row(1).nnz(), 1);
    assert_eq!(matrix.dense_row(1).len(), 2);
}

#[test]
fn test_empty_inputs_are_errors() {
    let mut vectorizer = TfidfVectorizer::new();
    let empty: Vec<&str> = vec![];
    assert!(matches!(
        vectorizer.fit(&empty),
        Err(PalateError::EmptyInput(_))
    ));

    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    assert!(vectorizer.fit(&["the of and", "a"]).is_err());

    let unfitted = TfidfVectorizer::new();
    assert!(unfitted.transform(&["anything"]).is_err());
}

#[test]
fn test_sparse_vector_dot_and_merge() {
    let a = SparseVector::from_pairs(vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
    let b = SparseVector::from_pairs(vec![(5, 1.0), (2, 0.5), (1, 7.0)]);
    assert!((a.dot(&b) - 4.0).abs() < 1e-12);
    assert!((a.norm() - 14f64.sqrt()).abs() < 1e-12);

    let zeros = SparseVector::from_pairs(vec![(1, 0.0), (4, 1.0), (4, -1.0)]);
    assert!(zeros.is_empty());
    assert_eq!(a.iter().collect::<Vec<_>>(), vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
}
