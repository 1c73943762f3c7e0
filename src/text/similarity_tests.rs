pub(crate) use super::*;
pub(crate) use crate::text::vectorize::TfidfVectorizer;

#[test]
fn test_cosine_similarity_identical() {
    let v = SparseVector::from_pairs(vec![(0, 1.0), (3, 2.0)]);
    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
}

#[test]
fn test_cosine_similarity_orthogonal_and_zero() {
    let a = SparseVector::from_pairs(vec![(0, 1.0)]);
    let b = SparseVector::from_pairs(vec![(1, 1.0)]);
    let zero = SparseVector::default();
    assert_eq!(cosine_similarity(&a, &b), 0.0);
    assert_eq!(cosine_similarity(&a, &zero), 0.0);
    assert_eq!(cosine_similarity(&zero, &zero), 0.0);
}

#[test]
fn test_cosine_similarity_dense() {
    let sim = cosine_similarity_dense(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).expect("same length");
    assert!((sim - 1.0).abs() < 1e-12);

    assert!(cosine_similarity_dense(&[1.0], &[1.0, 2.0]).is_err());
    assert!(cosine_similarity_dense(&[], &[]).is_err());
    assert_eq!(
        cosine_similarity_dense(&[0.0, 0.0], &[1.0, 0.0]).expect("same length"),
        0.0
    );
}

#[test]
fn test_similarity_matrix_symmetric_with_unit_diagonal() {
    let docs = vec![
        "smooth jazz saxophone",
        "jazz piano trio",
        "punk rock anthems",
        "rock and roll piano",
    ];
    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    let tfidf = vectorizer.fit_transform(&docs).expect("fit_transform");
    let sims = SimilarityMatrix::from_tfidf(&tfidf);

    assert_eq!(sims.len(), 4);
    for i in 0..4 {
        assert_eq!(sims.get(i, i), Some(1.0));
        for j in 0..4 {
            let (a, b) = (sims.get(i, j).expect("in range"), sims.get(j, i).expect("in range"));
            assert_eq!(a, b);
            assert!((0.0..=1.0 + 1e-12).contains(&a));
        }
    }
    assert_eq!(sims.get(0, 2), Some(0.0));
    assert!(sims.get(0, 1).expect("in range") > 0.0);
    assert_eq!(sims.get(4, 0), None);
    assert_eq!(sims.row(1).map(<[f64]>::len), Some(4));
    assert!(sims.row(9).is_none());
}

#[test]
fn test_similarity_matrix_dense_agrees_with_sparse() {
    let docs = vec!["blue moon", "blue sky", "moon river"];
    let mut vectorizer = TfidfVectorizer::new();
    let tfidf = vectorizer.fit_transform(&docs).expect("fit_transform");
    let sims = SimilarityMatrix::from_tfidf(&tfidf);

    let dense = cosine_similarity_dense(&tfidf.dense_row(0), &tfidf.dense_row(1))
        .expect("same length");
    assert!((sims.get(0, 1).expect("in range") - dense).abs() < 1e-12);
}
