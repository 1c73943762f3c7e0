pub(crate) use super::*;

#[test]
fn test_english_list_size() {
    let filter = StopWordsFilter::english();
    assert_eq!(filter.len(), 318);
    assert_eq!(ENGLISH_STOP_WORDS.len(), 318);
}

#[test]
fn test_filter_preserves_order_and_case() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["The", "Best", "OF", "Miles", "Davis"];
    assert_eq!(filter.filter(&tokens), vec!["Best", "Miles", "Davis"]);
}

#[test]
fn test_filter_owned() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["live".to_string(), "at".to_string(), "newport".to_string()];
    assert_eq!(filter.filter_owned(tokens), vec!["live", "newport"]);
}

#[test]
fn test_is_stop_word_case_insensitive() {
    let filter = StopWordsFilter::english();
    assert!(filter.is_stop_word("the"));
    assert!(filter.is_stop_word("THE"));
    assert!(filter.is_stop_word("Yourselves"));
    assert!(!filter.is_stop_word("jazz"));
    assert!(!filter.is_stop_word(""));
}

#[test]
fn test_custom_filter() {
    let filter = StopWordsFilter::new(vec!["Foo", "bar"]);
    assert_eq!(filter.len(), 2);
    assert_eq!(filter.filter(&["foo", "baz", "BAR"]), vec!["baz"]);
}

#[test]
fn test_empty_filter_keeps_everything() {
    let filter = StopWordsFilter::new(Vec::<String>::new());
    assert!(filter.is_empty());
    assert_eq!(filter.filter(&["the", "a"]), vec!["the", "a"]);
}
