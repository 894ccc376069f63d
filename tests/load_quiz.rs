use knowledge_quiz::{DatasetError, LoadError, QuizDataset, load_questions_from_json};

#[test]
fn test_load_sample_file_matches_builtin() {
    let loaded = load_questions_from_json("data/sample_questions.json").unwrap();
    let builtin = QuizDataset::sample();

    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.questions(), builtin.questions());
}

#[test]
fn test_load_empty_file_is_invalid() {
    let err = load_questions_from_json("tests/fixtures/empty.json").unwrap_err();
    match err {
        LoadError::Invalid { source, .. } => assert_eq!(source, DatasetError::Empty),
        other => panic!("Expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_load_duplicate_ids_is_invalid() {
    let err = load_questions_from_json("tests/fixtures/duplicate_ids.json").unwrap_err();
    match err {
        LoadError::Invalid { source, .. } => assert_eq!(source, DatasetError::DuplicateId(1)),
        other => panic!("Expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_load_missing_field_is_parse_error() {
    let err = load_questions_from_json("tests/fixtures/malformed.json").unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "got {err:?}");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_questions_from_json("tests/fixtures/does_not_exist.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}
