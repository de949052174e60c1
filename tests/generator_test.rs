mod common;

#[test]
fn test_generate_equations() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let expected = common::generate_equations(file.path(), 5, 7).expect("Failed to generate equations");

    let content = std::fs::read_to_string(file.path()).expect("Failed to read file");
    assert_eq!(content.lines().count(), 5);
    assert_eq!(expected.len(), 5);

    for line in content.lines() {
        assert_eq!(line.split(' ').count(), 3, "not a 3 token line: {line}");
    }
}
