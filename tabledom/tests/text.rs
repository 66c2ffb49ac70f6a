use tabledom::text::{
    char_width, display_width, line_count, max_line_width, to_cells, wrap_chars, wrap_words,
};

#[test]
fn test_display_width() {
    assert_eq!(display_width("Notes"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(char_width('語'), 2);
}

#[test]
fn test_max_line_width_splits_on_newlines() {
    assert_eq!(max_line_width("ab\nabcd\nabc"), 4);
    assert_eq!(max_line_width(""), 0);
}

#[test]
fn test_wrap_words() {
    assert_eq!(wrap_words("hello world", 5), vec!["hello", "world"]);
    assert_eq!(wrap_words("ripe and sweet", 8), vec!["ripe and", "sweet"]);
    assert_eq!(wrap_words("a\nbb", 10), vec!["a", "bb"]);
    assert!(wrap_words("anything", 0).is_empty());
}

#[test]
fn test_wrap_words_breaks_long_words() {
    assert_eq!(
        wrap_words("abcdefghij", 4),
        vec!["abcd", "efgh", "ij"]
    );
    assert_eq!(wrap_words("x abcdef", 3), vec!["x", "abc", "def"]);
}

#[test]
fn test_wrap_chars_wide_glyphs() {
    assert_eq!(wrap_chars("日本語", 4), vec!["日本", "語"]);
}

#[test]
fn test_line_count() {
    assert_eq!(line_count("ripe and sweet", 6), 3);
    assert_eq!(line_count("ripe and sweet", 14), 1);
    assert_eq!(line_count("", 10), 1);
}

#[test]
fn test_to_cells_saturates() {
    assert_eq!(to_cells(27), 27);
    assert_eq!(to_cells(usize::from(u16::MAX)), u16::MAX);
    assert_eq!(to_cells(70_001), u16::MAX);
}
