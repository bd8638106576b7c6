use tourbot_core::lang::{detect_language, Lang};

#[test]
fn tamil_text_tags_ta() {
    assert_eq!(detect_language("பொங்கல் என்பது என்ன?"), Lang::Ta);
}

#[test]
fn english_text_tags_en() {
    assert_eq!(detect_language("Tell me about Meenakshi Temple"), Lang::En);
}

#[test]
fn empty_text_tags_en() {
    assert_eq!(detect_language(""), Lang::En);
}

#[test]
fn one_tamil_char_is_enough() {
    // A single code point anywhere in otherwise-Latin text flips the tag
    assert_eq!(detect_language("what is க?"), Lang::Ta);
}

#[test]
fn block_boundaries_count_as_tamil() {
    assert_eq!(detect_language("\u{0B80}"), Lang::Ta);
    assert_eq!(detect_language("\u{0BFF}"), Lang::Ta);
    // Neighbors just outside the block do not
    assert_eq!(detect_language("\u{0B7F}"), Lang::En);
    assert_eq!(detect_language("\u{0C00}"), Lang::En);
}

#[test]
fn tag_strings_match_contract() {
    assert_eq!(Lang::Ta.as_str(), "ta");
    assert_eq!(Lang::En.as_str(), "en");
}
