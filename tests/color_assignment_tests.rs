use gantt_rs::core::{ColorPalette, ColorToken, color_for_key};

#[test]
fn color_for_key_is_deterministic() {
    let first = color_for_key("abc", 6).expect("index");
    for _ in 0..100 {
        assert_eq!(color_for_key("abc", 6).expect("index"), first);
    }
    assert_eq!(first, 0);
}

#[test]
fn color_for_key_matches_reference_string_hash() {
    // 31-multiplier hashes: "a" = 97, "ab" = 3105.
    assert_eq!(color_for_key("a", 10).expect("index"), 7);
    assert_eq!(color_for_key("ab", 10).expect("index"), 5);
    assert_eq!(color_for_key("ab", 1).expect("index"), 0);
}

#[test]
fn color_for_key_hashes_utf16_units() {
    // U+1F600 is the surrogate pair D83D DE00; hash = 0xD83D * 31 + 0xDE00.
    let expected = (0xD83D_i64 * 31 + 0xDE00) % 9;
    assert_eq!(color_for_key("\u{1F600}", 9).expect("index") as i64, expected);
}

#[test]
fn color_index_is_always_inside_palette() {
    for size in 1..16 {
        for key in ["", "p1", "project-alpha", "Ünïcödé", "42", "a much longer identifier"] {
            assert!(color_for_key(key, size).expect("index") < size);
        }
    }
}

#[test]
fn zero_sized_palette_is_an_error() {
    assert!(color_for_key("abc", 0).is_err());
    assert!(ColorPalette::new(Vec::new()).is_err());
}

#[test]
fn injected_palette_replaces_defaults() {
    let palette = ColorPalette::from_names(["only"]).expect("palette");
    assert_eq!(palette.len(), 1);
    assert_eq!(palette.token_for("anything").as_str(), "only");

    let default = ColorPalette::default();
    assert_eq!(default.len(), 6);
    let token = default.token_for("abc");
    assert_eq!(token, &default.tokens()[color_for_key("abc", 6).expect("index")]);
}

#[test]
fn palette_round_trips_as_json_list() {
    let palette = ColorPalette::from_names(["red", "green"]).expect("palette");
    let json = serde_json::to_string(&palette).expect("serialize");
    assert_eq!(json, r#"["red","green"]"#);
    let back: ColorPalette = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.tokens(), &[ColorToken::new("red"), ColorToken::new("green")]);
    assert!(serde_json::from_str::<ColorPalette>("[]").is_err());
}
