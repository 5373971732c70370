//! Emphasis scanning properties

use mdport_babel::common::emphasis::{parse_emphasis, strip_emphasis};
use mdport_babel::{Emphasis, Segment};
use proptest::prelude::*;

fn styled_word() -> impl Strategy<Value = (Emphasis, String)> {
    (
        prop_oneof![
            Just(Emphasis::None),
            Just(Emphasis::Bold),
            Just(Emphasis::Italic),
        ],
        "[a-z]{1,8}",
    )
}

fn markup((emphasis, word): &(Emphasis, String)) -> String {
    match emphasis {
        Emphasis::None => word.clone(),
        Emphasis::Bold => format!("**{word}**"),
        Emphasis::Italic => format!("*{word}*"),
    }
}

proptest! {
    #[test]
    fn test_balanced_markers_are_recovered(words in prop::collection::vec(styled_word(), 1..20)) {
        let text = words.iter().map(markup).collect::<Vec<_>>().join(" ");
        let plain = words.iter().map(|(_, w)| w.as_str()).collect::<Vec<_>>().join(" ");

        prop_assert_eq!(strip_emphasis(&text), plain);

        let styled: Vec<Segment> = parse_emphasis(&text)
            .into_iter()
            .filter(|s| s.emphasis != Emphasis::None)
            .collect();
        let expected: Vec<Segment> = words
            .iter()
            .filter(|(e, _)| *e != Emphasis::None)
            .map(|(e, w)| Segment::new(w.clone(), *e))
            .collect();
        prop_assert_eq!(styled, expected);
    }

    #[test]
    fn test_text_without_stars_is_one_plain_segment(text in "[^*]{1,60}") {
        prop_assert_eq!(parse_emphasis(&text), vec![Segment::plain(text.clone())]);
    }
}
