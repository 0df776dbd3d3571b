use comment_toggle::{Position, Selection, TextBuffer, toggle_block_comment};
use comment_toggle_lang::LanguageRegistry;
use proptest::prelude::*;

fn position(lines: &[String], line_seed: usize, column_seed: usize) -> Position {
    let line = line_seed % lines.len();
    let column = column_seed % (lines[line].chars().count() + 1);
    Position::new(line + 1, column + 1)
}

proptest! {
    #[test]
    fn add_then_remove_restores_text(
        lines in prop::collection::vec("[a-z ]{0,8}", 1..4),
        language in prop::sample::select(vec!["c", "html", "ocaml", "haskell", "lua"]),
        anchor in (0usize..64, 0usize..64),
        active in (0usize..64, 0usize..64),
    ) {
        let anchor = position(&lines, anchor.0, anchor.1);
        let active = position(&lines, active.0, active.1);
        prop_assume!(anchor != active);

        let languages = LanguageRegistry::with_defaults();
        let original = lines.join("\n");
        let mut buffer = TextBuffer::new(&original, language);

        let added = toggle_block_comment(&mut buffer, &languages, Selection::new(anchor, active))
            .unwrap()
            .unwrap();
        prop_assert_ne!(buffer.text(), original.clone());

        let removed = toggle_block_comment(&mut buffer, &languages, added).unwrap().unwrap();
        prop_assert_eq!(buffer.text(), original);
        prop_assert_eq!(removed.range(), Selection::new(anchor, active).range());
    }

    #[test]
    fn collapsed_add_places_cursor_between_spaces(
        line in "[a-z ]{0,12}",
        column_seed in 0usize..64,
    ) {
        let languages = LanguageRegistry::with_defaults();
        let lines = vec![line.clone()];
        let at = position(&lines, 0, column_seed);
        let mut buffer = TextBuffer::new(&line, "c");

        let cursor = toggle_block_comment(&mut buffer, &languages, Selection::collapsed(at))
            .unwrap()
            .unwrap();

        prop_assert_eq!(cursor, Selection::collapsed(Position::new(1, at.column + 3)));
        let text: String = buffer.text().chars().skip(at.column - 1).take(6).collect();
        prop_assert_eq!(text, "/*  */");
    }
}
