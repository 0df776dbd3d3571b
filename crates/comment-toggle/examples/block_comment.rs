use comment_toggle::{Position, Selection, TextBuffer, toggle_block_comment};
use comment_toggle_lang::LanguageRegistry;

fn main() {
    let languages = LanguageRegistry::with_defaults();
    let mut buffer = TextBuffer::new("fn main() {\n    println!(\"hi\");\n}\n", "rust");

    // Comment out the call's argument, then restore it.
    let selection = Selection::new(Position::new(2, 14), Position::new(2, 18));
    let selection = toggle_block_comment(&mut buffer, &languages, selection)
        .unwrap()
        .unwrap();
    assert_eq!(buffer.text(), "fn main() {\n    println!(/* \"hi\" */);\n}\n");

    toggle_block_comment(&mut buffer, &languages, selection).unwrap();
    assert_eq!(buffer.text(), "fn main() {\n    println!(\"hi\");\n}\n");
}
