use comment_toggle::{Position, Selection, TextBuffer, toggle_block_comment};
use comment_toggle_lang::LanguageRegistry;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox /* jumps */ over the lazy dog (comment-toggle line)\n"
        ));
    }
    out.pop();
    out
}

fn random_selections(line_count: usize, count: usize) -> Vec<Selection> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..count)
        .map(|_| {
            let line = rng.gen_range(1..=line_count);
            let start = rng.gen_range(1..40);
            let end = rng.gen_range(start..70);
            Selection::new(Position::new(line, start), Position::new(line, end))
        })
        .collect()
}

fn bench_toggle_random_selections(c: &mut Criterion) {
    let text = large_text(10_000);
    let languages = LanguageRegistry::with_defaults();
    let selections = random_selections(10_000, 100);

    c.bench_function("toggle/100_random_selections", |b| {
        b.iter_batched(
            || TextBuffer::new(&text, "c"),
            |mut buffer| {
                for selection in &selections {
                    black_box(toggle_block_comment(&mut buffer, &languages, *selection).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_toggle_round_trip(c: &mut Criterion) {
    let languages = LanguageRegistry::with_defaults();
    c.bench_function("toggle/round_trip_single_line", |b| {
        b.iter(|| {
            let mut buffer = TextBuffer::new(black_box("let value = compute(input);"), "rust");
            let selection = Selection::new(Position::new(1, 13), Position::new(1, 27));
            let added = toggle_block_comment(&mut buffer, &languages, selection)
                .unwrap()
                .unwrap();
            black_box(toggle_block_comment(&mut buffer, &languages, added).unwrap());
        })
    });
}

criterion_group!(benches, bench_toggle_random_selections, bench_toggle_round_trip);
criterion_main!(benches);
