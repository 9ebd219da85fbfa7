use criterion::{criterion_group, criterion_main, Criterion};
use huff::{build_code_table, build_tree, encode, tally, Decoder};

const TEXT: &str = "In a hole in the ground there lived a hobbit. Not a nasty, dirty, wet hole, \
                    filled with the ends of worms and an oozy smell, nor yet a dry, bare, sandy \
                    hole with nothing in it to sit down on or to eat: it was a hobbit-hole, and \
                    that means comfort.";

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let input = TEXT.repeat(50);

    group.bench_function("tally", |b| b.iter(|| tally(input.chars())));

    let freq = tally(input.chars());
    group.bench_function("tree", |b| b.iter(|| build_tree(&freq).unwrap()));

    let tree = build_tree(&freq).unwrap();
    group.bench_function("code_table", |b| b.iter(|| build_code_table(&tree)));
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let input = TEXT.repeat(50);
    let table = build_code_table(&build_tree(&tally(input.chars())).unwrap());

    group.bench_function("encode", |b| b.iter(|| encode(input.chars(), &table).unwrap()));

    let bits = encode(input.chars(), &table).unwrap();
    let decoder = Decoder::new(&table).unwrap();
    group.bench_function("decode", |b| b.iter(|| decoder.decode(&bits).unwrap()));

    // Wide alphabet: every byte value, skewed.
    let wide: Vec<u8> = (0..20_000u32).map(|i| ((i * i) % 251) as u8).collect();
    let wide_table = build_code_table(&build_tree(&tally(wide.iter().copied())).unwrap());
    let wide_bits = encode(&wide, &wide_table).unwrap();
    let wide_decoder = Decoder::new(&wide_table).unwrap();
    group.bench_function("decode_wide", |b| {
        b.iter(|| wide_decoder.decode(&wide_bits).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
