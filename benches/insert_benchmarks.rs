use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordtree::{Mode, Tree};

const N: usize = 10_000;

// ─── Helper functions to generate word sequences ────────────────────────────

fn ordered_words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{i:06}")).collect()
}

fn random_words(n: usize) -> Vec<String> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut words = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        // Fold into a smaller space so repeats exercise the frequency path.
        words.push(format!("w{:06}", (x >> 33) % (n as u64 / 2)));
    }
    words
}

fn build(mode: Mode, words: &[String]) -> Tree {
    let mut tree = Tree::new(mode);
    tree.extend(words);
    if mode == Mode::Rbt {
        tree.set_black_root();
    }
    tree
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, words: &[String], sizes: &[usize]) {
    let mut group = c.benchmark_group(name);

    for &n in sizes {
        for mode in [Mode::Bst, Mode::Rbt] {
            group.bench_with_input(BenchmarkId::new(mode.to_string(), n), &words[..n], |b, words| {
                b.iter(|| build(mode, black_box(words)));
            });
        }
    }

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    // Plain mode is quadratic on sorted input; keep the sizes modest.
    bench_insert(c, "insert_ordered", &ordered_words(N / 4), &[N / 16, N / 4]);
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "insert_random", &random_words(N), &[N / 10, N]);
}

// ─── Search Benchmarks ──────────────────────────────────────────────────────

fn bench_search_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_random");
    let words = random_words(N);
    let probes = random_words(N / 2);

    for mode in [Mode::Bst, Mode::Rbt] {
        let tree = build(mode, &words);
        group.bench_function(BenchmarkId::new(mode.to_string(), N), |b| {
            b.iter(|| probes.iter().filter(|probe| tree.contains(black_box(probe))).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_ordered, bench_insert_random, bench_search_random);
criterion_main!(benches);
