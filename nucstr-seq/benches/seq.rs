use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nucstr_seq::{
    correlation, find_motif, gc_content, levenshtein, ratcliff_obershelp, reverse_complement,
    which_re_sites, AlphabetTable, CircularSeq,
};

fn random_dna(len: usize, seed: u64) -> String {
    let bases = ['A', 'C', 'G', 'T'];
    let mut seq = String::with_capacity(len);
    let mut state = seed;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let table = AlphabetTable::builtin().unwrap();

    let seq_10k = random_dna(10_000, 42);
    group.bench_function("reverse_complement_10kb", |b| {
        b.iter(|| reverse_complement(&table, black_box(&seq_10k)))
    });

    let plasmid = CircularSeq::new(seq_10k.clone());
    group.bench_function("circular_slice_10kb", |b| {
        b.iter(|| plasmid.slice(black_box(Some(9_000)), black_box(Some(11_000))))
    });

    group.bench_function("gc_content_10kb", |b| b.iter(|| gc_content(black_box(&seq_10k))));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let table = AlphabetTable::builtin().unwrap();

    let seq_100k = random_dna(100_000, 42);
    group.bench_function("find_motif_ARY_100kb", |b| {
        b.iter(|| find_motif(&table, "ARY", black_box(&seq_100k)).unwrap().count())
    });
    group.bench_function("which_re_sites_100kb", |b| {
        b.iter(|| which_re_sites(&table, black_box(&seq_100k)).len())
    });

    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let table = AlphabetTable::builtin().unwrap();

    for len in [100usize, 500] {
        let x = random_dna(len, 42);
        let y = random_dna(len + 7, 7);
        group.bench_with_input(BenchmarkId::new("levenshtein", len), &(&x, &y), |b, (x, y)| {
            b.iter(|| levenshtein(black_box(x), black_box(y)))
        });
        group.bench_with_input(BenchmarkId::new("ratcliff_obershelp", len), &(&x, &y), |b, (x, y)| {
            b.iter(|| ratcliff_obershelp(black_box(x), black_box(y)))
        });
        group.bench_with_input(BenchmarkId::new("correlation", len), &x, |b, x| {
            b.iter(|| correlation(&table, black_box(x), None, true))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transforms, bench_search, bench_distance);
criterion_main!(benches);
