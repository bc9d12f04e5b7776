//! Benchmark – `wikiword::expand` and the raw token stream
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wikiword::{Tokens, expand};

const PARAGRAPH: &str = "The FrontPage links to RecentChanges and to [the manual](/docs/). \
Plain prose without any capitals keeps the text state busy for a while, \
then an image ![logo][img] and a CD or two. See also SandBox.\n\n";

/// Produce a deterministic page of at least `target_len` bytes by repeating a
/// paragraph that mixes prose, WikiWords, links and images.
fn make_page(target_len: usize) -> String {
    let mut page = String::with_capacity(target_len + PARAGRAPH.len());
    while page.len() < target_len {
        page.push_str(PARAGRAPH);
    }
    page
}

/// Same length, but nothing for the scanner to cut.
fn make_prose(target_len: usize) -> String {
    "lorem ipsum dolor sit amet ".repeat(target_len / 27 + 1)
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    for &len in &[1_000usize, 100_000] {
        for (name, input) in [("page", make_page(len)), ("prose", make_prose(len))] {
            group.throughput(Throughput::Bytes(input.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, len), &input, |b, input| {
                b.iter(|| black_box(expand(black_box(input.as_bytes()))));
            });
        }
    }
    group.finish();
}

fn bench_tokens(c: &mut Criterion) {
    let page = make_page(100_000);
    let mut group = c.benchmark_group("tokens");
    group.throughput(Throughput::Bytes(page.len() as u64));
    group.bench_function("count", |b| {
        b.iter(|| black_box(Tokens::new(black_box(page.as_bytes())).count()));
    });
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_expand, bench_tokens }
criterion_main!(benches);
