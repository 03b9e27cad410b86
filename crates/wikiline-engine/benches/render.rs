use criterion::{Criterion, criterion_group, criterion_main};
use wikiline_engine::{parse, render};

fn generate_source(lines: usize) -> String {
    let mut out = String::new();
    for i in 0..lines {
        match i % 5 {
            0 => out.push_str(&format!("h2. Section {i}\n")),
            1 => out.push_str("- item with http://example.com/path?a=1&b=2\n"),
            2 => out.push_str(" ** nested <b>item</b>\n"),
            3 => out.push_str("see !http://www.host.com/image.gif! and it's \"quoted\"\n"),
            _ => out.push('\n'),
        }
    }
    out
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let source = generate_source(1000);
    group.bench_function("parse", |b| {
        b.iter(|| parse(std::hint::black_box(&source)));
    });
    group.bench_function("parse_and_render", |b| {
        b.iter(|| render(std::hint::black_box(&source)));
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
