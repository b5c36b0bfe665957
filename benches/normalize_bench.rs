use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use farsinum::{Normalizer, to_persian_digits, to_words};
use std::hint::black_box;

const POOL: &[&str] = &[
    "سلام دنیا، این یک متن نمونه است.",
    "كتاب هاي عربي با  فاصله   اضافه .",
    "\"نقل قول\" و ادامه ی متن...",
    "خوب ترین روز ها در سال ۱۴۰۲ بود!",
    "قیمت 2.5 دلار است؟\r\n\r\n\r\nپاراگراف بعدی",
    "کتاب\u{200C}ها و دفتر\u{200C}ها",
];

fn corpus(size_kb: usize) -> String {
    let mut out = String::with_capacity(size_kb * 1024);
    let mut i = 0;
    while out.len() < size_kb * 1024 {
        out.push_str(POOL[i % POOL.len()]);
        out.push(if i % 5 == 4 { '\n' } else { ' ' });
        i += 1;
    }
    out
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::persian();
    let mut group = c.benchmark_group("normalize");
    for size_kb in [1, 16, 128] {
        let text = corpus(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("raw", size_kb), &text, |b, t| {
            b.iter(|| normalizer.normalize(black_box(t)).len())
        });

        let canonical = normalizer.normalize(&text).into_owned();
        group.bench_with_input(BenchmarkId::new("canonical", size_kb), &canonical, |b, t| {
            b.iter(|| normalizer.normalize(black_box(t)).len())
        });
    }
    group.finish();
}

fn bench_numerals(c: &mut Criterion) {
    let mut group = c.benchmark_group("numerals");
    group.bench_function("to_words/123456789", |b| {
        b.iter(|| to_words(black_box(123_456_789i64)))
    });
    group.bench_function("to_words/i64::MAX", |b| b.iter(|| to_words(black_box(i64::MAX))));
    let digits = "09123456789 ".repeat(64);
    group.bench_function("to_persian_digits/768B", |b| {
        b.iter(|| to_persian_digits(black_box(digits.as_str())).len())
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_numerals);
criterion_main!(benches);
