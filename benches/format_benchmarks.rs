//! Performance benchmarks for named-placeholder formatting.
//!
//! This benchmark suite compares the named layer against the positional
//! engine it sits on:
//! - Positional vs named rendering of the same text
//! - Argument sources: map vs flat slice vs struct fields
//! - Cold compilation vs warm cache hits
//!
//! Set `RUST_LOG=debug` to see cache resets while the cold benchmarks run.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use nmfmt::{Engine, Fields, Formatter, Printf, Value, compile, flatten, named};
use std::hint::black_box;

const NAMED: &str = "$Name's age is $Age, and has $Item";
const POSITIONAL: &str = "%s's age is %d, and has %s";

#[derive(Fields)]
pub struct Player {
    pub name: &'static str,
    pub age: i64,
}

#[derive(Fields)]
pub struct Inventory {
    pub item: &'static str,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Positional engine vs named templates producing the same output.
fn sprintf_benchmarks(c: &mut Criterion) {
    init_logging();
    let mut group = c.benchmark_group("format/sprintf");
    let f = Formatter::new();

    group.bench_function("positional", |b| {
        let mut i = 0i64;
        b.iter(|| {
            i += 1;
            let mut out = String::new();
            Printf
                .format(
                    &mut out,
                    black_box(POSITIONAL),
                    &[Value::from("Player"), Value::from(i), Value::from("Potion")],
                )
                .unwrap();
            black_box(out)
        });
    });

    group.bench_function("named", |b| {
        let mut i = 0i64;
        b.iter(|| {
            i += 1;
            let args = [
                Value::from("Name"),
                Value::from("Player"),
                Value::from("Age"),
                Value::from(i),
                Value::from("Item"),
                Value::from("Potion"),
            ];
            black_box(f.sprintf(black_box(NAMED), &args).unwrap())
        });
    });

    group.bench_function("no_placeholders", |b| {
        b.iter(|| black_box(f.sprintf(black_box("hello"), ()).unwrap()));
    });

    group.bench_function("one_placeholder", |b| {
        let args = [Value::from("Name"), Value::from("Player")];
        b.iter(|| black_box(f.sprintf(black_box("hello, $Name"), &args).unwrap()));
    });

    group.finish();
}

/// Map vs flat slice vs struct-derived pairs.
fn argument_source_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/sources");
    let f = Formatter::new();

    group.bench_function("map", |b| {
        let mut i = 0i64;
        b.iter(|| {
            i += 1;
            let args = named!(Name = "Player", Age = i, Item = "Potion");
            black_box(f.sprintf(NAMED, &args).unwrap())
        });
    });

    group.bench_function("slice", |b| {
        let mut i = 0i64;
        b.iter(|| {
            i += 1;
            let args = [
                Value::from("Name"),
                Value::from("Player"),
                Value::from("Age"),
                Value::from(i),
                Value::from("Item"),
                Value::from("Potion"),
            ];
            black_box(f.sprintf(NAMED, &args).unwrap())
        });
    });

    group.bench_function("struct", |b| {
        b.iter(|| {
            let player = Player {
                name: "Player",
                age: 123,
            };
            let inventory = Inventory { item: "Potion" };
            let args = flatten(&[&player, &inventory]);
            black_box(f.sprintf("$name's age is $age, and has $item", &args).unwrap())
        });
    });

    group.finish();
}

/// Compilation cost with and without the cache.
fn cache_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/cache");
    let template = "$=a:q ${ b : 08.3f } literal 100% $c:#x ${=d}";
    group.throughput(Throughput::Bytes(template.len() as u64));

    group.bench_function("compile", |b| {
        let syntax = nmfmt::Syntax::default();
        b.iter(|| black_box(compile(black_box(template), &syntax)));
    });

    group.bench_function("warm", |b| {
        let f = Formatter::new();
        b.iter(|| black_box(f.cache().get(black_box(template))));
    });

    group.bench_function("thrashing", |b| {
        let f = Formatter::builder().cache_reset_limit(16).build();
        let templates: Vec<String> = (0..64).map(|i| format!("{template} #{i}")).collect();
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % templates.len();
            black_box(f.cache().get(&templates[i]))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    sprintf_benchmarks,
    argument_source_benchmarks,
    cache_benchmarks
);
criterion_main!(benches);
