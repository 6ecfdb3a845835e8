use criterion::{black_box, criterion_group, criterion_main, Criterion};
use path_template::PathTemplate;

fn compare_quoting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compare Quoting");

    let template = PathTemplate::new("/files/:name");

    let value_plain = ('a'..='z').chain('0'..='9').collect::<String>();
    let value_special = ('\u{20}'..='\u{7e}').collect::<String>();

    let path_plain = template.build([("name", &value_plain)]).unwrap();
    let path_quoted = template.build([("name", &value_special)]).unwrap();

    group.bench_function("build_plain", |b| {
        b.iter(|| {
            for _ in 0..10 {
                black_box(template.build([("name", &value_plain)]).unwrap());
            }
        });
    });

    group.bench_function("build_quoted", |b| {
        b.iter(|| {
            for _ in 0..10 {
                black_box(template.build([("name", &value_special)]).unwrap());
            }
        });
    });

    group.bench_function("match_plain", |b| {
        b.iter(|| {
            for _ in 0..10 {
                black_box(template.matches(&path_plain).unwrap());
            }
        });
    });

    group.bench_function("match_quoted", |b| {
        b.iter(|| {
            for _ in 0..10 {
                black_box(template.matches(&path_quoted).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, compare_quoting);
criterion_main!(benches);
