use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semrange::{parse_range, RangeParser, Semver, Version};

fn bench_version_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-rc.11", "1.0.0-rc.2"),
    ];
    let parsed: Vec<(Version, Version)> = cases
        .iter()
        .map(|(a, b)| (Version::parse(a).unwrap(), Version::parse(b).unwrap()))
        .collect();

    c.bench_function("version_compare", |b| {
        b.iter(|| {
            for (left, right) in &parsed {
                black_box(black_box(left).compare(black_box(right)));
            }
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let parser = RangeParser::new();
    let ranges = [
        "1.2.3 - 2.3.4",
        "~1.2.3",
        "^0.2.3",
        "1.2.x || >=2.5.0",
        "> 1.2.3 < 2.0.0",
        "*",
    ];

    c.bench_function("normalize_ranges", |b| {
        b.iter(|| {
            for range in ranges {
                black_box(parser.normalize(black_box(range)).ok());
            }
        })
    });
}

fn bench_parse_range(c: &mut Criterion) {
    let ranges = [
        ">=1.2.3 <2.0.0",
        "^1.2.3 || ~2.4",
        "1.2.* || 2.*",
        "1.2.3 - 2.0.0",
        "~1.2.1 >=1.2.3",
        "!=1.5.0 !=1.5.1",
        ">1.0.0 <3.0.0 || >=4.0.0",
    ];

    c.bench_function("parse_range", |b| {
        b.iter(|| {
            for range in ranges {
                black_box(parse_range(black_box(range)).ok());
            }
        })
    });
}

fn bench_matches(c: &mut Criterion) {
    let range = parse_range("^1.2 || ~2.4 || >=3.1.0-rc.1 <3.2.0").expect("parse range");
    let versions: Vec<Version> = ["1.2.3", "1.2.3-beta", "2.4.5", "1.9999.9999", "3.1.0", "4.0.0"]
        .iter()
        .map(|v| Version::parse(v).unwrap())
        .collect();

    c.bench_function("range_matches", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(range.matches(black_box(version)));
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3 <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("1.2.3", "1.2.* || 2.*"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, range) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(range)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0.0",
        "0.1.0",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "50.2.0",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)));
        })
    });
}

criterion_group!(
    benches,
    bench_version_compare,
    bench_normalize,
    bench_parse_range,
    bench_matches,
    bench_satisfies,
    bench_sort
);
criterion_main!(benches);
