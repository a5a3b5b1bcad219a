use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rota_core::recurrence::next_date;
use rota_core::rule::Rule;

fn bench_rule_parsing(c: &mut Criterion) {
    c.bench_function("parse_month_rule", |b| {
        b.iter(|| {
            black_box("m 1,15,-1 1,3,5,7,9,11")
                .parse::<Rule>()
                .unwrap()
        })
    });
}

fn bench_next_date_stale_step_rule(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let anchor = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let rule = Rule::EveryNDays { interval: 7 };

    c.bench_function("next_date_every_7_days_stale_anchor", |b| {
        b.iter(|| next_date(black_box(now), black_box(anchor), black_box(&rule)).unwrap())
    });
}

fn bench_next_date_sparse_month_scan(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
    let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let rule = Rule::OnMonthDays {
        days: vec![31],
        months: vec![1, 3],
    };

    c.bench_function("next_date_day31_sparse_months", |b| {
        b.iter(|| next_date(black_box(now), black_box(anchor), black_box(&rule)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_rule_parsing,
    bench_next_date_stale_step_rule,
    bench_next_date_sparse_month_scan
);
criterion_main!(benches);
