use chrono::{Datelike, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weatherman::models::{ExtremeSource, MonthAggregate, Observation, YearAggregate};
use weatherman::readers::{ColumnLayout, ObservationParser};
use weatherman::reports::{MissingEntryPolicy, ReportFormatter};
use weatherman::settings::ColumnLabels;

const HEADER: &str = "PKT,Max TemperatureC,Mean TemperatureC,Min TemperatureC,Dew PointC,MeanDew PointC,Min DewpointC,Max Humidity, Mean Humidity, Min Humidity";

fn create_month(year: i32, month: u32, days: u32) -> Vec<Observation> {
    (1..=days)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| {
            let day = date.day() as i32;
            Observation::new(
                date,
                // every seventh day has no high reading
                (day % 7 != 0).then_some(15 + day % 12),
                Some(day % 9 - 3),
                Some(60 + day % 30),
                Some(40 + day % 20),
            )
        })
        .collect()
}

fn create_year(year: i32) -> YearAggregate {
    let months = (1..=12)
        .map(|month| MonthAggregate::from_observations(year, month, create_month(year, month, 31)))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    YearAggregate::from_year(year, months).unwrap()
}

fn benchmark_month_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_aggregation");

    for days in [10u32, 31] {
        let observations = create_month(2004, 8, days);
        group.bench_with_input(BenchmarkId::new("averages", days), &observations, |b, obs| {
            b.iter(|| {
                let month = MonthAggregate::from_observations(2004, 8, obs.clone()).unwrap();
                black_box((
                    month.average_max_temperature(),
                    month.average_min_temperature(),
                    month.average_mean_humidity(),
                ))
            })
        });
    }

    group.finish();
}

fn benchmark_year_extremes(c: &mut Criterion) {
    let year = create_year(2004);

    c.bench_function("year_extremes", |b| {
        b.iter(|| {
            black_box((
                year.max_temperature_with_date(),
                year.min_temperature_with_date(),
                year.max_humidity_with_date(),
            ))
        })
    });
}

fn benchmark_record_parsing(c: &mut Criterion) {
    let layout = ColumnLayout::from_header_line(HEADER, &ColumnLabels::default()).unwrap();
    let parser = ObservationParser::new(layout);
    let line = "2004-8-14,31,26,21,18,16,14,94,67,40";

    c.bench_function("parse_line", |b| {
        b.iter(|| parser.parse_line(black_box(line)).unwrap())
    });
}

fn benchmark_chart_rendering(c: &mut Criterion) {
    let month = MonthAggregate::from_observations(2004, 8, create_month(2004, 8, 31)).unwrap();
    let formatter = ReportFormatter::new(MissingEntryPolicy::NoEntry);

    c.bench_function("chart_report", |b| {
        b.iter(|| black_box(formatter.chart_report(&month)))
    });
}

criterion_group!(
    benches,
    benchmark_month_aggregation,
    benchmark_year_extremes,
    benchmark_record_parsing,
    benchmark_chart_rendering
);
criterion_main!(benches);
