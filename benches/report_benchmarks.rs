//! Performance benchmarks for the Personnel Cost Engine.
//!
//! Covers monthly cost calculation, the three reports over generated
//! datasets, and one round trip through the HTTP API.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tower::ServiceExt;

use personnel_cost::api::{AppState, ReportRequest, create_router};
use personnel_cost::calculation::{CostCalculator, CostExtras};
use personnel_cost::models::{Employee, PersonnelCost};
use personnel_cost::reporting::ReportGenerator;

const DEPARTMENTS: [&str; 5] = ["Technology", "Sales", "Finance", "Operations", "Legal"];

/// Creates `count` employees spread across the benchmark departments.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            Employee::new(
                format!("emp_{:05}", i),
                format!("Employee {}", i),
                DEPARTMENTS[i % DEPARTMENTS.len()],
                "Staff",
                Decimal::new(300_000 + (i as i64 % 50) * 1_000, 2),
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            )
            .unwrap()
        })
        .collect()
}

/// Creates twelve monthly cost records per employee.
fn create_costs(employees: &[Employee]) -> Vec<PersonnelCost> {
    let calculator = CostCalculator::default();
    let extras = CostExtras {
        bonuses: Decimal::new(20_000, 2),
        overtime: Decimal::new(10_000, 2),
        benefits: Decimal::new(15_000, 2),
        ..CostExtras::default()
    };

    (1..=12)
        .flat_map(|month| {
            let period = format!("2024-{:02}", month);
            employees
                .iter()
                .map(|e| calculator.compute_monthly_cost(e, &period, extras))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Benchmark: single monthly cost calculation.
fn bench_monthly_cost(c: &mut Criterion) {
    let calculator = CostCalculator::default();
    let employee = create_employees(1).remove(0);
    let extras = CostExtras {
        bonuses: Decimal::new(50_000, 2),
        ..CostExtras::default()
    };

    c.bench_function("monthly_cost", |b| {
        b.iter(|| black_box(calculator.compute_monthly_cost(&employee, "2024-11", extras)))
    });
}

/// Benchmark: each report over growing datasets.
fn bench_reports(c: &mut Criterion) {
    let generator = ReportGenerator::new();
    let mut group = c.benchmark_group("reports");

    for employee_count in [10usize, 100, 1000] {
        let employees = create_employees(employee_count);
        let costs = create_costs(&employees);
        group.throughput(Throughput::Elements(costs.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("by_department", employee_count),
            &costs,
            |b, costs| b.iter(|| black_box(generator.report_by_department(&employees, costs))),
        );
        group.bench_with_input(
            BenchmarkId::new("key_metrics", employee_count),
            &costs,
            |b, costs| b.iter(|| black_box(generator.key_metrics(&employees, costs))),
        );
        group.bench_with_input(
            BenchmarkId::new("trend", employee_count),
            &costs,
            |b, costs| b.iter(|| black_box(generator.trend_report(costs))),
        );
    }

    group.finish();
}

/// Benchmark: department report through the HTTP API.
fn bench_api_department_report(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::default());
    let employees = create_employees(100);
    let costs = create_costs(&employees);
    let body = serde_json::to_string(&ReportRequest { employees, costs }).unwrap();

    c.bench_function("api_department_report_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reports/department")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_monthly_cost,
    bench_reports,
    bench_api_department_report
);
criterion_main!(benches);
