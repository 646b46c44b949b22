//! Performance benchmarks for the employee record store.
//!
//! Measures the hot paths of an interactive session:
//! - Re-deriving the search projection after each keystroke
//! - Creating a record (validate, prepend, serialize, persist)
//! - Listing through the HTTP surface
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use employee_records::api::{AppState, create_router};
use employee_records::config::StoreConfig;
use employee_records::models::NewEmployee;
use employee_records::query::{SearchField, filter};
use employee_records::storage::MemoryStorage;
use employee_records::store::RecordStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const ROLES: [&str; 4] = ["Manager", "Developer", "Designer", "Analyst"];

/// Builds the create input for the `i`-th synthetic employee.
fn create_employee(i: usize) -> NewEmployee {
    NewEmployee {
        name: format!("Employee {:05}", i),
        email: format!("employee{:05}@example.com", i),
        phone: format!("+92 300 {:07}", i),
        role: ROLES[i % ROLES.len()].to_string(),
        address: "Karachi".to_string(),
        salary: format!("{}", 1000 + i),
        currency: if i % 2 == 0 { "PKR" } else { "USD" }.to_string(),
        ..NewEmployee::default()
    }
}

/// Opens an unseeded store holding `count` records.
fn create_store(count: usize) -> RecordStore {
    let config = StoreConfig {
        seed_demo_records: false,
        ..StoreConfig::default()
    };
    let mut store = RecordStore::open(MemoryStorage::new(), config).expect("Failed to open store");
    for i in 0..count {
        store.create(create_employee(i)).expect("Failed to create record");
    }
    store
}

/// Benchmark: filtering by role at increasing store sizes.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [10, 100, 1000].iter() {
        let store = create_store(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("role_dev", size), size, |b, _| {
            b.iter(|| filter(black_box(store.list()), black_box("dev"), SearchField::Role).count())
        });
    }

    group.finish();
}

/// Benchmark: creating one record into stores of increasing size.
///
/// Every create re-serializes the whole sequence, so cost grows linearly.
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    group.sample_size(20);

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("into_store_of", size), size, |b, &size| {
            b.iter_batched(
                || create_store(size),
                |mut store| black_box(store.create(create_employee(size)).unwrap()),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Benchmark: GET /employees with a search through the router.
fn bench_list_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(create_store(500));

    c.bench_function("list_endpoint_500", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(state.clone());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/employees?q=dev&field=role")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_filter, bench_create, bench_list_endpoint);
criterion_main!(benches);
