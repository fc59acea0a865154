use criterion::{criterion_group, criterion_main, Criterion};

use service::runtime::Services;

fn bench_create_todo(c: &mut Criterion) {
    let svc = Services::in_memory();

    // pre-create the assignee outside of the benchmark
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.users.create("Bench", "bench@example.com")).unwrap();

    c.bench_function("todo_create_memory", |b| {
        b.iter(|| {
            rt.block_on(svc.todos.create("Benchmark todo", "bench@example.com")).unwrap();
        });
    });

    c.bench_function("todo_list_by_assignee", |b| {
        b.iter(|| {
            rt.block_on(svc.todos.get_by_assignee_email("bench@example.com")).unwrap();
        });
    });
}

criterion_group!(benches, bench_create_todo);
criterion_main!(benches);
