use criterion::{Criterion, criterion_group, criterion_main};
use hbml::{Element, HbmlLogMessageGenerator, LogMessageGenerator};
use std::hint::black_box;

fn wide_tree(children: usize) -> Element {
    let mut root = Element::with_label("Root");
    root.add_attribute("version", "1");
    for i in 0..children {
        let mut child = Element::with_value(format!("Child{i}"), format!("value {i}"));
        child.add_attribute("index", i.to_string());
        root.add_child(child);
    }
    root
}

fn deep_tree(depth: usize) -> Element {
    let mut node = Element::with_value("Leaf", "bottom");
    for i in 0..depth {
        let mut parent = Element::with_value(format!("Level{i}"), "v");
        parent.add_child(node);
        node = parent;
    }
    node
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Element::render");

    let leaf = Element::with_value("A", "V");
    group.bench_function("leaf", |b| b.iter(|| black_box(&leaf).render()));

    let wide = wide_tree(100);
    group.bench_function("wide_100", |b| b.iter(|| black_box(&wide).render()));

    let deep = deep_tree(32);
    group.bench_function("deep_32", |b| b.iter(|| black_box(&deep).render()));

    group.finish();
}

fn bench_log_entry(c: &mut Criterion) {
    c.bench_function("HbmlLogMessageGenerator::generate_log_message", |b| {
        b.iter(|| {
            HbmlLogMessageGenerator.generate_log_message(
                black_box("2025-01-15 14:30:00"),
                black_box("main"),
                black_box("Server::start"),
                black_box("INFO"),
                black_box("Application started successfully"),
            )
        });
    });
}

criterion_group!(benches, bench_render, bench_log_entry);
criterion_main!(benches);
