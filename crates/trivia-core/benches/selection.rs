use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use trivia_core::model::{CategoryFilter, Question};
use trivia_core::paginate::paginate;
use trivia_core::quiz::select_quiz_question;

fn make_pool(n: u32) -> Vec<Question> {
    (1..=n)
        .map(|id| Question {
            id,
            text: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category: id % 6 + 1,
            difficulty: (id % 5) as u8 + 1,
        })
        .collect()
}

fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate");

    let pool = make_pool(10_000);

    group.bench_function("first_page", |b| {
        b.iter(|| paginate(black_box(&pool), black_box(1), black_box(10)))
    });

    group.bench_function("last_page", |b| {
        b.iter(|| paginate(black_box(&pool), black_box(1_000), black_box(10)))
    });

    group.bench_function("out_of_range", |b| {
        b.iter(|| paginate(black_box(&pool), black_box(5_000), black_box(10)))
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_quiz_question");

    let small = make_pool(20);
    let large = make_pool(10_000);
    let none: HashSet<u32> = HashSet::new();
    let half: HashSet<u32> = (1..=5_000).collect();

    group.bench_function("20_any", |b| {
        b.iter(|| select_quiz_question(black_box(&small), CategoryFilter::Any, black_box(&none)))
    });

    group.bench_function("10k_any", |b| {
        b.iter(|| select_quiz_question(black_box(&large), CategoryFilter::Any, black_box(&none)))
    });

    group.bench_function("10k_category_half_excluded", |b| {
        b.iter(|| {
            select_quiz_question(
                black_box(&large),
                CategoryFilter::Category(3),
                black_box(&half),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_paginate, bench_select);
criterion_main!(benches);
