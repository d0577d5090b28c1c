use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use easylist::IndexedList;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000usize, 10_000usize, 100_000usize];
const RANDOM_ACCESSES: usize = 1_000;

fn fill_list(n: usize) -> IndexedList<i32> {
    (0..n as i32).collect()
}

fn fill_vec(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

// add в конец против Vec::push
fn bench_add(c: &mut Criterion) {
    let mut g = c.benchmark_group("add_bulk");
    g.measurement_time(Duration::from_secs(5));
    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| {
                let mut list = IndexedList::with_capacity(n);
                for i in 0..n {
                    list.add(i as i32);
                }
                black_box(list);
            })
        });
        g.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = Vec::with_capacity(n);
                for i in 0..n {
                    v.push(i as i32);
                }
                black_box(v);
            })
        });
    }
    g.finish();
}

// Случайный доступ с проверкой границ
fn bench_random_get(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_get");
    for &size in SIZES.iter() {
        let list = fill_list(size);
        let v = fill_vec(size);
        let mut rng = StdRng::seed_from_u64(42);
        let indices: Vec<isize> = (0..RANDOM_ACCESSES)
            .map(|_| rng.gen_range(0..size) as isize)
            .collect();

        g.throughput(Throughput::Elements(RANDOM_ACCESSES as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &indices, |b, idx| {
            b.iter(|| {
                for &i in idx {
                    let _ = black_box(list.get(i));
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("Vec", size), &indices, |b, idx| {
            b.iter(|| {
                for &i in idx {
                    black_box(v.get(i as usize));
                }
            })
        });
    }
    g.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut g = c.benchmark_group("search");
    for &size in SIZES.iter() {
        let list = fill_list(size);
        let needle = size as i32 - 1;

        g.bench_with_input(BenchmarkId::new("index_of", size), &needle, |b, n| {
            b.iter(|| black_box(list.index_of(n)))
        });
        g.bench_with_input(BenchmarkId::new("last_index_where", size), &0, |b, n| {
            b.iter(|| black_box(list.last_index_where(|x| x == n)))
        });
        g.bench_with_input(BenchmarkId::new("indices_where", size), &size, |b, _| {
            b.iter(|| black_box(list.indices_where(|x| x % 7 == 0)))
        });
    }
    g.finish();
}

fn bench_copies(c: &mut Criterion) {
    let mut g = c.benchmark_group("copies");
    for &size in SIZES.iter() {
        let list = fill_list(size);
        let half = (size / 2) as isize;

        g.throughput(Throughput::Elements(size as u64));
        g.bench_function(BenchmarkId::new("reversed", size), |b| {
            b.iter(|| black_box(list.reversed()))
        });
        g.bench_function(BenchmarkId::new("filtered", size), |b| {
            b.iter(|| black_box(list.filtered(|x| x % 2 == 0)))
        });
        g.bench_function(BenchmarkId::new("get_range_half", size), |b| {
            b.iter(|| black_box(list.get_range(0, half)))
        });
        g.bench_function(BenchmarkId::new("plus", size), |b| {
            b.iter(|| black_box(list.plus(&list)))
        });
    }
    g.finish();
}

// Удаление диапазона через живое представление против Vec::drain
fn bench_remove_range(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove_range_middle");
    for &size in SIZES.iter() {
        let quarter = size / 4;

        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter_batched(
                || fill_list(n),
                |mut list| {
                    let _ = list.remove_range(quarter as isize, (3 * quarter) as isize);
                    black_box(list)
                },
                criterion::BatchSize::LargeInput,
            )
        });
        g.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &n| {
            b.iter_batched(
                || fill_vec(n),
                |mut v| {
                    v.drain(quarter..3 * quarter);
                    black_box(v)
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    g.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_random_get,
    bench_search,
    bench_copies,
    bench_remove_range
);
criterion_main!(benches);
