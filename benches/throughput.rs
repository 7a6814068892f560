use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pubsub_queue::Queue;
use std::sync::Arc;
use std::thread;

const MSG_PER_PRODUCER: u64 = 200_000;

fn bench_spsc(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc");
    group.throughput(Throughput::Elements(MSG_PER_PRODUCER));

    group.bench_function("single_producer_consumer", |b| {
        b.iter(|| {
            let queue: Queue<u64> = Queue::new(4096);

            let producer = queue.clone();
            let producer_handle = thread::spawn(move || {
                for i in 0..MSG_PER_PRODUCER {
                    producer.push(i).unwrap();
                }
                producer.shutdown();
            });

            let mut count = 0u64;
            loop {
                match queue.pop() {
                    Ok(item) => {
                        black_box(item);
                        count += 1;
                    }
                    Err(_) => break,
                }
            }

            producer_handle.join().unwrap();
            assert_eq!(count, MSG_PER_PRODUCER);
        });
    });

    group.finish();
}

fn bench_mpmc(c: &mut Criterion) {
    let mut group = c.benchmark_group("mpmc");

    for &num_producers in &[2, 4, 8] {
        let total_msgs = MSG_PER_PRODUCER * num_producers as u64;
        group.throughput(Throughput::Elements(total_msgs));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{num_producers}P_{num_producers}C")),
            &num_producers,
            |b, &n| {
                b.iter(|| {
                    let queue: Queue<u64> = Queue::new(4096);
                    let mut producer_handles = vec![];

                    for _ in 0..n {
                        let producer = queue.clone();
                        producer_handles.push(thread::spawn(move || {
                            for i in 0..MSG_PER_PRODUCER {
                                producer.push(i).unwrap();
                            }
                        }));
                    }

                    let mut consumer_handles = vec![];
                    for _ in 0..n {
                        let consumer = queue.clone();
                        consumer_handles.push(thread::spawn(move || {
                            let mut count = 0u64;
                            loop {
                                match consumer.pop() {
                                    Ok(item) => {
                                        black_box(item);
                                        count += 1;
                                    }
                                    Err(_) => break,
                                }
                            }
                            count
                        }));
                    }

                    for handle in producer_handles {
                        handle.join().unwrap();
                    }
                    queue.shutdown();

                    let total: u64 = consumer_handles.into_iter().map(|h| h.join().unwrap()).sum();
                    assert_eq!(total, MSG_PER_PRODUCER * n as u64);
                });
            },
        );
    }

    group.finish();
}

fn bench_try_push_try_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_blocking");
    let msgs = 1_000_000u64;
    group.throughput(Throughput::Elements(msgs));

    group.bench_function("try_push_try_pop_single_thread", |b| {
        b.iter(|| {
            let queue: Queue<u64> = Queue::new(1024);
            let mut sent = 0u64;
            let mut received = 0u64;
            while received < msgs {
                if sent < msgs && queue.try_push(sent).is_ok() {
                    sent += 1;
                } else if let Ok(item) = queue.try_pop() {
                    black_box(item);
                    received += 1;
                } else {
                    std::hint::spin_loop();
                }
            }
        });
    });

    group.finish();
}

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");

    let msgs = 50_000u64;

    for &num_producers in &[4, 8] {
        let total = msgs * num_producers as u64;
        group.throughput(Throughput::Elements(total));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{num_producers}P_small_queue")),
            &num_producers,
            |b, &n| {
                b.iter(|| {
                    let queue: Queue<u32> = Queue::new(16);
                    let counter = Arc::new(std::sync::atomic::AtomicU64::new(0));

                    let mut handles = vec![];
                    for _ in 0..n {
                        let producer = queue.clone();
                        handles.push(thread::spawn(move || {
                            for sent in 0..msgs {
                                producer.push(sent as u32).unwrap();
                            }
                        }));
                    }

                    let consumer = queue.clone();
                    let cnt = Arc::clone(&counter);
                    let consumer_handle = thread::spawn(move || {
                        let target = msgs * n as u64;
                        while cnt.load(std::sync::atomic::Ordering::Relaxed) < target {
                            if let Ok(item) = consumer.pop() {
                                black_box(item);
                                cnt.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                            }
                        }
                    });

                    for h in handles {
                        h.join().unwrap();
                    }
                    consumer_handle.join().unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_spsc, bench_mpmc, bench_try_push_try_pop, bench_contention);
criterion_main!(benches);
