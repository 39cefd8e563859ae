use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_mailbox::linked_list::intrusive::{envelope::Envelope, traits::NodeWithData};
use mola_mailbox::mailbox::prelude::*;
use std::hint::black_box;
use std::ptr::NonNull;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const SAMPLE_SIZE: usize = 10_000;
const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

// --- Single thread: enqueue everything, then drain through receive ---

fn uncontended_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mailbox_uncontended");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let mailbox = EnvelopeMailbox::<u64>::new();
    let mut letters: Vec<Envelope<u64>> = (0..SAMPLE_SIZE as u64).map(Envelope::new).collect();

    group.bench_function(BenchmarkId::new("send_then_receive", SAMPLE_SIZE), |b| {
        b.iter(|| {
            for letter in letters.iter_mut() {
                unsafe { mailbox.send(NonNull::from(letter)).unwrap() };
            }
            let mut sum = 0;
            for _ in 0..SAMPLE_SIZE {
                let node = mailbox.try_receive().unwrap();
                sum += unsafe { *node.as_ref().data() };
            }
            black_box(sum)
        });
    });

    group.bench_function(BenchmarkId::new("send_then_close", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mailbox = EnvelopeMailbox::<u64>::new();
            for letter in letters.iter_mut() {
                unsafe { mailbox.send(NonNull::from(letter)).unwrap() };
            }
            black_box(mailbox.close().count())
        });
    });

    group.finish();
}

// --- Several producers, one consumer ---

fn fan_in_benchmark(c: &mut Criterion, producers: usize) {
    let mut group = c.benchmark_group(format!("mailbox_fan_in_{}_producers", producers));
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let per_producer = SAMPLE_SIZE / producers;
    let mut letters: Vec<Vec<Envelope<u64>>> = (0..producers)
        .map(|_| (0..per_producer as u64).map(Envelope::new).collect())
        .collect();

    group.bench_function(BenchmarkId::new("raw", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mailbox = EnvelopeMailbox::<u64>::new();
            let barrier = Barrier::new(producers + 1);
            thread::scope(|s| {
                for batch in letters.iter_mut() {
                    let mailbox = &mailbox;
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        for letter in batch.iter_mut() {
                            unsafe { mailbox.send(NonNull::from(letter)).unwrap() };
                        }
                    });
                }
                barrier.wait();
                for _ in 0..per_producer * producers {
                    black_box(mailbox.receive(RECEIVE_TIMEOUT).unwrap());
                }
            });
        });
    });

    group.bench_function(BenchmarkId::new("boxed", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mailbox = Arc::new(BoxEnvelopeMailbox::<u64>::new());
            let barrier = Arc::new(Barrier::new(producers + 1));
            thread::scope(|s| {
                for _ in 0..producers {
                    let mailbox = Arc::clone(&mailbox);
                    let barrier = Arc::clone(&barrier);
                    s.spawn(move || {
                        barrier.wait();
                        for i in 0..per_producer as u64 {
                            mailbox.send(Box::new(Envelope::new(i))).unwrap();
                        }
                    });
                }
                barrier.wait();
                for _ in 0..per_producer * producers {
                    black_box(mailbox.receive(RECEIVE_TIMEOUT).unwrap());
                }
            });
        });
    });

    group.finish();
}

fn fan_in_small_pressure(c: &mut Criterion) {
    fan_in_benchmark(c, 1);
    fan_in_benchmark(c, 2);
}

fn fan_in_high_pressure(c: &mut Criterion) {
    fan_in_benchmark(c, 4);
    fan_in_benchmark(c, 8);
}

criterion_group!(
    benches,
    uncontended_benchmark,
    fan_in_small_pressure,
    fan_in_high_pressure
);
criterion_main!(benches);
