use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_utils::sync::WaitGroup;
use rand::Rng;

use crate::linked_list::intrusive::{envelope::Envelope, traits::NodeWithData};

use super::super::prelude::*;

const PRODUCERS: usize = 4;
const PER_PRODUCER: usize = 250;

/// Sends `PER_PRODUCER` letters tagged with `producer`, pausing at random.
fn produce(mailbox: &BoxEnvelopeMailbox<(usize, usize)>, producer: usize) {
    let mut rng = rand::rng();
    for seq in 0..PER_PRODUCER {
        mailbox.send(Box::new(Envelope::new((producer, seq)))).unwrap();
        if rng.random_range(0..8) == 0 {
            thread::yield_now();
        }
    }
}

#[test]
fn test_many_producers_keep_per_producer_order() {
    let mailbox = Arc::new(BoxEnvelopeMailbox::<(usize, usize)>::named("fan-in"));
    let wg = WaitGroup::new();

    for producer in 0..PRODUCERS {
        let mailbox = Arc::clone(&mailbox);
        let wg = wg.clone();
        thread::spawn(move || {
            produce(&mailbox, producer);
            drop(wg);
        });
    }

    let mut next_seq = [0usize; PRODUCERS];
    for _ in 0..PRODUCERS * PER_PRODUCER {
        let letter = mailbox.receive(Duration::from_secs(10)).unwrap();
        let (producer, seq) = *letter.data();
        assert_eq!(seq, next_seq[producer], "producer {producer} out of order");
        next_seq[producer] += 1;
    }

    wg.wait();
    assert_eq!(mailbox.try_receive().unwrap_err(), MailboxError::Timeout);
    assert!(next_seq.iter().all(|&n| n == PER_PRODUCER));
}

#[test]
fn test_many_consumers_receive_each_letter_once() {
    let mailbox = Arc::new(BoxEnvelopeMailbox::<(usize, usize)>::new());
    let producers_done = WaitGroup::new();

    let consumers: Vec<_> = (0..3)
        .map(|_| {
            let mailbox = Arc::clone(&mailbox);
            thread::spawn(move || {
                let mut seen = Vec::new();
                loop {
                    match mailbox.receive(Duration::from_millis(50)) {
                        Ok(letter) => seen.push(*letter.data()),
                        Err(MailboxError::Closed) => return seen,
                        Err(_) => continue,
                    }
                }
            })
        })
        .collect();

    for producer in 0..PRODUCERS {
        let mailbox = Arc::clone(&mailbox);
        let wg = producers_done.clone();
        thread::spawn(move || {
            produce(&mailbox, producer);
            drop(wg);
        });
    }
    producers_done.wait();

    // Let the consumers empty the mailbox before shutting it.
    while mailbox.letters() > 0 {
        thread::sleep(Duration::from_millis(5));
    }
    let leftover = mailbox.close();

    let mut all = HashSet::new();
    let mut total = leftover.len();
    for consumer in consumers {
        for letter in consumer.join().unwrap() {
            assert!(all.insert(letter), "{letter:?} delivered twice");
            total += 1;
        }
    }
    assert_eq!(total, PRODUCERS * PER_PRODUCER);
}
