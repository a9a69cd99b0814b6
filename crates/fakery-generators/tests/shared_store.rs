//! Independent generators sharing one store across threads.

use std::sync::{Arc, Barrier};
use std::thread;

use fakery_generators::{datasets, default_store, Faker};

#[test]
fn test_concurrent_fakers_share_one_load() {
    let store = Arc::new(default_store());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let mut faker = Faker::with_seed(store, 100 + i);
                barrier.wait();
                (0..25)
                    .map(|_| faker.person().unwrap().name)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|names| names.len() == 25));
    assert!(store.is_loaded("en_US", datasets::NAMES));

    let mut replay = Faker::with_seed(store.clone(), 100);
    let again: Vec<String> = (0..25).map(|_| replay.person().unwrap().name).collect();
    assert_eq!(again, results[0]);
}
