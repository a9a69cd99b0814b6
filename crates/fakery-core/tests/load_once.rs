//! Concurrent first access to the locale store.

use fakery_core::{DataError, DatasetSource, LocaleStore, GENERIC_LOCALE};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

/// Source that counts reads and sleeps to widen the race window.
struct SlowCountingSource {
    reads: Arc<AtomicUsize>,
}

impl DatasetSource for SlowCountingSource {
    fn read(&self, locale: &str, dataset: &str) -> Result<String, DataError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        match dataset {
            "colors" => Ok(format!(
                r#"{{"locale_tag": ["{locale}"], "color_names": ["Red", "Teal", "Plum"]}}"#
            )),
            _ => Err(DataError::DatasetNotFound {
                locale: locale.to_string(),
                dataset: dataset.to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        "slow counting source".to_string()
    }
}

fn counting_store() -> (Arc<LocaleStore>, Arc<AtomicUsize>) {
    let reads = Arc::new(AtomicUsize::new(0));
    let store = LocaleStore::new(SlowCountingSource {
        reads: reads.clone(),
    });
    (Arc::new(store), reads)
}

#[test]
fn test_concurrent_first_load_reads_once() {
    let (store, reads) = counting_store();
    let callers = 16;
    let barrier = Arc::new(Barrier::new(callers));

    let handles: Vec<_> = (0..callers)
        .map(|_| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                store.load_generic("colors").unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(reads.load(Ordering::SeqCst), 1);
    assert_eq!(store.load_count(), 1);
    for data in &results {
        assert!(Arc::ptr_eq(data, &results[0]));
        assert_eq!(data.column("color_names").unwrap().len(), 3);
    }
}

#[test]
fn test_concurrent_failed_load_reads_once() {
    let (store, reads) = counting_store();
    let callers = 8;
    let barrier = Arc::new(Barrier::new(callers));

    let handles: Vec<_> = (0..callers)
        .map(|_| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                store.load_generic("missing")
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert!(matches!(result, Err(DataError::DatasetNotFound { .. })));
    }
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_distinct_pairs_load_independently() {
    let (store, reads) = counting_store();

    let handles: Vec<_> = ["en_US", "en_GB", GENERIC_LOCALE]
        .into_iter()
        .map(|locale| {
            let store = store.clone();
            thread::spawn(move || store.load(locale, "colors").unwrap())
        })
        .collect();

    for handle in handles {
        let data = handle.join().unwrap();
        assert_eq!(data.column("locale_tag").unwrap()[0], data.locale());
    }
    assert_eq!(reads.load(Ordering::SeqCst), 3);
}
