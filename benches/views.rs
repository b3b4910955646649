use bencher::{benchmark_group, benchmark_main, Bencher};

use kvspan::{BorrowedKeyValue, ColumnarStore, EagerKeyValue, Len, Pair, RawKeyValue};

/// Pairs per store; each iteration reads every one of them once.
const COUNT: usize = 100_000;

fn store() -> ColumnarStore {
    ColumnarStore::new(COUNT).expect("COUNT is non-zero")
}

fn pairs(bencher: &mut Bencher) {
    let store = store();
    bencher.bytes = 16 * COUNT as u64;
    bencher.iter(|| {
        let mut sum = 0.0;
        for index in 0 .. store.len() {
            let pair = store.get_pair(index).unwrap();
            sum += pair.key as f64 + pair.value;
        }
        bencher::black_box(sum);
    });
}

/// Reads every slot through a view of type `$view`, chosen through `get_view`.
macro_rules! bench_view {
    ($name:ident, $view:ty) => {
        fn $name(bencher: &mut Bencher) {
            let store = store();
            bencher.bytes = 16 * COUNT as u64;
            bencher.iter(|| {
                let mut sum = 0.0;
                for index in 0 .. store.len() {
                    let view: $view = store.get_view(index).unwrap();
                    sum += view.key() as f64 + view.value();
                }
                bencher::black_box(sum);
            });
        }
    };
}

bench_view!(raw, RawKeyValue<'_, i64, f64>);
bench_view!(borrowed, BorrowedKeyValue<'_, i64, f64>);
bench_view!(eager, EagerKeyValue<i64, f64>);

fn indexed(bencher: &mut Bencher) {
    let store = store();
    bencher.bytes = 16 * COUNT as u64;
    bencher.iter(|| {
        let mut sum = 0.0;
        for index in 0 .. store.len() {
            let view = store.indexed_view(index).unwrap();
            sum += view.key() as f64 + view.value();
        }
        bencher::black_box(sum);
    });
}

fn raw_unchecked(bencher: &mut Bencher) {
    let store = store();
    bencher.bytes = 16 * COUNT as u64;
    bencher.iter(|| {
        let mut sum = 0.0;
        for index in 0 .. store.len() {
            let view = store.raw_view(index).unwrap();
            // SAFETY: views from the store are always present.
            sum += unsafe { view.key_unchecked() as f64 + view.value_unchecked() };
        }
        bencher::black_box(sum);
    });
}

/// Pair -> eager view -> pair, per slot.
fn round_trip(bencher: &mut Bencher) {
    let store = store();
    bencher.bytes = 16 * COUNT as u64;
    bencher.iter(|| {
        let mut sum = 0.0;
        for index in 0 .. store.len() {
            let view = EagerKeyValue::from(store.get_pair(index).unwrap());
            let pair = Pair::from(view);
            sum += pair.key as f64 + pair.value;
        }
        bencher::black_box(sum);
    });
}

/// Iterates all views without per-access bounds checks on the store.
fn raw_iter(bencher: &mut Bencher) {
    let store = store();
    bencher.bytes = 16 * COUNT as u64;
    bencher.iter(|| {
        let sum: f64 = store.views::<RawKeyValue<i64, f64>>().map(|view| view.key() as f64 + view.value()).sum();
        bencher::black_box(sum);
    });
}

benchmark_group!(
    copies,
    pairs,
    eager,
    round_trip,
);

benchmark_group!(
    views,
    raw,
    raw_unchecked,
    raw_iter,
    borrowed,
    indexed,
);

benchmark_main!(copies, views);
