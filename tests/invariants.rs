//! Randomized invariant checks over warehouse and allocation sequences.
//!
//! Seeded ChaCha keeps every run reproducible.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use pickline::{OrderEngine, OrderLine, Warehouse};

const PRODUCTS: &[&str] = &["A", "B", "C", "D", "E"];

/// Independently tracked stock totals to check the warehouse against
fn shadow_sum(shadow: &[u64]) -> u64 {
    shadow.iter().sum()
}

#[test]
fn warehouse_total_matches_sum_under_random_ops() {
    const SEED: u64 = 0x5EED_0001;
    const OPS: usize = 10_000;

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut wh = Warehouse::new();
    let mut shadow = vec![0u64; PRODUCTS.len()];

    for _ in 0..OPS {
        let idx = rng.gen_range(0..PRODUCTS.len());
        let product = PRODUCTS[idx];

        if rng.gen_bool(0.5) {
            let count = rng.gen_range(0..10u64);
            wh.store(product, count);
            shadow[idx] += count;
        } else {
            let count = rng.gen_range(1..10u64);
            let pulled = wh.pull(product, count);
            assert_eq!(pulled, shadow[idx] >= count, "pull outcome diverged");
            if pulled {
                shadow[idx] -= count;
            }
        }

        for (i, product) in PRODUCTS.iter().enumerate() {
            assert_eq!(wh.available(product), shadow[i]);
        }
        assert_eq!(wh.total(), shadow_sum(&shadow));
        assert_eq!(wh.is_empty(), wh.total() == 0);
    }
}

#[test]
fn allocation_is_all_or_nothing() {
    const SEED: u64 = 0x5EED_0002;
    const OPS: usize = 5_000;

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut wh = Warehouse::new();
    for product in PRODUCTS {
        wh.store(*product, rng.gen_range(0..50u64));
    }

    for _ in 0..OPS {
        let product = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
        let requested = rng.gen_range(1..8u64);
        let before = wh.available(product);

        let line = OrderLine::allocate(product, requested, &mut wh);

        assert_eq!(line.pulled + line.backlog, line.requested);
        assert!(
            line.pulled == line.requested || line.backlog == line.requested,
            "partial fulfillment: {line:?}"
        );
        if line.is_fulfilled() {
            assert_eq!(wh.available(product), before - requested);
        } else {
            assert_eq!(wh.available(product), before, "failed pull mutated stock");
        }

        // Keep the run going
        if rng.gen_bool(0.3) {
            wh.store(product, rng.gen_range(1..10u64));
        }
    }
}

#[test]
fn engine_never_logs_rejected_lines() {
    const SEED: u64 = 0x5EED_0003;
    const LINES: usize = 2_000;

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut engine = OrderEngine::with_stock_line("A 100000 B 100000 C 100000");

    let mut accepted = 0usize;
    for i in 0..LINES {
        // Mix of valid lines, oversize quantities, and unknown products
        let line = match rng.gen_range(0..4) {
            0 => format!("S1 H{i} A {} B {}", rng.gen_range(1..=5), rng.gen_range(0..=5)),
            1 => format!("S1 H{i} C {}", rng.gen_range(6..20)),
            2 => format!("S1 H{i} Z {}", rng.gen_range(1..=5)),
            _ => format!("S1 H{i} B {}", rng.gen_range(1..=5)),
        };

        if engine.process_line(&line) == pickline::LineOutcome::Accepted {
            accepted += 1;
        }
        assert_eq!(engine.log().len(), accepted);
    }

    assert!(accepted > 0);
    assert!(accepted < LINES);
}
