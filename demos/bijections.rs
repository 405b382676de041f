//! Enumerate the bijections of {1, 2, 3} and check that a bijection
//! composed with its inverse is the identity.
//!
//! Run with: cargo run --example bijections

use std::collections::BTreeSet;

use symgroup::{Bijection, BijectionGroup, Group};
use tracing_subscriber::EnvFilter;

fn print_mapping(domain: &BTreeSet<i32>, f: &Bijection<i32>) {
    for n in domain {
        print!("{} --> {}; ", n, f.apply(n));
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let domain: BTreeSet<i32> = [1, 2, 3].into_iter().collect();

    let bijections = BijectionGroup::bijections_of(&domain);
    for f in &bijections {
        print_mapping(&domain, f);
    }

    let group = BijectionGroup::new(domain.iter().copied());
    let f1 = bijections
        .iter()
        .find(|f| *f.apply(&1) == 2 && *f.apply(&2) == 3)
        .cloned()
        .unwrap_or_else(|| group.identity());
    let f2 = group.inverse_of(&f1);
    let identity = group.identity();

    print_mapping(&domain, &f1);
    print_mapping(&domain, &f2);
    print_mapping(&domain, &group.binary_operation(&f1, &f2));

    tracing::debug!(
        composed_is_identity = group.binary_operation(&f1, &f2) == identity,
        "done"
    );
}
