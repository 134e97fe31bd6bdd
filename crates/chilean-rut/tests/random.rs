//! Tests for random RUT generation.

use std::collections::HashSet;

use chilean_rut::{RandomOptions, RutError, RutGenerator, random, randoms, uniques};

#[test]
fn random_is_valid() {
    let rut = random(&RandomOptions::default()).expect("random rut");
    assert!(rut.is_valid());
    assert!((4_000_000..80_000_000).contains(&rut.number()));
}

#[test]
fn randoms_has_requested_size() {
    let ruts = randoms(42, &RandomOptions::default()).expect("random ruts");
    assert_eq!(ruts.len(), 42);
    assert!(ruts.iter().all(|rut| rut.is_valid()));
}

#[test]
fn randoms_zero_is_empty() {
    assert!(randoms(0, &RandomOptions::default()).unwrap().is_empty());
}

#[test]
fn uniques_has_requested_size() {
    let ruts = uniques(42, &RandomOptions::default()).expect("unique ruts");
    assert_eq!(ruts.len(), 42);
    let numbers: HashSet<u32> = ruts.iter().map(|rut| rut.number()).collect();
    assert_eq!(numbers.len(), 42);
}

#[test]
fn seeded_batches_are_reproducible() {
    let options = RandomOptions::new().with_seed(42);
    assert_eq!(random(&options).unwrap(), random(&options).unwrap());
    assert_eq!(randoms(10, &options).unwrap(), randoms(10, &options).unwrap());
    assert_eq!(uniques(10, &options).unwrap(), uniques(10, &options).unwrap());
}

#[test]
fn seeded_batch_is_not_constant() {
    // One generator per batch: a seed fixes the sequence, not a single value.
    let ruts = randoms(20, &RandomOptions::new().with_seed(42)).unwrap();
    let distinct: HashSet<_> = ruts.iter().collect();
    assert!(distinct.len() > 1);
}

#[test]
fn seeded_uniques_terminates() {
    let options = RandomOptions::new().with_range(1, 50).with_seed(9);
    let ruts = uniques(49, &options).expect("whole range");
    assert_eq!(ruts.len(), 49);
    assert_eq!(ruts.first().map(|rut| rut.number()), Some(1));
    assert_eq!(ruts.last().map(|rut| rut.number()), Some(49));
}

#[test]
fn generator_iterates() {
    let options = RandomOptions::new().with_range(1_000, 2_000).with_seed(5);
    let generator = RutGenerator::new(&options).expect("generator");
    let ruts: Vec<_> = generator.take(25).collect();
    assert_eq!(ruts.len(), 25);
    for rut in ruts {
        assert!(rut.is_valid());
        assert!((1_000..2_000).contains(&rut.number()));
    }
}

#[test]
fn invalid_range_is_reported() {
    let options = RandomOptions::new().with_range(50, 10);
    assert_eq!(
        random(&options),
        Err(RutError::InvalidRange { min: 50, max: 10 })
    );
    assert!(randoms(3, &options).is_err());
    assert!(uniques(3, &options).is_err());
}

#[test]
fn exhausted_range_is_reported() {
    let options = RandomOptions::new().with_range(1, 6);
    let err = uniques(6, &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot draw 6 unique RUTs from a range of 5"
    );
}

#[test]
fn options_deserialize_with_defaults() {
    let options: RandomOptions = serde_json::from_str(r#"{"seed": 3}"#).expect("options");
    assert_eq!(options, RandomOptions::new().with_seed(3));

    let options: RandomOptions =
        serde_json::from_str(r#"{"min": 10, "max": 20}"#).expect("options");
    assert_eq!(options.width(), 10);
    assert_eq!(options.seed, None);
}
