use std::fs;

use proptest::prelude::*;
use randcheck::{Bounds, RandomArray, SeededRng};
use tempfile::TempDir;

fn render(array: &RandomArray) -> String {
    let mut buf = Vec::new();
    array.write_to(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn reference_configuration_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    let bounds = Bounds::new(-1_000_000_007, 1_000_000_007).unwrap();

    let array = RandomArray::generate(100_000, bounds, &mut SeededRng::new(2024));
    array.write_file(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let (first, second) = text.split_once('\n').unwrap();
    assert_eq!(first, "100000");
    assert!(!second.ends_with(' '));
    assert!(!second.contains('\n'));
    assert_eq!(second.split(' ').count(), 100_000);

    assert_eq!(RandomArray::read_file(&path).unwrap(), array);
}

#[test]
fn zero_size_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    let bounds = Bounds::new(0, 10).unwrap();

    RandomArray::generate(0, bounds, &mut SeededRng::new(1))
        .write_file(&path)
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "0\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "stale contents that are much longer than the new file").unwrap();

    RandomArray::from(vec![1, 2]).write_file(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "2\n1 2");
}

#[test]
fn unwritable_destination_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("input.txt");

    let err = RandomArray::from(vec![1]).write_file(&path).unwrap_err();
    assert!(matches!(err, randcheck::Error::Io { .. }));
}

#[test]
fn entropy_seeds_are_replayable() {
    let bounds = Bounds::new(i64::MIN, i64::MAX).unwrap();
    let mut rng = SeededRng::from_entropy();
    let first = RandomArray::generate(16, bounds, &mut rng);
    let replay = RandomArray::generate(16, bounds, &mut SeededRng::new(rng.seed()));
    assert_eq!(first, replay);
}

proptest! {
    #[test]
    fn output_matches_contract(
        size in 0usize..200,
        min in -2_000_000_000i64..2_000_000_000,
        span in 0i64..4_000_000_000,
        seed in any::<u64>(),
    ) {
        let bounds = Bounds::new(min, min + span).unwrap();
        let array = RandomArray::generate(size, bounds, &mut SeededRng::new(seed));
        let text = render(&array);

        let (first, second) = text.split_once('\n').unwrap();
        prop_assert_eq!(first.parse::<usize>().unwrap(), size);

        let tokens: Vec<i64> = second
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        prop_assert_eq!(tokens.len(), size);
        prop_assert!(tokens.iter().all(|&v| bounds.contains(v)));
    }

    #[test]
    fn same_seed_same_sequence(size in 0usize..100, seed in any::<u64>()) {
        let bounds = Bounds::new(-1_000_000_007, 1_000_000_007).unwrap();
        let a = RandomArray::generate(size, bounds, &mut SeededRng::new(seed));
        let b = RandomArray::generate(size, bounds, &mut SeededRng::new(seed));
        prop_assert_eq!(a, b);
    }
}
