// crates/shared-kernel/tests/step_count.rs
use num_traits::Zero;
use range_fold_shared_kernel::StepCount;

#[test]
fn zero_trait_consistency() {
    assert_eq!(<StepCount as Zero>::zero(), StepCount::ZERO);
    assert!(StepCount::default().is_zero());
    assert_eq!(StepCount::new(2) + StepCount::new(3), StepCount::from(5));
}

#[test]
fn add_saturates_at_max() {
    let max = StepCount::new(u128::MAX);
    assert_eq!(max + StepCount::new(1), max);
    assert_eq!(StepCount::new(u128::MAX - 1) + StepCount::new(5), max);
}

#[test]
fn usize_conversion_and_limits() {
    assert_eq!(StepCount::new(10).to_usize(), Some(10));
    assert_eq!(StepCount::new(u128::MAX).to_usize(), None);
    assert!(StepCount::new(11).exceeds(10));
    assert!(!StepCount::new(10).exceeds(10));
}

#[test]
fn display_prints_value() {
    assert_eq!(StepCount::new(u128::MAX).to_string(), u128::MAX.to_string());
}
