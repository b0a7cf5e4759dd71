//! Internal testing utilities for the vmask crate.

use std::fmt::Debug;
use std::panic::{RefUnwindSafe, UnwindSafe};

pub mod bench;
mod patterns;

pub use patterns::{all_pattern_pairs, all_patterns, random_patterns};

/// Utility for creating table-driven tests.
///
/// Define a `Debug` struct, conventionally named `Case`, holding the inputs
/// and expected outputs for one test case. Put the cases in a collection and
/// call `test_each` with the test function. Every case is run, even if an
/// earlier one panics, and the failing cases are reported together.
///
/// ```
/// use vmask_testing::TestCases;
///
/// #[derive(Debug)]
/// struct Case {
///     bits: u8,
///     popcount: u32,
/// }
///
/// let cases = [
///     Case { bits: 0b0000_0101, popcount: 2 },
///     Case { bits: 0xff, popcount: 8 },
/// ];
///
/// cases.test_each(|case| {
///     assert_eq!(case.bits.count_ones(), case.popcount);
/// });
/// ```
///
/// Test cases and values captured by the test function must be
/// [unwind safe](https://doc.rust-lang.org/std/panic/fn.catch_unwind.html).
pub trait TestCases {
    /// The data for a single test case.
    type Case;

    /// Call `test` with a reference to each case, then panic with the
    /// failing cases if any call panicked.
    fn test_each(self, test: impl Fn(&Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe;

    /// Variant of [`test_each`](TestCases::test_each) which passes cases to
    /// the test function by value.
    ///
    /// The debug representation of each case is captured before the test
    /// function is called.
    fn test_each_value(self, test: impl Fn(Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe;
}

/// Panic if `failures` is non-empty.
fn report_failures<T: Debug>(failures: &[T]) {
    assert!(
        failures.is_empty(),
        "{} test cases failed: {:?}",
        failures.len(),
        failures
    );
}

impl<I: IntoIterator> TestCases for I {
    type Case = I::Item;

    fn test_each(self, test: impl Fn(&I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe,
    {
        let failures: Vec<_> = self
            .into_iter()
            .filter(|case| std::panic::catch_unwind(|| test(case)).is_err())
            .collect();
        report_failures(&failures);
    }

    fn test_each_value(self, test: impl Fn(I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe,
    {
        let test = &test;
        let failures: Vec<String> = self
            .into_iter()
            .filter_map(|case| {
                let case_str = format!("{:?}", case);
                std::panic::catch_unwind(move || test(case))
                    .is_err()
                    .then_some(case_str)
            })
            .collect();
        report_failures(&failures);
    }
}
