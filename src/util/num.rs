use crate::{error::RuntimeError, interpreter::cursor::SourcePos};

/// Folds a run of digits in the given radix into an `i64`.
///
/// Every character of `digits` must be a valid digit in `radix`; the caller
/// is expected to have matched them already. Underscores are not accepted.
///
/// ## Returns
/// - `Some(i64)`: The accumulated value.
/// - `None`: If a character is not a digit of `radix`, or if the value does
///   not fit in an `i64`.
///
/// ## Example
/// ```
/// use plume::util::num::accumulate_digits;
///
/// assert_eq!(accumulate_digits("255", 10), Some(255));
/// assert_eq!(accumulate_digits("FF", 16), Some(255));
/// assert_eq!(accumulate_digits("101", 2), Some(5));
///
/// // One past i64::MAX
/// assert_eq!(accumulate_digits("9223372036854775808", 10), None);
/// ```
#[must_use]
pub fn accumulate_digits(digits: &str, radix: u32) -> Option<i64> {
    digits.chars().try_fold(0i64, |value, ch| {
                      let digit = ch.to_digit(radix)?;
                      value.checked_mul(i64::from(radix))?
                           .checked_add(i64::from(digit))
                  })
}

/// Safely converts an `i64` to a `usize` if and only if it can be represented
/// exactly.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` if the value is negative or
/// exceeds the maximum representable `usize`.
///
/// ## Parameters
/// - `value`: The integer value to convert.
/// - `len`: Length of the indexed object, reported in the error.
/// - `pos`: Source position for error reporting.
///
/// ## Example
/// ```
/// use plume::{error::RuntimeError, interpreter::cursor::SourcePos, util::num::i64_to_index_checked};
///
/// let pos = SourcePos::default();
///
/// assert_eq!(i64_to_index_checked(3, 10, pos).unwrap(), 3);
///
/// let err = i64_to_index_checked(-1, 10, pos).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfBounds { found: -1, .. }));
/// ```
pub fn i64_to_index_checked(value: i64, len: usize, pos: SourcePos) -> Result<usize, RuntimeError> {
    usize::try_from(value).map_err(|_| RuntimeError::IndexOutOfBounds { len,
                                                                         found: value,
                                                                         pos })
}
