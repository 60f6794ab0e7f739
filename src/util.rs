/// Numeric conversion helpers.
///
/// This module provides the checked routines used when turning literal text
/// into integers and when turning runtime integers into indices. None of them
/// wrap silently: every function reports failure through its return value.
pub mod num;
