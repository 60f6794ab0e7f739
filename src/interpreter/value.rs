/// Heap object storage.
///
/// Defines the `Heap` arena that owns string and array objects, and the
/// `ObjRef` handles through which values refer to them. Handles compare by
/// identity, never by content.
pub mod heap;

/// Runtime value representation.
///
/// Defines the tagged `Value` type shared by the parser and the evaluator,
/// its `Tag` discriminant, bitwise equality and display.
pub mod core;
