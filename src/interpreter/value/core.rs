use std::{fmt, rc::Rc};

use crate::{
    ast::FunDef,
    interpreter::value::heap::{Heap, ObjRef},
};

/// Discriminant of a [`Value`] or of a heap object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The boolean `false`.
    False,
    /// The boolean `true`.
    True,
    /// A 64-bit signed integer.
    Int64,
    /// A 64-bit float.
    Float64,
    /// A raw machine address.
    RawPtr,
    /// A heap string.
    String,
    /// A heap array.
    Array,
    /// A function expression.
    Fun,
    /// The absence of a value.
    Void,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::False | Self::True => "bool",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::RawPtr => "rawptr",
            Self::String => "string",
            Self::Array => "array",
            Self::Fun => "fun",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// Immediate values (booleans, integers, floats, raw pointers) are stored
/// inline; strings and arrays are handles into a [`Heap`].
///
/// Equality is bitwise on tag and payload: floats compare by bit pattern and
/// heap values compare by identity. Two strings with the same contents but
/// allocated separately are *not* equal.
///
/// ## Example
/// ```
/// use plume::interpreter::value::{core::Value, heap::Heap};
///
/// let mut heap = Heap::new();
/// let a = Value::String(heap.alloc_string(b"hi"));
/// let b = Value::String(heap.alloc_string(b"hi"));
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// assert_ne!(Value::Float64(0.0), Value::Float64(-0.0));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The boolean `false`.
    False,
    /// The boolean `true`.
    True,
    /// A 64-bit signed integer.
    Int64(i64),
    /// A 64-bit float.
    Float64(f64),
    /// A raw machine address; zero is null.
    RawPtr(usize),
    /// A string object on the heap.
    String(ObjRef),
    /// An array object on the heap.
    Array(ObjRef),
    /// The value of a `fun` expression, referring to the expression itself.
    Fun(Rc<FunDef>),
    /// Result of an `if` without `else` whose test was falsy.
    Void,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::False, Self::False) | (Self::True, Self::True) | (Self::Void, Self::Void) => true,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::RawPtr(a), Self::RawPtr(b)) => a == b,
            (Self::String(a), Self::String(b)) | (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Fun(a), Self::Fun(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::False => Tag::False,
            Self::True => Tag::True,
            Self::Int64(_) => Tag::Int64,
            Self::Float64(_) => Tag::Float64,
            Self::RawPtr(_) => Tag::RawPtr,
            Self::String(_) => Tag::String,
            Self::Array(_) => Tag::Array,
            Self::Fun(_) => Tag::Fun,
            Self::Void => Tag::Void,
        }
    }

    /// The integer payload, if this is an `Int64`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// The heap handle, if this is a string or an array.
    #[must_use]
    pub const fn as_obj(&self) -> Option<ObjRef> {
        match self {
            Self::String(obj) | Self::Array(obj) => Some(*obj),
            _ => None,
        }
    }

    /// Pairs the value with the heap it points into so it can be formatted.
    ///
    /// ## Example
    /// ```
    /// use plume::interpreter::value::{core::Value, heap::Heap};
    ///
    /// let mut heap = Heap::new();
    /// let s = Value::String(heap.alloc_string(b"abc"));
    ///
    /// assert_eq!(s.display(&heap).to_string(), "'abc'");
    /// assert_eq!(Value::True.display(&heap).to_string(), "true");
    /// ```
    #[must_use]
    pub const fn display<'a>(&'a self, heap: &'a Heap) -> ValueDisplay<'a> {
        ValueDisplay { value: self,
                       heap }
    }
}

/// Helper returned by [`Value::display`].
#[derive(Debug)]
pub struct ValueDisplay<'a> {
    value: &'a Value,
    heap:  &'a Heap,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::False => write!(f, "false"),
            Value::True => write!(f, "true"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Float64(x) => write!(f, "{x}"),
            Value::RawPtr(p) => write!(f, "{p:#x}"),
            Value::String(obj) => match self.heap.string_bytes(*obj) {
                Some(bytes) => write!(f, "'{}'", String::from_utf8_lossy(bytes)),
                None => write!(f, "<dangling string>"),
            },
            Value::Array(obj) => {
                let len = self.heap.len(*obj).unwrap_or(0);
                write!(f, "[")?;
                for i in 0..len {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if let Some(element) = self.heap.array_get(*obj, i) {
                        write!(f, "{}", element.display(self.heap))?;
                    }
                }
                write!(f, "]")
            },
            Value::Fun(def) => write!(f, "<fun/{}>", def.params.len()),
            Value::Void => write!(f, "void"),
        }
    }
}
