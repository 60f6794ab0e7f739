use std::io::{self, Write};

use crate::interpreter::value::core::{Tag, Value};

/// A handle to an object stored in a [`Heap`].
///
/// Two handles are equal only if they name the same object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjRef(usize);

impl ObjRef {
    /// The arena slot this handle points at.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Object {
    String(Box<[u8]>),
    Array(Vec<Value>),
}

/// Arena backing every string and array object.
///
/// Objects are never freed; they live as long as the heap that owns them.
///
/// ## Example
/// ```
/// use plume::interpreter::value::{core::Tag, heap::Heap};
///
/// let mut heap = Heap::new();
/// let a = heap.alloc_string(b"abc");
/// let b = heap.alloc_string(b"abc");
///
/// assert_ne!(a, b);
/// assert_eq!(heap.tag_of(a), Some(Tag::String));
/// assert_eq!(heap.len(a), Some(3));
/// assert_eq!((a.index(), b.index()), (0, 1));
/// assert_eq!(heap.object_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Heap {
    objects: Vec<Object>,
}

impl Heap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a string object holding a copy of `bytes`.
    pub fn alloc_string(&mut self, bytes: &[u8]) -> ObjRef {
        self.push(Object::String(bytes.into()))
    }

    /// Allocates an array object holding `elements`.
    pub fn alloc_array(&mut self, elements: Vec<Value>) -> ObjRef {
        self.push(Object::Array(elements))
    }

    fn push(&mut self, object: Object) -> ObjRef {
        self.objects.push(object);
        ObjRef(self.objects.len() - 1)
    }

    /// Number of objects allocated so far.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Tag of the object behind `obj`, or `None` for a handle this heap did
    /// not hand out.
    #[must_use]
    pub fn tag_of(&self, obj: ObjRef) -> Option<Tag> {
        self.objects.get(obj.index()).map(|object| match object {
                                   Object::String(_) => Tag::String,
                                   Object::Array(_) => Tag::Array,
                               })
    }

    /// Length of a string (in bytes) or array (in elements).
    #[must_use]
    pub fn len(&self, obj: ObjRef) -> Option<usize> {
        self.objects.get(obj.index()).map(|object| match object {
                                   Object::String(bytes) => bytes.len(),
                                   Object::Array(elements) => elements.len(),
                               })
    }

    /// Raw bytes of a string object.
    #[must_use]
    pub fn string_bytes(&self, obj: ObjRef) -> Option<&[u8]> {
        match self.objects.get(obj.index())? {
            Object::String(bytes) => Some(bytes),
            Object::Array(_) => None,
        }
    }

    /// Element `index` of an array object.
    ///
    /// Returns `None` if `obj` is not an array or `index` is out of bounds.
    #[must_use]
    pub fn array_get(&self, obj: ObjRef, index: usize) -> Option<&Value> {
        match self.objects.get(obj.index())? {
            Object::Array(elements) => elements.get(index),
            Object::String(_) => None,
        }
    }

    /// Writes the raw bytes of a string object to `out`, with no quoting,
    /// escaping or trailing newline.
    ///
    /// ## Errors
    /// Fails with `InvalidInput` if `obj` is not a string, or with whatever
    /// error the writer reports.
    pub fn print_string(&self, obj: ObjRef, out: &mut dyn Write) -> io::Result<()> {
        let bytes = self.string_bytes(obj).ok_or_else(|| {
                                              io::Error::new(io::ErrorKind::InvalidInput,
                                                             "object is not a string")
                                          })?;
        out.write_all(bytes)
    }
}
