//! Cell values stored in data source columns.

use ndarray::ArrayD;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared, mutable array-like cell.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Shared, mutable n-dimensional binary buffer cell.
pub type BufferRef = Rc<RefCell<ArrayD<f64>>>;

/// Shared, mutable key/value cell.
pub type ObjectRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// A single value inside a column.
///
/// Scalars are immutable. `Array`, `Buffer` and `Object` are handles: cloning
/// the value clones the handle, so both clones see the same contents. Use
/// [`copy_value`] to obtain a value that no longer aliases the original.
#[derive(Debug, Clone)]
pub enum Value {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Immutable string.
    Str(Rc<str>),
    /// Array-like sequence of values.
    Array(ArrayRef),
    /// Binary `f64` buffer of any dimensionality (e.g. an image per row).
    Buffer(BufferRef),
    /// Nested mapping.
    Object(ObjectRef),
}

impl Value {
    /// Wrap a vector into a new array cell.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    /// Wrap an ndarray into a new buffer cell.
    pub fn buffer(data: ArrayD<f64>) -> Self {
        Value::Buffer(Rc::new(RefCell::new(data)))
    }

    /// Wrap a map into a new object cell.
    pub fn object(entries: BTreeMap<String, Value>) -> Self {
        Value::Object(Rc::new(RefCell::new(entries)))
    }

    /// Create a string value.
    pub fn str(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// True for values the copy policy duplicates element by element.
    pub fn is_array_like(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Buffer(_))
    }

    /// Numeric view of a scalar, used for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Short type label for display.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Buffer(_) => "buffer",
            Value::Object(_) => "object",
        }
    }

    /// Whether two values are handles to the same underlying storage.
    ///
    /// Always false for scalars.
    pub fn shares_storage(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Buffer(a), Value::Buffer(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Buffer(a), Value::Buffer(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::str(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(Rc::from(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::array(v)
    }
}

impl From<ArrayD<f64>> for Value {
    fn from(v: ArrayD<f64>) -> Self {
        Value::buffer(v)
    }
}

/// Copy a cell so it can be stored without tracking later mutations.
///
/// Arrays and buffers get a new container holding the same elements. Anything
/// else is returned as is: scalars are immutable, and objects are shared with
/// the source on purpose (nested maps are not deep-copied).
pub fn copy_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::array(items.borrow().clone()),
        Value::Buffer(data) => Value::buffer(data.borrow().clone()),
        other => other.clone(),
    }
}

/// Copy a whole column into a new container, applying [`copy_value`] per cell.
pub fn copy_column(column: &[Value]) -> Vec<Value> {
    column.iter().map(copy_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, IxDyn};

    #[test]
    fn copied_array_does_not_follow_mutation() {
        let live = Value::array(vec![Value::Int(1), Value::Int(2)]);
        let copy = copy_value(&live);

        if let Value::Array(items) = &live {
            items.borrow_mut().push(Value::Int(3));
        }

        assert!(!copy.shares_storage(&live));
        assert_eq!(copy, Value::array(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn copied_buffer_does_not_follow_mutation() {
        let live = Value::buffer(arr2(&[[1.0, 2.0], [3.0, 4.0]]).into_dyn());
        let copy = copy_value(&live);

        if let Value::Buffer(data) = &live {
            data.borrow_mut()[IxDyn(&[0, 0])] = 99.0;
        }

        match copy {
            Value::Buffer(data) => assert_eq!(data.borrow()[IxDyn(&[0, 0])], 1.0),
            other => panic!("expected buffer, got {}", other.type_name()),
        }
    }

    #[test]
    fn objects_are_shared_not_copied() {
        let mut entries = BTreeMap::new();
        entries.insert("label".to_string(), Value::str("a"));
        let live = Value::object(entries);
        let copy = copy_value(&live);

        assert!(copy.shares_storage(&live));
        if let Value::Object(map) = &live {
            map.borrow_mut().insert("label".to_string(), Value::str("b"));
        }
        match copy {
            Value::Object(map) => assert_eq!(map.borrow()["label"], Value::str("b")),
            other => panic!("expected object, got {}", other.type_name()),
        }
    }

    #[test]
    fn array_copy_is_one_level_deep() {
        let inner = Value::array(vec![Value::Int(1)]);
        let outer = Value::array(vec![inner.clone()]);
        let copy = copy_value(&outer);

        let Value::Array(items) = &copy else {
            panic!("expected array");
        };
        assert!(items.borrow()[0].shares_storage(&inner));
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(copy_value(&Value::Int(7)), Value::Int(7));
        assert_eq!(copy_value(&Value::str("x")), Value::str("x"));
        assert_eq!(copy_value(&Value::Null), Value::Null);
        assert!(!Value::Int(7).is_array_like());
    }

    #[test]
    fn copy_column_builds_new_cells() {
        let column = vec![Value::array(vec![Value::Float(0.5)]), Value::Float(1.5)];
        let copied = copy_column(&column);

        assert_eq!(copied, column);
        assert!(!copied[0].shares_storage(&column[0]));
    }
}
