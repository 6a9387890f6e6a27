use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::{TypeDescriptor, Value};
use crate::prelude::{Describe, FromValue, IntoValue};

/// An error converting a parsed value into a Rust type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value is of a different shape than the Rust type.
    #[error("expected a {expected} value, found the {found} '{value}'.")]
    Mismatch {
        /// The shape the Rust type binds.
        expected: &'static str,
        /// The shape of the value.
        found: &'static str,
        /// The rendered value.
        value: String,
    },

    /// The integer does not fit the Rust type.
    #[error("'{value}' is out of range for {type_name}.")]
    OutOfRange {
        /// The rendered value.
        value: String,
        /// The Rust type.
        type_name: &'static str,
    },

    /// The tuple has a different number of components than the Rust type.
    #[error("expected a tuple of {expected} components, found {found}.")]
    Arity {
        /// The Rust tuple arity.
        expected: usize,
        /// The parsed tuple arity.
        found: usize,
    },

    /// There is no value by this name.
    #[error("no value for '{0}'.")]
    Missing(String),

    /// The value by this name failed to convert.
    #[error("'{name}': {source}")]
    Field {
        /// The parameter name.
        name: String,
        /// The underlying conversion error.
        source: Box<ValueError>,
    },
}

impl ValueError {
    fn mismatch(expected: &'static str, value: &Value) -> Self {
        ValueError::Mismatch {
            expected,
            found: value.kind_name(),
            value: value.to_string(),
        }
    }
}

macro_rules! integer_binding {
    ($($t:ty),*) => {
        $(
            impl Describe for $t {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::int()
                }
            }

            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Int(inner) => <$t>::try_from(inner).map_err(|_| ValueError::OutOfRange {
                            value: inner.to_string(),
                            type_name: stringify!($t),
                        }),
                        other => Err(ValueError::mismatch("int", &other)),
                    }
                }
            }

            impl IntoValue for $t {
                fn into_value(self) -> Value {
                    // Every bound integer type fits within i128.
                    Value::Int(self as i128)
                }
            }
        )*
    };
}

integer_binding!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_binding {
    ($($t:ty),*) => {
        $(
            impl Describe for $t {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::float()
                }
            }

            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Float(inner) => Ok(inner as $t),
                        Value::Int(inner) => Ok(inner as $t),
                        other => Err(ValueError::mismatch("float", &other)),
                    }
                }
            }

            impl IntoValue for $t {
                fn into_value(self) -> Value {
                    Value::Float(self as f64)
                }
            }
        )*
    };
}

float_binding!(f32, f64);

impl Describe for String {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::string()
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Str(inner) => Ok(inner),
            other => Err(ValueError::mismatch("str", &other)),
        }
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Describe for bool {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::bool()
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(inner) => Ok(inner),
            other => Err(ValueError::mismatch("bool", &other)),
        }
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl Describe for () {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::none()
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::None => Ok(()),
            other => Err(ValueError::mismatch("None", &other)),
        }
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::None
    }
}

impl Describe for PathBuf {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::opaque("path")
    }
}

impl FromValue for PathBuf {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Str(inner) => Ok(PathBuf::from(inner)),
            other => Err(ValueError::mismatch("path", &other)),
        }
    }
}

impl IntoValue for PathBuf {
    fn into_value(self) -> Value {
        Value::Str(self.to_string_lossy().into_owned())
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

/// `Option<T>` is the union `T | None`, tried in that order.
impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::union([T::describe(), TypeDescriptor::none()])
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::None => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(inner) => inner.into_value(),
            None => Value::None,
        }
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("list", &other)),
        }
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: Describe> Describe for HashSet<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::set(T::describe())
    }
}

impl<T: FromValue + Eq + Hash> FromValue for HashSet<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Set(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("set", &other)),
        }
    }
}

impl<T: IntoValue> IntoValue for HashSet<T> {
    fn into_value(self) -> Value {
        Value::set(self.into_iter().map(IntoValue::into_value))
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::set(T::describe())
    }
}

impl<T: FromValue + Ord> FromValue for BTreeSet<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Set(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("set", &other)),
        }
    }
}

impl<T: IntoValue> IntoValue for BTreeSet<T> {
    fn into_value(self) -> Value {
        Value::set(self.into_iter().map(IntoValue::into_value))
    }
}

macro_rules! tuple_binding {
    ($arity:literal; $($t:ident),+) => {
        impl<$($t: Describe),+> Describe for ($($t,)+) {
            fn describe() -> TypeDescriptor {
                TypeDescriptor::tuple([$($t::describe()),+])
            }
        }

        impl<$($t: FromValue),+> FromValue for ($($t,)+) {
            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::Tuple(components) if components.len() == $arity => {
                        let mut components = components.into_iter();
                        Ok(($(
                            $t::from_value(components.next().ok_or(ValueError::Arity {
                                expected: $arity,
                                found: 0,
                            })?)?,
                        )+))
                    }
                    Value::Tuple(components) => Err(ValueError::Arity {
                        expected: $arity,
                        found: components.len(),
                    }),
                    other => Err(ValueError::mismatch("tuple", &other)),
                }
            }
        }

        impl<$($t: IntoValue),+> IntoValue for ($($t,)+) {
            #[allow(non_snake_case)]
            fn into_value(self) -> Value {
                let ($($t,)+) = self;
                Value::Tuple(vec![$($t.into_value()),+])
            }
        }
    };
}

tuple_binding!(1; A);
tuple_binding!(2; A, B);
tuple_binding!(3; A, B, C);
tuple_binding!(4; A, B, C, D);
