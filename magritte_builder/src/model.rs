use std::fmt;

/// The scalar shapes a parameter may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    /// A signed integer (`i128` on the Cli).
    Int,
    /// A floating point number (`f64` on the Cli).
    Float,
    /// Any token, taken verbatim.
    Str,
    /// A boolean, specified either as a flag or via a truthy/falsy token.
    Bool,
    /// The literal token `None`.
    None,
}

/// The repeated shapes a parameter may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Ordered, duplicates kept.
    List,
    /// Unordered, duplicates removed.
    Set,
}

/// What a `List`/`Set` parameter does when one of its elements fails to parse.
///
/// The repetition always ends at the failing token.
/// The policy decides whether the elements captured so far are kept (`Truncate`), or the whole parameter fails (`Propagate`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElementFailure {
    /// Stop silently, keeping the previously parsed elements.
    #[default]
    Truncate,
    /// Fail the parameter with the element's error.
    Propagate,
}

/// The declared shape of a parameter.
///
/// Built once (typically via [`Describe`](crate::prelude::Describe)) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// A single token scalar.
    Leaf(LeafKind),
    /// A greedy repetition of the element shape.
    Container(ContainerKind, Box<TypeDescriptor>),
    /// A fixed sequence of shapes, each parsed in order.
    Tuple(Vec<TypeDescriptor>),
    /// The first alternative (in declared order) that parses.
    Union(Vec<TypeDescriptor>),
    /// One of an enumeration of constants, matched by their textual form.
    /// Only `Int`, `Str` and `None` constants are supported.
    Literal(Vec<Value>),
    /// A shape carrying a help annotation.
    Annotated(Box<TypeDescriptor>, String),
    /// A named type without a parsing shape; parsed as a verbatim string.
    Opaque(String),
}

impl TypeDescriptor {
    /// `int`
    pub fn int() -> Self {
        TypeDescriptor::Leaf(LeafKind::Int)
    }

    /// `float`
    pub fn float() -> Self {
        TypeDescriptor::Leaf(LeafKind::Float)
    }

    /// `str`
    pub fn string() -> Self {
        TypeDescriptor::Leaf(LeafKind::Str)
    }

    /// `bool`
    pub fn bool() -> Self {
        TypeDescriptor::Leaf(LeafKind::Bool)
    }

    /// `None`
    pub fn none() -> Self {
        TypeDescriptor::Leaf(LeafKind::None)
    }

    /// `list[element]`
    pub fn list(element: TypeDescriptor) -> Self {
        TypeDescriptor::Container(ContainerKind::List, Box::new(element))
    }

    /// `set[element]`
    pub fn set(element: TypeDescriptor) -> Self {
        TypeDescriptor::Container(ContainerKind::Set, Box::new(element))
    }

    /// `tuple[a, b, ..]`
    pub fn tuple(components: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        TypeDescriptor::Tuple(components.into_iter().collect())
    }

    /// `a | b | ..`
    pub fn union(alternatives: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        TypeDescriptor::Union(alternatives.into_iter().collect())
    }

    /// `literal[x, y, ..]`
    pub fn literal(constants: impl IntoIterator<Item = Value>) -> Self {
        TypeDescriptor::Literal(constants.into_iter().collect())
    }

    /// Wrap `inner` with a help annotation.
    pub fn annotated(inner: TypeDescriptor, help: impl Into<String>) -> Self {
        TypeDescriptor::Annotated(Box::new(inner), help.into())
    }

    /// A named type that is parsed as a verbatim string.
    pub fn opaque(name: impl Into<String>) -> Self {
        TypeDescriptor::Opaque(name.into())
    }

    /// The descriptor with all outer `Annotated` wrappers removed.
    pub fn unannotated(&self) -> &TypeDescriptor {
        match self {
            TypeDescriptor::Annotated(inner, _) => inner.unannotated(),
            other => other,
        }
    }

    /// The help text of the outermost annotation, if any.
    pub fn help(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Annotated(_, help) => Some(help.as_str()),
            _ => None,
        }
    }

    pub(crate) fn is_bool(&self) -> bool {
        matches!(self.unannotated(), TypeDescriptor::Leaf(LeafKind::Bool))
    }

    /// Find the first literal constant (depth first) which is not an `Int`, `Str` or `None`.
    pub(crate) fn unsupported_literal(&self) -> Option<&Value> {
        match self {
            TypeDescriptor::Leaf(_) | TypeDescriptor::Opaque(_) => None,
            TypeDescriptor::Container(_, element) => element.unsupported_literal(),
            TypeDescriptor::Annotated(inner, _) => inner.unsupported_literal(),
            TypeDescriptor::Tuple(nested) | TypeDescriptor::Union(nested) => {
                nested.iter().find_map(TypeDescriptor::unsupported_literal)
            }
            TypeDescriptor::Literal(constants) => constants
                .iter()
                .find(|c| !matches!(c, Value::Int(_) | Value::Str(_) | Value::None)),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Leaf(kind) => write!(f, "{kind}"),
            TypeDescriptor::Container(ContainerKind::List, element) => write!(f, "list[{element}]"),
            TypeDescriptor::Container(ContainerKind::Set, element) => write!(f, "set[{element}]"),
            TypeDescriptor::Tuple(components) => write!(f, "tuple[{}]", join(components, ", ")),
            TypeDescriptor::Union(alternatives) => write!(f, "{}", join(alternatives, " | ")),
            TypeDescriptor::Literal(constants) => {
                let constants: Vec<String> = constants
                    .iter()
                    .map(|c| match c {
                        Value::Str(s) => format!("{s:?}"),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "literal[{}]", constants.join(", "))
            }
            TypeDescriptor::Annotated(inner, _) => write!(f, "{inner}"),
            TypeDescriptor::Opaque(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeafKind::Int => "int",
            LeafKind::Float => "float",
            LeafKind::Str => "str",
            LeafKind::Bool => "bool",
            LeafKind::None => "None",
        };
        write!(f, "{name}")
    }
}

/// A parsed (or default) parameter value.
#[derive(Debug, Clone)]
pub enum Value {
    /// `int`
    Int(i128),
    /// `float`
    Float(f64),
    /// `str`
    Str(String),
    /// `bool`
    Bool(bool),
    /// `None`
    None,
    /// `list[..]`
    List(Vec<Value>),
    /// `set[..]`; always deduplicated, element order carries no meaning.
    Set(Vec<Value>),
    /// `tuple[..]`
    Tuple(Vec<Value>),
}

impl Value {
    /// Build a `Set`, keeping the first of any equal elements.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::default();

        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }

        Value::Set(unique)
    }

    /// The short name of this value's shape, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::None => "None",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Tuple(_) => "tuple",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::None, Value::None) => true,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|item| b.contains(item))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Str(value) => write!(f, "{value}"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::None => write!(f, "None"),
            Value::List(items) => write!(f, "[{}]", join(items, ", ")),
            Value::Set(items) => write!(f, "{{{}}}", join(items, ", ")),
            Value::Tuple(items) => write!(f, "({})", join(items, ", ")),
        }
    }
}

fn join(items: &[impl fmt::Display], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(separator)
}
