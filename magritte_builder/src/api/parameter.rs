use crate::model::{TypeDescriptor, Value};
use crate::prelude::{Describe, IntoValue};

/// A named parameter of the command line parser.
///
/// Every parameter is a 'keyword' parameter: it is spelled out on the Cli, followed by the tokens for its value.
/// The spellings are derived from the name (see [`CommandLineParser`](crate::CommandLineParser)).
/// A parameter without a default is required.
///
/// ### Example
/// ```
/// # use magritte_builder as magritte;
/// use magritte::{Parameter, TypeDescriptor, Value};
///
/// let parameter = Parameter::new("items", TypeDescriptor::list(TypeDescriptor::int()))
///     .default(vec![1i64, 2])
///     .help("The items to sum.");
///
/// assert_eq!(parameter.name(), "items");
/// assert_eq!(
///     parameter.default_value(),
///     Some(&Value::List(vec![Value::Int(1), Value::Int(2)]))
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    descriptor: TypeDescriptor,
    default: Option<Value>,
    help: Option<String>,
}

impl Parameter {
    /// Create a parameter with an explicit type descriptor.
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            default: None,
            help: None,
        }
    }

    /// Create a parameter described by the Rust type `T`.
    ///
    /// ### Example
    /// ```
    /// # use magritte_builder as magritte;
    /// use magritte::{Parameter, TypeDescriptor};
    ///
    /// let parameter = Parameter::typed::<Option<u32>>("offset");
    ///
    /// assert_eq!(
    ///     parameter.descriptor(),
    ///     &TypeDescriptor::union([TypeDescriptor::int(), TypeDescriptor::none()])
    /// );
    /// ```
    pub fn typed<T: Describe>(name: impl Into<String>) -> Self {
        Self::new(name, T::describe())
    }

    /// Give the parameter a default value, making it optional on the Cli.
    /// If repeated, only the final default will apply.
    pub fn default(mut self, value: impl IntoValue) -> Self {
        self.default.replace(value.into_value());
        self
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// The name of this parameter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type descriptor of this parameter.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// The default value of this parameter, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The help message of this parameter.
    /// Falls back to the help annotation of the type descriptor.
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref().or_else(|| self.descriptor.help())
    }
}
