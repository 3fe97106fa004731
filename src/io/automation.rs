use thiserror::Error;

/// Errors raised by an automation host or one of its objects
#[derive(Debug, Error)]
pub enum HostError {
    #[error("automation host `{prog_id}` is not available on this platform")]
    Unsupported { prog_id: String },
    #[error("failed to start `{prog_id}`: {message}")]
    Connect { prog_id: String, message: String },
    #[error("`{member}` failed: {message}")]
    Invoke { member: String, message: String },
    #[error("`{member}` returned {found}, expected {expected}")]
    TypeMismatch {
        member: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl HostError {
    pub fn invoke<E: std::fmt::Display>(member: &str, e: E) -> Self {
        HostError::Invoke {
            member: member.to_string(),
            message: e.to_string(),
        }
    }
}

/// A value crossing the automation boundary: arguments, property values and
/// call results. `Object` carries an owned handle that is released on drop.
pub enum Variant<O> {
    Empty,
    Bool(bool),
    Int(i32),
    Float(f64),
    Text(String),
    Object(O),
}

impl<O> Variant<O> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Empty => "empty",
            Variant::Bool(_) => "bool",
            Variant::Int(_) => "int",
            Variant::Float(_) => "float",
            Variant::Text(_) => "text",
            Variant::Object(_) => "object",
        }
    }

    pub fn into_object(self, member: &str) -> Result<O, HostError> {
        match self {
            Variant::Object(o) => Ok(o),
            other => Err(other.mismatch(member, "object")),
        }
    }

    /// Numeric view; hosts are free to report integers as floats and vice versa.
    pub fn to_f64(&self, member: &str) -> Result<f64, HostError> {
        match *self {
            Variant::Int(v) => Ok(f64::from(v)),
            Variant::Float(v) => Ok(v),
            ref other => Err(other.mismatch(member, "number")),
        }
    }

    pub fn to_i32(&self, member: &str) -> Result<i32, HostError> {
        match *self {
            Variant::Int(v) => Ok(v),
            Variant::Float(v) if v.fract() == 0.0 => Ok(v as i32),
            ref other => Err(other.mismatch(member, "int")),
        }
    }

    fn mismatch(&self, member: &str, expected: &'static str) -> HostError {
        HostError::TypeMismatch {
            member: member.to_string(),
            expected,
            found: self.type_name(),
        }
    }
}

impl<O> std::fmt::Debug for Variant<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Empty => write!(f, "Empty"),
            Variant::Bool(v) => write!(f, "Bool({})", v),
            Variant::Int(v) => write!(f, "Int({})", v),
            Variant::Float(v) => write!(f, "Float({})", v),
            Variant::Text(v) => write!(f, "Text({:?})", v),
            Variant::Object(_) => write!(f, "Object"),
        }
    }
}

/// Late-bound access to one object of the host's object model.
///
/// Implementations release the underlying handle when dropped.
pub trait Dispatch: Sized {
    /// Read a property.
    fn get(&self, name: &str) -> Result<Variant<Self>, HostError>;

    /// Assign a property.
    fn put(&self, name: &str, value: Variant<Self>) -> Result<(), HostError>;

    /// Invoke a method with positional arguments, left to right.
    fn call(&self, name: &str, args: Vec<Variant<Self>>) -> Result<Variant<Self>, HostError>;
}

/// Entry point into an automation server.
pub trait AutomationHost {
    type Object: Dispatch;

    /// Start (or attach to) the application registered under `prog_id` and
    /// return its root object.
    fn connect(&self, prog_id: &str) -> Result<Self::Object, HostError>;
}

/// Object type of a host that can never hand one out.
#[derive(Debug)]
pub enum Unreachable {}

impl Dispatch for Unreachable {
    fn get(&self, _name: &str) -> Result<Variant<Self>, HostError> {
        match *self {}
    }

    fn put(&self, _name: &str, _value: Variant<Self>) -> Result<(), HostError> {
        match *self {}
    }

    fn call(&self, _name: &str, _args: Vec<Variant<Self>>) -> Result<Variant<Self>, HostError> {
        match *self {}
    }
}

/// Host used on platforms without COM; every connection attempt fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedHost;

impl AutomationHost for UnsupportedHost {
    type Object = Unreachable;

    fn connect(&self, prog_id: &str) -> Result<Self::Object, HostError> {
        Err(HostError::Unsupported {
            prog_id: prog_id.to_string(),
        })
    }
}
