use crate::subject::Subject;
use std::fmt;

#[derive(Debug, Clone)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(i32),
    Double(f64),
    String(String),
    /// Discriminant of an enumeration member.
    Enum(i64),
    Object(Subject),
    /// An absent object reference.
    Null,
}

impl PropertyValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            PropertyValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<i64> {
        match self {
            PropertyValue::Enum(e) => Some(*e),
            _ => None,
        }
    }

    /// Numeric view used by range controls.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Integer(i) => Some(f64::from(*i)),
            PropertyValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyValue::Boolean(_) => "bool",
            PropertyValue::Integer(_) => "int",
            PropertyValue::Double(_) => "float",
            PropertyValue::String(_) => "string",
            PropertyValue::Enum(_) => "enum",
            PropertyValue::Object(_) => "object",
            PropertyValue::Null => "null",
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyValue::Boolean(a), PropertyValue::Boolean(b)) => a == b,
            (PropertyValue::Integer(a), PropertyValue::Integer(b)) => a == b,
            (PropertyValue::Double(a), PropertyValue::Double(b)) => a == b,
            (PropertyValue::String(a), PropertyValue::String(b)) => a == b,
            (PropertyValue::Enum(a), PropertyValue::Enum(b)) => a == b,
            (PropertyValue::Object(a), PropertyValue::Object(b)) => a.same_object(b),
            (PropertyValue::Null, PropertyValue::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Double(d) => write!(f, "{}", d),
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Enum(e) => write!(f, "{}", e),
            PropertyValue::Object(o) => write!(f, "<{}>", o.type_info().name),
            PropertyValue::Null => f.write_str("<null>"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(d: f64) -> Self {
        PropertyValue::Double(d)
    }
}

impl From<Subject> for PropertyValue {
    fn from(subject: Subject) -> Self {
        PropertyValue::Object(subject)
    }
}

impl From<Option<Subject>> for PropertyValue {
    fn from(subject: Option<Subject>) -> Self {
        subject.map_or(PropertyValue::Null, PropertyValue::Object)
    }
}
