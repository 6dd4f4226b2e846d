use std::fmt;

use num_bigint::BigInt;

use super::class::ClassRef;
use super::object::ObjectRef;

pub type Args = Vec<Value>;

/// A runtime value. Scalars are stored inline; instances of classes
/// are shared by reference.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(BigInt),
    Str(String),
    Sym(String),
    Obj(ObjectRef),
}

impl Value {
    /// The class whose method table answers calls on this value.
    /// Scalars don't have one here.
    pub fn class(&self) -> Option<ClassRef> {
        match self {
            Self::Obj(obj) => Some(obj.class().clone()),
            _ => None,
        }
    }

    pub fn class_name(&self) -> String {
        match self {
            Self::Nil => "NilClass".to_owned(),
            Self::Bool(true) => "TrueClass".to_owned(),
            Self::Bool(false) => "FalseClass".to_owned(),
            Self::Int(_) => "Integer".to_owned(),
            Self::Str(_) => "String".to_owned(),
            Self::Sym(_) => "Symbol".to_owned(),
            Self::Obj(obj) => obj.class().name().to_owned(),
        }
    }

    pub fn as_obj(&self) -> Option<&ObjectRef> {
        if let Self::Obj(obj) = self {
            Some(obj)
        } else {
            None
        }
    }

    pub fn get_int_val(&self) -> Option<&BigInt> {
        if let Self::Int(val) = self {
            Some(val)
        } else {
            None
        }
    }

    pub fn get_str_val(&self) -> Option<&str> {
        match self {
            Self::Str(val) | Self::Sym(val) => Some(val.as_str()),
            _ => None,
        }
    }

    /// `nil` and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Identity. Scalars are identical when they're equal; objects only
    /// when they're the same instance.
    pub fn is(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Obj(a), Self::Obj(b)) => a.is(b),
            (Self::Obj(_), _) | (_, Self::Obj(_)) => false,
            _ => self.is_equal(other),
        }
    }

    pub fn is_equal(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Sym(a), Sym(b)) => a == b,
            (Obj(a), Obj(b)) => a.is(b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

// Display -------------------------------------------------------------

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, ""),
            Self::Bool(val) => write!(f, "{val}"),
            Self::Int(val) => write!(f, "{val}"),
            Self::Str(val) => write!(f, "{val}"),
            Self::Sym(val) => write!(f, "{val}"),
            Self::Obj(obj) => write!(f, "{obj}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Str(val) => write!(f, "{val:?}"),
            Self::Sym(val) => write!(f, ":{val}"),
            Self::Obj(obj) => write!(f, "{obj:?}"),
            _ => write!(f, "{self}"),
        }
    }
}
