//! Constructors for values and classes.
use std::rc::Rc;

use num_bigint::BigInt;

use super::class::{Class, ClassRef};
use super::object::Instance;
use super::value::Value;

pub fn nil() -> Value {
    Value::Nil
}

pub fn bool(value: bool) -> Value {
    Value::Bool(value)
}

pub fn int<I: Into<BigInt>>(value: I) -> Value {
    Value::Int(value.into())
}

pub fn str<S: Into<String>>(value: S) -> Value {
    Value::Str(value.into())
}

pub fn sym<S: Into<String>>(name: S) -> Value {
    Value::Sym(name.into())
}

pub fn class<S: Into<String>>(name: S, superclass: Option<&ClassRef>) -> ClassRef {
    Rc::new(Class::new(name, superclass.cloned()))
}

/// Allocate an instance of `class`. Initialization (if any) is the
/// caller's concern; see `VM::instantiate`.
pub fn instance(class: &ClassRef) -> Value {
    Value::Obj(Rc::new(Instance::new(class.clone())))
}
