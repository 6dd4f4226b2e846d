use std::fmt;
use std::fmt::Formatter;

use crate::types::Value;

pub type CallDepth = usize;

pub type RuntimeResult = Result<Value, RuntimeErr>;
pub type RuntimeBoolResult = Result<bool, RuntimeErr>;
pub type MutationResult = Result<(), RuntimeErr>;

// Runtime errors ------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeErr {
    pub kind: RuntimeErrKind,
}

impl RuntimeErr {
    pub fn new(kind: RuntimeErrKind) -> Self {
        Self { kind }
    }

    pub fn unknown_method<S: Into<String>>(class_name: S, name: S) -> Self {
        Self::new(RuntimeErrKind::UnknownMethod(class_name.into(), name.into()))
    }

    pub fn no_method<S: Into<String>>(class_name: S, name: S) -> Self {
        Self::new(RuntimeErrKind::NoMethodErr(class_name.into(), name.into()))
    }

    pub fn private_method<S: Into<String>>(class_name: S, name: S) -> Self {
        Self::new(RuntimeErrKind::PrivateMethodErr(class_name.into(), name.into()))
    }

    pub fn protected_method<S: Into<String>>(class_name: S, name: S) -> Self {
        Self::new(RuntimeErrKind::ProtectedMethodErr(class_name.into(), name.into()))
    }

    pub fn arg_err<S: Into<String>>(message: S) -> Self {
        Self::new(RuntimeErrKind::ArgErr(message.into()))
    }

    pub fn type_err<S: Into<String>>(message: S) -> Self {
        Self::new(RuntimeErrKind::TypeErr(message.into()))
    }

    pub fn recursion_depth_exceeded(max_call_depth: CallDepth) -> Self {
        Self::new(RuntimeErrKind::RecursionDepthExceeded(max_call_depth))
    }

    pub fn config_name_not_known<S: Into<String>>(name: S) -> Self {
        Self::new(RuntimeErrKind::ConfigNameNotKnown(name.into()))
    }

    pub fn config_value_is_not_valid<S: Into<String>>(name: S, msg: S) -> Self {
        Self::new(RuntimeErrKind::ConfigValueIsNotValid(name.into(), msg.into()))
    }

    /// Is this one of the errors raised when a visibility rule rejects
    /// a call?
    pub fn is_visibility_err(&self) -> bool {
        matches!(
            self.kind,
            RuntimeErrKind::PrivateMethodErr(..) | RuntimeErrKind::ProtectedMethodErr(..)
        )
    }
}

impl fmt::Display for RuntimeErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RuntimeErrKind {
    // Mutations
    UnknownMethod(String, String),
    // Dispatch
    NoMethodErr(String, String),
    PrivateMethodErr(String, String),
    ProtectedMethodErr(String, String),
    RecursionDepthExceeded(CallDepth),
    // Raised by behaviors
    ArgErr(String),
    TypeErr(String),
    // Config
    ConfigNameNotKnown(String),
    ConfigValueIsNotValid(String, String),
}

impl fmt::Display for RuntimeErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use RuntimeErrKind::*;
        let msg = match self {
            UnknownMethod(class_name, name) => {
                format!("undefined method `{name}' for class `{class_name}'")
            }
            NoMethodErr(class_name, name) => {
                format!("undefined method `{name}' for an instance of {class_name}")
            }
            PrivateMethodErr(class_name, name) => {
                format!("private method `{name}' called for an instance of {class_name}")
            }
            ProtectedMethodErr(class_name, name) => {
                format!("protected method `{name}' called for an instance of {class_name}")
            }
            RecursionDepthExceeded(max_call_depth) => {
                format!("Maximum recursion depth of {max_call_depth} was exceeded")
            }
            ArgErr(msg) => format!("ArgumentError: {msg}"),
            TypeErr(msg) => format!("TypeError: {msg}"),
            ConfigNameNotKnown(name) => format!("Config name not known: {name}"),
            ConfigValueIsNotValid(name, msg) => {
                format!("Config value is not valid for {name}: {msg}")
            }
        };
        write!(f, "{msg}")
    }
}
