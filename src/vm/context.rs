use std::fmt;

use crate::types::{ClassRef, Value};

/// Shape of the receiver expression at a call site. The evaluator
/// supplies this for every call; private methods can only be reached
/// through the first two forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallSite {
    /// `foo(...)` with no receiver.
    Implicit,
    /// `self.foo(...)`, the receiver literally being `self`.
    SelfRef,
    /// `obj.foo(...)` for any other receiver expression.
    Explicit,
}

impl CallSite {
    pub fn has_explicit_receiver(&self) -> bool {
        matches!(self, Self::Explicit)
    }
}

// Frame ---------------------------------------------------------------

/// Records which method body is executing: the class that supplied the
/// method and the receiver it was called on.
pub struct Frame {
    owner: ClassRef,
    this: Value,
    name: String,
}

impl Frame {
    pub fn new<S: Into<String>>(owner: ClassRef, this: Value, name: S) -> Self {
        Self { owner, this, name: name.into() }
    }

    pub fn owner(&self) -> &ClassRef {
        &self.owner
    }

    pub fn this(&self) -> &Value {
        &self.this
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} on {:?}", self.owner.name(), self.name, self.this)
    }
}

// Call Context --------------------------------------------------------

/// Built for one dispatch and dropped when it's done. `caller` is
/// `None` when the call doesn't come from inside a method body.
#[derive(Debug)]
pub struct CallContext<'a> {
    caller: Option<&'a Frame>,
    site: CallSite,
}

impl<'a> CallContext<'a> {
    pub fn new(caller: Option<&'a Frame>, site: CallSite) -> Self {
        Self { caller, site }
    }

    pub fn external(site: CallSite) -> Self {
        Self::new(None, site)
    }

    pub fn caller(&self) -> Option<&'a Frame> {
        self.caller
    }

    pub fn site(&self) -> CallSite {
        self.site
    }

    pub fn is_external(&self) -> bool {
        self.caller.is_none()
    }
}
