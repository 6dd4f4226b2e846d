use std::fmt;
use std::rc::Rc;

use crate::types::{Args, ClassId, Value};
use crate::vm::{RuntimeResult, VM};

use super::visibility::Visibility;

pub type BehaviorFn = dyn Fn(&mut VM, Value, Args) -> RuntimeResult;

// Behavior ------------------------------------------------------------

struct BehaviorInner {
    name: String,
    func: Box<BehaviorFn>,
}

/// The callable part of a method. Cloning a `Behavior` clones the
/// reference, never the callable, so two entries holding clones of the
/// same behavior are the *same* behavior (see [`Behavior::is`]).
#[derive(Clone)]
pub struct Behavior {
    inner: Rc<BehaviorInner>,
}

impl Behavior {
    pub fn new<S, F>(name: S, func: F) -> Self
    where
        S: Into<String>,
        F: Fn(&mut VM, Value, Args) -> RuntimeResult + 'static,
    {
        Self { inner: Rc::new(BehaviorInner { name: name.into(), func: Box::new(func) }) }
    }

    /// Name the behavior was originally defined under. Aliases keep
    /// reporting this name.
    pub fn name(&self) -> &str {
        self.inner.name.as_str()
    }

    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    pub fn is(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn call(&self, vm: &mut VM, this: Value, args: Args) -> RuntimeResult {
        (self.inner.func)(vm, this, args)
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<behavior {} @ {}>", self.name(), self.id())
    }
}

// Method Entry --------------------------------------------------------

/// A behavior bound to a name in one class's method table, tagged with
/// its own visibility.
#[derive(Clone, Debug)]
pub struct MethodEntry {
    name: String,
    behavior: Behavior,
    visibility: Visibility,
    owner: ClassId,
}

impl MethodEntry {
    pub fn new<S: Into<String>>(
        name: S,
        behavior: Behavior,
        visibility: Visibility,
        owner: ClassId,
    ) -> Self {
        Self { name: name.into(), behavior, visibility, owner }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// ID of the class whose table holds this entry.
    pub fn owner(&self) -> ClassId {
        self.owner
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}
