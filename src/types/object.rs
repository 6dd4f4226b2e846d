use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::class::ClassRef;
use super::value::Value;

pub type ObjectRef = Rc<Instance>;

/// An instance of a user-defined class. Instance variables are keyed
/// by name without the `@` sigil.
pub struct Instance {
    class: ClassRef,
    ivars: RefCell<IndexMap<String, Value>>,
}

impl Instance {
    pub fn new(class: ClassRef) -> Self {
        Self { class, ivars: RefCell::new(IndexMap::new()) }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn id(&self) -> usize {
        self as *const Self as usize
    }

    pub fn is(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Unset instance variables read as nil.
    pub fn get_ivar(&self, name: &str) -> Value {
        self.ivars.borrow().get(name).cloned().unwrap_or(Value::Nil)
    }

    pub fn set_ivar<S: Into<String>>(&self, name: S, value: Value) {
        self.ivars.borrow_mut().insert(name.into(), value);
    }
}

// Display -------------------------------------------------------------

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<{}>", self.class.name())
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ivars = self.ivars.borrow();
        if ivars.is_empty() {
            return write!(f, "{self}");
        }
        let ivars = ivars
            .iter()
            .map(|(name, value)| format!("@{name}={value:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "#<{} {}>", self.class.name(), ivars)
    }
}
