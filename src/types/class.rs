//! Classes own a method table and (optionally) a superclass. Method
//! resolution and visibility checks live in the VM; the methods here
//! are the introspection surface (`instance_methods`,
//! `method_defined?`, etc.).
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;

use crate::methods::{MethodEntry, MethodTable, Visibility, VisibilitySet};

use super::ancestry::{Ancestry, SuperclassChain};

pub type ClassRef = Rc<Class>;
pub type ClassId = usize;

static NEXT_CLASS_ID: AtomicUsize = AtomicUsize::new(1);

pub struct Class {
    id: ClassId,
    name: String,
    superclass: Option<ClassRef>,
    methods: RefCell<MethodTable>,
}

impl Class {
    pub fn new<S: Into<String>>(name: S, superclass: Option<ClassRef>) -> Self {
        let id = NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed);
        let name = name.into();
        let methods = RefCell::new(MethodTable::new(id, name.as_str()));
        Self { id, name, superclass, methods }
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn superclass(&self) -> Option<&ClassRef> {
        self.superclass.as_ref()
    }

    pub fn is(&self, other: &Self) -> bool {
        self.id == other.id
    }

    pub fn methods(&self) -> Ref<'_, MethodTable> {
        self.methods.borrow()
    }

    pub fn methods_mut(&self) -> RefMut<'_, MethodTable> {
        self.methods.borrow_mut()
    }

    /// Most-derived-first superclass chain, not including this class.
    pub fn ancestors(&self) -> Vec<ClassRef> {
        SuperclassChain.ancestors(self)
    }

    /// Is this class `other` or a subclass of `other`?
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        SuperclassChain.is_kind_of(self, other)
    }

    /// Find the entry that answers `name` for instances of this class,
    /// without regard to visibility. Returns a copy so no borrow of any
    /// table is held by the caller.
    pub fn find_method(self: &Rc<Self>, name: &str) -> Option<MethodEntry> {
        SuperclassChain.resolve(self, name).map(|(_, entry)| entry)
    }

    /// Names of methods callable on instances whose visibility is in
    /// `filter`. With `inherited`, ancestor tables are included; a name
    /// shadowed by a more-derived class is reported once, filtered by
    /// the most-derived entry's visibility.
    pub fn instance_methods(&self, filter: VisibilitySet, inherited: bool) -> Vec<String> {
        if !inherited {
            return self.methods().names(filter);
        }
        let mut seen: IndexMap<String, Visibility> = IndexMap::new();
        let mut collect = |table: &MethodTable| {
            for entry in table.iter() {
                seen.entry(entry.name().to_owned()).or_insert(entry.visibility());
            }
        };
        collect(&*self.methods());
        for class in self.ancestors() {
            collect(&*class.methods());
        }
        seen.into_iter()
            .filter(|(_, visibility)| filter.admits(*visibility))
            .map(|(name, _)| name)
            .collect()
    }

    /// Public or protected method with `name` exists in this class or
    /// one of its ancestors.
    pub fn method_defined(self: &Rc<Self>, name: &str) -> bool {
        self.find_method(name)
            .map(|entry| VisibilitySet::NON_PRIVATE.admits(entry.visibility()))
            .unwrap_or(false)
    }

    pub fn public_method_defined(self: &Rc<Self>, name: &str) -> bool {
        self.find_method(name).map(|entry| entry.is_public()).unwrap_or(false)
    }

    pub fn private_method_defined(self: &Rc<Self>, name: &str) -> bool {
        self.find_method(name)
            .map(|entry| entry.visibility() == Visibility::Private)
            .unwrap_or(false)
    }

    pub fn protected_method_defined(self: &Rc<Self>, name: &str) -> bool {
        self.find_method(name)
            .map(|entry| entry.visibility() == Visibility::Protected)
            .unwrap_or(false)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Class {} @ {}", self.name(), self.id())
    }
}
