use crate::methods::MethodEntry;

use super::class::{Class, ClassRef};

/// Produces the classes searched after a class's own table fails to
/// answer a name, most-derived first. Implementations must terminate.
pub trait Ancestry {
    fn ancestors(&self, class: &Class) -> Vec<ClassRef>;

    /// Is `class` the same class as `other` or one of its descendants?
    fn is_kind_of(&self, class: &Class, other: &Class) -> bool {
        class.is(other) || self.ancestors(class).iter().any(|ancestor| ancestor.is(other))
    }

    /// Find the class that answers `name` and a copy of its entry. The
    /// search stops at the first class that has *any* entry for `name`;
    /// visibility plays no part here.
    fn resolve(&self, class: &ClassRef, name: &str) -> Option<(ClassRef, MethodEntry)> {
        if let Some(entry) = class.methods().lookup(name) {
            return Some((class.clone(), entry.clone()));
        }
        for ancestor in self.ancestors(class) {
            let found = ancestor.methods().lookup(name).cloned();
            if let Some(entry) = found {
                return Some((ancestor, entry));
            }
        }
        None
    }
}

/// Follows superclass links.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuperclassChain;

impl Ancestry for SuperclassChain {
    fn ancestors(&self, class: &Class) -> Vec<ClassRef> {
        let mut ancestors = vec![];
        let mut current = class.superclass();
        while let Some(superclass) = current {
            ancestors.push(superclass.clone());
            current = superclass.superclass();
        }
        ancestors
    }
}
