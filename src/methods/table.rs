use indexmap::IndexMap;

use crate::types::ClassId;
use crate::vm::{MutationResult, RuntimeErr};

use super::entry::{Behavior, MethodEntry};
use super::visibility::{Visibility, VisibilitySet};

/// The methods declared directly on one class, keyed by name. Entries
/// keep definition order, which only matters for listing.
pub struct MethodTable {
    owner: ClassId,
    owner_name: String,
    entries: IndexMap<String, MethodEntry>,
}

impl MethodTable {
    pub fn new<S: Into<String>>(owner: ClassId, owner_name: S) -> Self {
        Self { owner, owner_name: owner_name.into(), entries: IndexMap::new() }
    }

    pub fn owner(&self) -> ClassId {
        self.owner
    }

    pub fn owner_name(&self) -> &str {
        self.owner_name.as_str()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, String, MethodEntry> {
        self.entries.values()
    }

    /// Insert or overwrite the entry for `name`. The last definition
    /// wins, and a redefinition takes `visibility` rather than keeping
    /// the visibility of the entry it replaces.
    pub fn define<S: Into<String>>(
        &mut self,
        name: S,
        behavior: Behavior,
        visibility: Visibility,
    ) {
        let name = name.into();
        log::trace!("DEFINE: {}#{name} ({visibility})", self.owner_name);
        let entry = MethodEntry::new(name.as_str(), behavior, visibility, self.owner);
        self.entries.insert(name, entry);
    }

    /// Store an entry built elsewhere (aliasing).
    pub(crate) fn insert_entry(&mut self, entry: MethodEntry) {
        debug_assert_eq!(entry.owner(), self.owner);
        self.entries.insert(entry.name().to_owned(), entry);
    }

    pub fn lookup(&self, name: &str) -> Option<&MethodEntry> {
        self.entries.get(name)
    }

    pub fn set_visibility(&mut self, name: &str, visibility: Visibility) -> MutationResult {
        match self.entries.get_mut(name) {
            Some(entry) => {
                log::trace!(
                    "SET VISIBILITY: {}#{name} {} -> {visibility}",
                    self.owner_name,
                    entry.visibility()
                );
                entry.set_visibility(visibility);
                Ok(())
            }
            None => Err(RuntimeErr::unknown_method(self.owner_name.as_str(), name)),
        }
    }

    /// Change the visibility of several entries at once. Every name is
    /// checked before any entry is touched.
    pub fn set_visibilities(&mut self, names: &[&str], visibility: Visibility) -> MutationResult {
        if let Some(missing) = names.iter().find(|name| !self.contains(name)) {
            return Err(RuntimeErr::unknown_method(self.owner_name.as_str(), *missing));
        }
        for name in names {
            self.set_visibility(name, visibility)?;
        }
        Ok(())
    }

    /// Names of entries whose visibility is in `filter`, in definition
    /// order.
    pub fn names(&self, filter: VisibilitySet) -> Vec<String> {
        self.entries
            .values()
            .filter(|entry| filter.admits(entry.visibility()))
            .map(|entry| entry.name().to_owned())
            .collect()
    }
}
