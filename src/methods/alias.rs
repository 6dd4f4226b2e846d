use crate::vm::{MutationResult, RuntimeErr};

use super::entry::MethodEntry;
use super::table::MethodTable;

/// Bind `new_name` to the behavior currently bound to `existing_name`.
///
/// The new entry shares the behavior *reference* as it is right now.
/// Redefining `existing_name` later does not change what `new_name`
/// does. The new entry starts with the existing entry's visibility and
/// from then on has its own; changing one never changes the other.
///
/// An entry already named `new_name` is replaced.
pub fn alias(table: &mut MethodTable, new_name: &str, existing_name: &str) -> MutationResult {
    let existing = match table.lookup(existing_name) {
        Some(entry) => entry,
        None => return Err(RuntimeErr::unknown_method(table.owner_name(), existing_name)),
    };

    log::trace!(
        "ALIAS: {}#{new_name} -> {} ({})",
        table.owner_name(),
        existing.behavior().name(),
        existing.visibility()
    );

    let entry = MethodEntry::new(
        new_name,
        existing.behavior().clone(),
        existing.visibility(),
        table.owner(),
    );

    table.insert_entry(entry);
    Ok(())
}
