pub use alias::alias;
pub use cursor::VisibilityCursor;
pub use entry::{Behavior, BehaviorFn, MethodEntry};
pub use table::MethodTable;
pub use visibility::{Visibility, VisibilitySet};

mod alias;
mod cursor;
mod entry;
mod table;
mod visibility;
