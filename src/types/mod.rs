pub use ancestry::{Ancestry, SuperclassChain};
pub use class::{Class, ClassId, ClassRef};
pub use object::{Instance, ObjectRef};
pub use value::{Args, Value};

pub mod new;

mod ancestry;
mod class;
mod object;
mod value;
