pub use class_body::ClassBody;
pub use context::{CallContext, CallSite, Frame};
pub use dispatch::check_visibility;
pub use result::{
    CallDepth, MutationResult, RuntimeBoolResult, RuntimeErr, RuntimeErrKind, RuntimeResult,
};
pub use vm::{DEFAULT_MAX_CALL_DEPTH, VM};

mod class_body;
mod context;
mod dispatch;
mod result;
mod vm;
