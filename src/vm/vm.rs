use crate::config::CONFIG;
use crate::methods::MethodEntry;
use crate::types::{new, Ancestry, Args, ClassRef, SuperclassChain, Value};

use super::context::Frame;
use super::result::{CallDepth, RuntimeErr, RuntimeResult};

pub const DEFAULT_MAX_CALL_DEPTH: CallDepth = 256;

/// Executes method behaviors. The VM keeps the stack of executing
/// method bodies, which is where call contexts come from, and the
/// output written by behaviors via [`VM::puts`].
pub struct VM {
    pub(super) ancestry: Box<dyn Ancestry>,
    pub(super) frames: Vec<Frame>,
    max_call_depth: CallDepth,
    debug: bool,
    output: Vec<String>,
}

impl Default for VM {
    /// Create a VM using the process-wide config.
    fn default() -> Self {
        match CONFIG.read() {
            Ok(config) => {
                let mut vm = Self::new(config.max_call_depth());
                vm.set_debug(config.debug());
                vm
            }
            Err(_) => Self::new(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl VM {
    /// A `max_call_depth` of 0 disables the depth check.
    pub fn new(max_call_depth: CallDepth) -> Self {
        Self::with_ancestry(Box::new(SuperclassChain), max_call_depth)
    }

    pub fn with_ancestry(ancestry: Box<dyn Ancestry>, max_call_depth: CallDepth) -> Self {
        Self { ancestry, frames: vec![], max_call_depth, debug: false, output: vec![] }
    }

    pub fn max_call_depth(&self) -> CallDepth {
        self.max_call_depth
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// In debug mode every invocation is logged at debug level along
    /// with its args.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn ancestry(&self) -> &dyn Ancestry {
        &*self.ancestry
    }

    pub fn call_depth(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    // Output ----------------------------------------------------------

    pub fn puts<S: Into<String>>(&mut self, line: S) {
        let line = line.into();
        log::debug!("PUTS: {line}");
        self.output.push(line);
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    // Instances -------------------------------------------------------

    /// Allocate an instance of `class` and run `initialize` on it if the
    /// class (or an ancestor) defines one. `initialize` is run whatever
    /// its visibility.
    pub fn instantiate(&mut self, class: &ClassRef, args: Args) -> RuntimeResult {
        let obj = new::instance(class);
        match self.ancestry.resolve(class, "initialize") {
            Some((owner, entry)) => {
                self.invoke(owner, &entry, obj.clone(), args)?;
            }
            None if !args.is_empty() => {
                return Err(RuntimeErr::arg_err(format!(
                    "{}.new expected 0 args; got {}",
                    class.name(),
                    args.len()
                )));
            }
            None => (),
        }
        Ok(obj)
    }

    // Invocation ------------------------------------------------------

    /// Run `entry`'s behavior on `this` with a new frame. Visibility has
    /// already been checked (or deliberately skipped) by the caller.
    pub(super) fn invoke(
        &mut self,
        owner: ClassRef,
        entry: &MethodEntry,
        this: Value,
        args: Args,
    ) -> RuntimeResult {
        if self.max_call_depth > 0 && self.frames.len() >= self.max_call_depth {
            return Err(RuntimeErr::recursion_depth_exceeded(self.max_call_depth));
        }
        if self.debug {
            log::debug!(
                "INVOKE: {}#{} ({}) on {:?} with {:?} depth={}",
                owner.name(),
                entry.name(),
                entry.behavior().name(),
                this,
                args,
                self.frames.len()
            );
        } else {
            log::trace!(
                "INVOKE: {}#{} ({}) depth={}",
                owner.name(),
                entry.name(),
                entry.behavior().name(),
                self.frames.len()
            );
        }
        self.frames.push(Frame::new(owner, this.clone(), entry.name()));
        let result = entry.behavior().call(self, this, args);
        self.frames.pop();
        result
    }
}
