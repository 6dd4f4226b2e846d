//! Method dispatch.
//!
//! A call is resolved first and checked second: the receiver's class
//! and then its ancestors are searched for the first table holding
//! *any* entry for the name, and only that entry's visibility is
//! checked against the call context. A private or protected entry
//! never lets the search fall through to an ancestor's public entry.
use crate::methods::{MethodEntry, Visibility};
use crate::types::{new, Ancestry, Args, Class, ClassRef, Value};

use super::context::{CallContext, CallSite};
use super::result::{RuntimeBoolResult, RuntimeErr, RuntimeResult};
use super::vm::VM;

impl VM {
    /// Call `name` on `receiver` from wherever the VM currently is: from
    /// inside the method body on top of the frame stack, or externally
    /// if no method is executing.
    pub fn call(
        &mut self,
        receiver: Value,
        name: &str,
        args: Args,
        site: CallSite,
    ) -> RuntimeResult {
        let class = receiver_class(&receiver, name)?;
        let (owner, entry) = match self.ancestry.resolve(&class, name) {
            Some(found) => found,
            None => return self.method_missing(receiver, &class, name, args),
        };
        {
            let context = CallContext::new(self.frames.last(), site);
            check_visibility(&*self.ancestry, &receiver, &owner, &entry, &context)?;
        }
        self.invoke(owner, &entry, receiver, args)
    }

    /// `foo(args)` from inside a method body running on `this`.
    pub fn call_self(&mut self, this: &Value, name: &str, args: Args) -> RuntimeResult {
        self.call(this.clone(), name, args, CallSite::Implicit)
    }

    /// `receiver.foo(args)`.
    pub fn call_method(&mut self, receiver: &Value, name: &str, args: Args) -> RuntimeResult {
        self.call(receiver.clone(), name, args, CallSite::Explicit)
    }

    /// Like [`VM::call`] but without any visibility check.
    pub fn send(&mut self, receiver: Value, name: &str, args: Args) -> RuntimeResult {
        let class = receiver_class(&receiver, name)?;
        match self.ancestry.resolve(&class, name) {
            Some((owner, entry)) => self.invoke(owner, &entry, receiver, args),
            None => self.method_missing(receiver, &class, name, args),
        }
    }

    /// Only public methods can be called this way, wherever the call
    /// comes from.
    pub fn public_send(&mut self, receiver: Value, name: &str, args: Args) -> RuntimeResult {
        let class = receiver_class(&receiver, name)?;
        match self.ancestry.resolve(&class, name) {
            Some((owner, entry)) => {
                let context = CallContext::external(CallSite::Explicit);
                check_visibility(&*self.ancestry, &receiver, &owner, &entry, &context)?;
                self.invoke(owner, &entry, receiver, args)
            }
            None => self.method_missing(receiver, &class, name, args),
        }
    }

    /// Does `receiver` answer `name`? Only public methods count unless
    /// `include_all` is set. A name that doesn't resolve is handed to
    /// `respond_to_missing?` (with the name and `include_all`) if the
    /// receiver's class chain defines it; `method_missing` isn't
    /// consulted.
    pub fn respond_to(
        &mut self,
        receiver: &Value,
        name: &str,
        include_all: bool,
    ) -> RuntimeBoolResult {
        let class = match receiver.class() {
            Some(class) => class,
            None => return Ok(false),
        };
        if let Some((_, entry)) = self.ancestry.resolve(&class, name) {
            return Ok(include_all || entry.is_public());
        }
        match self.ancestry.resolve(&class, "respond_to_missing?") {
            Some((owner, entry)) => {
                let args = vec![new::sym(name), new::bool(include_all)];
                let answer = self.invoke(owner, &entry, receiver.clone(), args)?;
                Ok(answer.is_truthy())
            }
            None => Ok(false),
        }
    }

    /// Hand an unresolvable call to `method_missing` if the receiver's
    /// class chain defines it, with the missing name prepended to the
    /// args.
    fn method_missing(
        &mut self,
        receiver: Value,
        class: &ClassRef,
        name: &str,
        args: Args,
    ) -> RuntimeResult {
        match self.ancestry.resolve(class, "method_missing") {
            Some((owner, entry)) => {
                log::debug!("METHOD MISSING: {}#{name}", class.name());
                let mut missing_args = Vec::with_capacity(args.len() + 1);
                missing_args.push(new::sym(name));
                missing_args.extend(args);
                self.invoke(owner, &entry, receiver, missing_args)
            }
            None => Err(RuntimeErr::no_method(class.name(), name)),
        }
    }
}

fn receiver_class(receiver: &Value, name: &str) -> Result<ClassRef, RuntimeErr> {
    match receiver.class() {
        Some(class) => Ok(class),
        None => Err(RuntimeErr::no_method(receiver.class_name().as_str(), name)),
    }
}

/// Check that `entry`, supplied by `owner`, may be called on `receiver`
/// in `context`.
///
/// - Public: always.
/// - Private: only without an explicit receiver (or with literal
///   `self`), from a method body whose owner is exactly `owner` or that
///   is running on `receiver` itself.
/// - Protected: from a method body whose owner is `owner` or a subclass
///   of it, whatever the receiver expression.
pub fn check_visibility(
    ancestry: &dyn Ancestry,
    receiver: &Value,
    owner: &Class,
    entry: &MethodEntry,
    context: &CallContext,
) -> Result<(), RuntimeErr> {
    let class_name = receiver.class_name();
    let err = match entry.visibility() {
        Visibility::Public => return Ok(()),
        Visibility::Private => {
            let allowed = match context.caller() {
                Some(frame) if !context.site().has_explicit_receiver() => {
                    frame.owner().is(owner) || frame.this().is(receiver)
                }
                _ => false,
            };
            if allowed {
                return Ok(());
            }
            RuntimeErr::private_method(class_name.as_str(), entry.name())
        }
        Visibility::Protected => {
            let allowed = match context.caller() {
                Some(frame) => ancestry.is_kind_of(frame.owner(), owner),
                None => false,
            };
            if allowed {
                return Ok(());
            }
            RuntimeErr::protected_method(class_name.as_str(), entry.name())
        }
    };
    log::debug!(
        "DENIED: {} method {}#{} ({:?} call from {:?})",
        entry.visibility(),
        owner.name(),
        entry.name(),
        context.site(),
        context.caller()
    );
    Err(err)
}
