//! Class body evaluation.
//!
//! A `ClassBody` is what an evaluator drives while it walks the
//! statements of `class Foo ... end`: method definitions, visibility
//! declarations, and aliases, applied in order. The body owns the
//! visibility cursor for its duration, so a bare `private` in one body
//! can never leak into another.
use crate::methods::{self, Behavior, Visibility, VisibilityCursor};
use crate::types::{Args, ClassRef, Value};
use crate::util::check_args;

use super::result::{RuntimeErr, RuntimeResult};
use super::vm::VM;

pub struct ClassBody {
    class: ClassRef,
    cursor: VisibilityCursor,
}

impl ClassBody {
    /// Begin evaluating a body for `class`. Opening an existing class
    /// again starts over with a public default.
    pub fn open(class: &ClassRef) -> Self {
        log::trace!("BEGIN: class body {}", class.name());
        Self { class: class.clone(), cursor: VisibilityCursor::new() }
    }

    /// End this body and begin one for `class`, reusing the cursor. The
    /// default goes back to public. Returns the class that was being
    /// defined.
    pub fn reopen(&mut self, class: &ClassRef) -> ClassRef {
        log::trace!("END: class body {}", self.class.name());
        log::trace!("BEGIN: class body {}", class.name());
        self.cursor.reset();
        std::mem::replace(&mut self.class, class.clone())
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// The visibility the next definition will get.
    pub fn default_visibility(&self) -> Visibility {
        self.cursor.current()
    }

    /// End the body. The cursor goes away with it.
    pub fn finish(self) -> ClassRef {
        log::trace!("END: class body {}", self.class.name());
        self.class
    }

    // Definitions -----------------------------------------------------

    /// `def name ... end`
    pub fn def<F>(&mut self, name: &str, func: F) -> &mut Self
    where
        F: Fn(&mut VM, Value, Args) -> RuntimeResult + 'static,
    {
        self.define_method(name, Behavior::new(name, func))
    }

    /// Bind an existing behavior to `name` under the current default
    /// visibility.
    pub fn define_method(&mut self, name: &str, behavior: Behavior) -> &mut Self {
        let visibility = self.cursor.current();
        self.class.methods_mut().define(name, behavior, visibility);
        self
    }

    /// `alias new_name existing_name`
    pub fn alias(&mut self, new_name: &str, existing_name: &str) -> Result<&mut Self, RuntimeErr> {
        methods::alias(&mut self.class.methods_mut(), new_name, existing_name)?;
        Ok(self)
    }

    /// Define `name` readers for instance variables.
    pub fn attr_reader(&mut self, names: &[&str]) -> &mut Self {
        for name in names {
            let ivar = name.to_string();
            let method_name = ivar.clone();
            self.def(name, move |_, this, args| {
                check_args(method_name.as_str(), &args, 0, Some(0))?;
                match this.as_obj() {
                    Some(obj) => Ok(obj.get_ivar(ivar.as_str())),
                    None => Err(RuntimeErr::type_err(format!(
                        "{method_name} called on non-object {}",
                        this.class_name()
                    ))),
                }
            });
        }
        self
    }

    /// Define `name=` writers for instance variables.
    pub fn attr_writer(&mut self, names: &[&str]) -> &mut Self {
        for name in names {
            let ivar = name.to_string();
            let method_name = format!("{name}=");
            let writer_name = method_name.clone();
            self.def(writer_name.as_str(), move |_, this, args| {
                check_args(method_name.as_str(), &args, 1, Some(1))?;
                match this.as_obj() {
                    Some(obj) => {
                        let value = args[0].clone();
                        obj.set_ivar(ivar.as_str(), value.clone());
                        Ok(value)
                    }
                    None => Err(RuntimeErr::type_err(format!(
                        "{method_name} called on non-object {}",
                        this.class_name()
                    ))),
                }
            });
        }
        self
    }

    pub fn attr_accessor(&mut self, names: &[&str]) -> &mut Self {
        self.attr_reader(names);
        self.attr_writer(names)
    }

    // Visibility ------------------------------------------------------

    /// Bare `public`: methods defined from here on are public.
    pub fn public(&mut self) -> &mut Self {
        self.cursor.set_default(Visibility::Public);
        self
    }

    /// Bare `protected`.
    pub fn protected(&mut self) -> &mut Self {
        self.cursor.set_default(Visibility::Protected);
        self
    }

    /// Bare `private`.
    pub fn private(&mut self) -> &mut Self {
        self.cursor.set_default(Visibility::Private);
        self
    }

    /// `public :a, :b`: change the named entries only. The default for
    /// later definitions is left alone.
    pub fn public_names(&mut self, names: &[&str]) -> Result<&mut Self, RuntimeErr> {
        self.set_visibility(names, Visibility::Public)
    }

    pub fn protected_names(&mut self, names: &[&str]) -> Result<&mut Self, RuntimeErr> {
        self.set_visibility(names, Visibility::Protected)
    }

    pub fn private_names(&mut self, names: &[&str]) -> Result<&mut Self, RuntimeErr> {
        self.set_visibility(names, Visibility::Private)
    }

    fn set_visibility(
        &mut self,
        names: &[&str],
        visibility: Visibility,
    ) -> Result<&mut Self, RuntimeErr> {
        self.class.methods_mut().set_visibilities(names, visibility)?;
        Ok(self)
    }
}
