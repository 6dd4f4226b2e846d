//! Process-wide settings. `main` writes the command line (and env)
//! values here once at startup; every VM created with `VM::default`
//! picks them up.
use std::fmt;
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::vm::{CallDepth, RuntimeErr, DEFAULT_MAX_CALL_DEPTH};

pub static CONFIG: Lazy<Arc<RwLock<Config>>> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Setting {
    Bool(bool),
    Usize(usize),
}

impl Setting {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Usize(_) => "usize",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(val) => write!(f, "{val}"),
            Self::Usize(val) => write!(f, "{val}"),
        }
    }
}

/// Known settings and their defaults. A setting's type is fixed by its
/// default.
///
/// - `max_call_depth`: frames a VM allows before failing a call with
///   `RecursionDepthExceeded` (0 means no limit)
/// - `debug`: VMs log every invocation at debug level instead of trace
const DEFAULTS: [(&str, Setting); 2] = [
    ("max_call_depth", Setting::Usize(DEFAULT_MAX_CALL_DEPTH)),
    ("debug", Setting::Bool(false)),
];

type SetResult = Result<(), RuntimeErr>;

pub struct Config {
    settings: IndexMap<&'static str, Setting>,
}

impl Default for Config {
    fn default() -> Self {
        Self { settings: DEFAULTS.into_iter().collect() }
    }
}

impl Config {
    fn get(&self, name: &str) -> Result<Setting, RuntimeErr> {
        self.settings.get(name).copied().ok_or_else(|| RuntimeErr::config_name_not_known(name))
    }

    /// Replace a setting. The new value must have the same type as the
    /// current one.
    fn set(&mut self, name: &str, val: Setting) -> SetResult {
        let current = match self.settings.get_mut(name) {
            Some(current) => current,
            None => return Err(RuntimeErr::config_name_not_known(name)),
        };
        if current.type_name() != val.type_name() {
            return Err(RuntimeErr::config_value_is_not_valid(
                name.to_owned(),
                format!("expected {}; got {}", current.type_name(), val.type_name()),
            ));
        }
        log::trace!("CONFIG: {name} = {val}");
        *current = val;
        Ok(())
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, RuntimeErr> {
        match self.get(name)? {
            Setting::Bool(val) => Ok(val),
            other => Err(RuntimeErr::config_value_is_not_valid(
                name.to_owned(),
                format!("expected bool; got {}", other.type_name()),
            )),
        }
    }

    pub fn get_usize(&self, name: &str) -> Result<usize, RuntimeErr> {
        match self.get(name)? {
            Setting::Usize(val) => Ok(val),
            other => Err(RuntimeErr::config_value_is_not_valid(
                name.to_owned(),
                format!("expected usize; got {}", other.type_name()),
            )),
        }
    }

    pub fn set_bool(&mut self, name: &str, val: bool) -> SetResult {
        self.set(name, Setting::Bool(val))
    }

    pub fn set_usize(&mut self, name: &str, val: usize) -> SetResult {
        self.set(name, Setting::Usize(val))
    }

    pub fn max_call_depth(&self) -> CallDepth {
        self.get_usize("max_call_depth").unwrap_or(DEFAULT_MAX_CALL_DEPTH)
    }

    pub fn debug(&self) -> bool {
        self.get_bool("debug").unwrap_or(false)
    }

    /// Settings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
        self.settings.iter().map(|(name, val)| (*name, val))
    }
}
