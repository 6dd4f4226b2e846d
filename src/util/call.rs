use num_bigint::BigInt;

use crate::types::{Args, Value};
use crate::vm::RuntimeErr;

/// Check the number of args passed to a behavior.
///
/// # Args
///
/// - method name (used in the error message)
/// - the args that were passed
/// - minimum number of args
/// - maximum number of args (`None` indicates no max)
///
/// # Returns
///
/// The number of args on success or an `ArgErr`.
pub fn check_args(
    name: &str,
    args: &Args,
    min: usize,
    max: Option<usize>,
) -> Result<usize, RuntimeErr> {
    let n_args = args.len();

    // NOTE: Nobody defines a method with billions of args, and this
    //       keeps the checks below simple.
    let max = max.unwrap_or(usize::MAX);

    if n_args < min || n_args > max {
        let msg = if min == max {
            let ess = if min == 1 { "" } else { "s" };
            format!("{name} expected {min} arg{ess}; got {n_args}")
        } else if max == usize::MAX {
            format!("{name} expected at least {min} args; got {n_args}")
        } else {
            format!("{name} expected {min} to {max} args; got {n_args}")
        };
        return Err(RuntimeErr::arg_err(msg));
    }

    Ok(n_args)
}

/// Get the int arg at `index`.
pub fn int_arg<'a>(name: &str, args: &'a Args, index: usize) -> Result<&'a BigInt, RuntimeErr> {
    match args.get(index) {
        Some(Value::Int(val)) => Ok(val),
        Some(other) => Err(RuntimeErr::type_err(format!(
            "{name} expected arg {index} to be an Integer; got {}",
            other.class_name()
        ))),
        None => Err(RuntimeErr::arg_err(format!("{name} missing arg {index}"))),
    }
}

/// Get the int value of a method's result.
pub fn expect_int(name: &str, value: &Value) -> Result<BigInt, RuntimeErr> {
    match value {
        Value::Int(val) => Ok(val.clone()),
        other => Err(RuntimeErr::type_err(format!(
            "{name} expected an Integer; got {}",
            other.class_name()
        ))),
    }
}
