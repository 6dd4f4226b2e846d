use crate::types::new;
use crate::util::{check_args, expect_int, int_arg};
use crate::vm::RuntimeErrKind;

#[test]
fn test_check_args_exact() {
    let args = vec![new::int(1)];
    assert!(matches!(check_args("f", &args, 1, Some(1)), Ok(1)));
    let result = check_args("f", &vec![], 1, Some(1));
    match result {
        Err(err) => assert_eq!(err.kind, RuntimeErrKind::ArgErr("f expected 1 arg; got 0".to_owned())),
        Ok(_) => panic!("Expected ArgErr"),
    }
}

#[test]
fn test_check_args_range() {
    let args = vec![new::int(1), new::int(2), new::int(3)];
    assert!(check_args("f", &args, 1, Some(3)).is_ok());
    assert!(check_args("f", &args, 0, None).is_ok());
    assert!(check_args("f", &args, 1, Some(2)).is_err());
    assert!(check_args("f", &args, 4, None).is_err());
}

#[test]
fn test_int_arg() {
    let args = vec![new::int(7), new::str("seven")];
    assert_eq!(int_arg("f", &args, 0).map(|val| val.clone()), Ok(7.into()));
    assert!(matches!(
        int_arg("f", &args, 1),
        Err(err) if matches!(err.kind, RuntimeErrKind::TypeErr(_))
    ));
    assert!(matches!(
        int_arg("f", &args, 2),
        Err(err) if matches!(err.kind, RuntimeErrKind::ArgErr(_))
    ));
}

#[test]
fn test_expect_int() {
    assert_eq!(expect_int("f", &new::int(3)), Ok(3.into()));
    assert!(expect_int("f", &new::nil()).is_err());
}
