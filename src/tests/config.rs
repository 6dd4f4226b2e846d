use crate::config::{Config, Setting};
use crate::vm::{RuntimeErrKind, DEFAULT_MAX_CALL_DEPTH};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.max_call_depth(), DEFAULT_MAX_CALL_DEPTH);
    assert!(!config.debug());
    let settings: Vec<(&str, &Setting)> = config.iter().collect();
    assert_eq!(
        settings,
        vec![
            ("max_call_depth", &Setting::Usize(DEFAULT_MAX_CALL_DEPTH)),
            ("debug", &Setting::Bool(false)),
        ]
    );
}

#[test]
fn test_set() {
    let mut config = Config::default();
    assert!(config.set_usize("max_call_depth", 0).is_ok());
    assert!(config.set_bool("debug", true).is_ok());
    assert_eq!(config.get_usize("max_call_depth"), Ok(0));
    assert_eq!(config.max_call_depth(), 0);
    assert!(config.debug());
}

#[test]
fn test_unknown_name() {
    let mut config = Config::default();
    let err = config.set_bool("verbose", true).unwrap_err();
    assert_eq!(err.kind, RuntimeErrKind::ConfigNameNotKnown("verbose".to_owned()));
    assert!(config.get_bool("verbose").is_err());
}

#[test]
fn test_wrong_type() {
    let mut config = Config::default();
    let err = config.get_bool("max_call_depth").unwrap_err();
    assert!(matches!(err.kind, RuntimeErrKind::ConfigValueIsNotValid(..)));
    assert!(config.get_usize("debug").is_err());

    // A setting keeps the type of its default.
    let err = config.set_bool("max_call_depth", true).unwrap_err();
    assert!(matches!(err.kind, RuntimeErrKind::ConfigValueIsNotValid(..)));
    assert_eq!(config.max_call_depth(), DEFAULT_MAX_CALL_DEPTH);
}
