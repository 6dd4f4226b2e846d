use crate::methods::{Behavior, Visibility, VisibilitySet};
use crate::types::new;
use crate::vm::{ClassBody, RuntimeErrKind, VM};

fn nil_method(body: &mut ClassBody, name: &str) {
    body.def(name, |_, _, _| Ok(new::nil()));
}

fn visibility_of(body: &ClassBody, name: &str) -> Visibility {
    body.class().methods().lookup(name).unwrap().visibility()
}

#[test]
fn test_methods_are_public_by_default() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    assert_eq!(body.default_visibility(), Visibility::Public);
    nil_method(&mut body, "bar");
    assert_eq!(visibility_of(&body, "bar"), Visibility::Public);
}

#[test]
fn test_bare_declaration_affects_only_later_definitions() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    nil_method(&mut body, "before");
    body.private();
    nil_method(&mut body, "after1");
    nil_method(&mut body, "after2");
    body.protected();
    nil_method(&mut body, "prot");
    body.public();
    nil_method(&mut body, "last");

    assert_eq!(visibility_of(&body, "before"), Visibility::Public);
    assert_eq!(visibility_of(&body, "after1"), Visibility::Private);
    assert_eq!(visibility_of(&body, "after2"), Visibility::Private);
    assert_eq!(visibility_of(&body, "prot"), Visibility::Protected);
    assert_eq!(visibility_of(&body, "last"), Visibility::Public);
}

#[test]
fn test_explicit_names_leave_default_alone() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    nil_method(&mut body, "visible");
    nil_method(&mut body, "hidden");
    assert!(body.private_names(&["hidden"]).is_ok());
    nil_method(&mut body, "test");

    assert_eq!(body.default_visibility(), Visibility::Public);
    assert_eq!(visibility_of(&body, "visible"), Visibility::Public);
    assert_eq!(visibility_of(&body, "hidden"), Visibility::Private);
    assert_eq!(visibility_of(&body, "test"), Visibility::Public);
}

#[test]
fn test_public_names_reopens_private_method() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    body.private();
    body.def("was_private", |_, _, _| Ok(new::int(3)));
    body.public_names(&["was_private"]).unwrap();
    let class = body.finish();

    let mut vm = VM::new(0);
    let obj = vm.instantiate(&class, vec![]).unwrap();
    assert_eq!(vm.call_method(&obj, "was_private", vec![]), Ok(new::int(3)));
}

#[test]
fn test_protected_names() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    nil_method(&mut body, "a");
    nil_method(&mut body, "b");
    body.protected_names(&["a", "b"]).unwrap();
    assert_eq!(visibility_of(&body, "a"), Visibility::Protected);
    assert_eq!(visibility_of(&body, "b"), Visibility::Protected);
}

#[test]
fn test_explicit_names_unknown_method() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    nil_method(&mut body, "known");
    let result = body.private_names(&["known", "unknown"]);
    assert!(matches!(
        result,
        Err(err) if err.kind == RuntimeErrKind::UnknownMethod("Foo".to_owned(), "unknown".to_owned())
    ));
    assert_eq!(visibility_of(&body, "known"), Visibility::Public);
}

#[test]
fn test_redefinition_takes_current_default() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    nil_method(&mut body, "foo");
    body.private_names(&["foo"]).unwrap();
    nil_method(&mut body, "foo");
    assert_eq!(visibility_of(&body, "foo"), Visibility::Public);

    body.protected();
    nil_method(&mut body, "foo");
    assert_eq!(visibility_of(&body, "foo"), Visibility::Protected);
}

#[test]
fn test_visibility_reset_per_class() {
    let a = new::class("A", None);
    let mut body = ClassBody::open(&a);
    body.private();
    nil_method(&mut body, "foo");
    body.finish();

    let b = new::class("B", None);
    let mut body = ClassBody::open(&b);
    nil_method(&mut body, "bar");
    let b = body.finish();

    assert_eq!(b.methods().lookup("bar").unwrap().visibility(), Visibility::Public);
    assert_eq!(a.methods().lookup("foo").unwrap().visibility(), Visibility::Private);
}

#[test]
fn test_reopen_resets_default() {
    let a = new::class("A", None);
    let b = new::class("B", None);
    let mut body = ClassBody::open(&a);
    body.protected();
    nil_method(&mut body, "guarded");

    let previous = body.reopen(&b);
    assert!(previous.is(&a));
    assert!(body.class().is(&b));
    assert_eq!(body.default_visibility(), Visibility::Public);
    nil_method(&mut body, "open");
    let b = body.finish();

    assert_eq!(a.methods().lookup("guarded").unwrap().visibility(), Visibility::Protected);
    assert_eq!(b.methods().lookup("open").unwrap().visibility(), Visibility::Public);
    assert!(!b.methods().contains("guarded"));
}

#[test]
fn test_reopened_class_starts_public() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    body.private();
    nil_method(&mut body, "first");
    body.finish();

    let mut body = ClassBody::open(&class);
    nil_method(&mut body, "second");
    assert_eq!(visibility_of(&body, "first"), Visibility::Private);
    assert_eq!(visibility_of(&body, "second"), Visibility::Public);
}

#[test]
fn test_alias_in_body_preserves_visibility() {
    let class = new::class("Test", None);
    let mut body = ClassBody::open(&class);
    body.private();
    body.def("secret", |_, _, _| Ok(new::int(42)));
    body.alias("hidden", "secret").unwrap();
    body.public();
    body.def("reveal", |vm, this, _| vm.call_self(&this, "hidden", vec![]));
    let class = body.finish();

    assert_eq!(class.methods().lookup("hidden").unwrap().visibility(), Visibility::Private);

    let mut vm = VM::new(0);
    let obj = vm.instantiate(&class, vec![]).unwrap();
    assert_eq!(vm.call_method(&obj, "reveal", vec![]), Ok(new::int(42)));
    let err = vm.call_method(&obj, "hidden", vec![]).unwrap_err();
    assert_eq!(err.kind, RuntimeErrKind::PrivateMethodErr("Test".to_owned(), "hidden".to_owned()));
}

#[test]
fn test_alias_in_body_unknown_method() {
    let class = new::class("Foo", None);
    let mut body = ClassBody::open(&class);
    assert!(body.alias("new_name", "missing").is_err());
    assert!(body.class().methods().is_empty());
}

#[test]
fn test_define_method_reuses_behavior() {
    let class = new::class("Foo", None);
    let shared = Behavior::new("shared", |_, _, _| Ok(new::int(5)));
    let mut body = ClassBody::open(&class);
    body.define_method("one", shared.clone());
    body.private();
    body.define_method("two", shared.clone());

    let table = class.methods();
    assert!(table.lookup("one").unwrap().behavior().is(&shared));
    assert!(table.lookup("two").unwrap().behavior().is(&shared));
    assert_eq!(table.lookup("two").unwrap().visibility(), Visibility::Private);
}

#[test]
fn test_attr_accessors() {
    let class = new::class("Point", None);
    let mut body = ClassBody::open(&class);
    body.attr_accessor(&["x"]);
    body.attr_reader(&["y"]);
    body.private();
    body.attr_writer(&["y"]);
    let class = body.finish();

    assert_eq!(
        class.instance_methods(VisibilitySet::PUBLIC, false),
        vec!["x", "x=", "y"]
    );
    assert_eq!(class.instance_methods(VisibilitySet::PRIVATE, false), vec!["y="]);

    let mut vm = VM::new(0);
    let point = vm.instantiate(&class, vec![]).unwrap();
    assert_eq!(vm.call_method(&point, "x", vec![]), Ok(new::nil()));
    assert_eq!(vm.call_method(&point, "x=", vec![new::int(4)]), Ok(new::int(4)));
    assert_eq!(vm.call_method(&point, "x", vec![]), Ok(new::int(4)));

    let err = vm.call_method(&point, "y=", vec![new::int(1)]).unwrap_err();
    assert!(matches!(err.kind, RuntimeErrKind::PrivateMethodErr(..)));
    assert_eq!(vm.send(point.clone(), "y=", vec![new::int(1)]), Ok(new::int(1)));
    assert_eq!(vm.call_method(&point, "y", vec![]), Ok(new::int(1)));

    let err = vm.call_method(&point, "x", vec![new::int(1)]).unwrap_err();
    assert!(matches!(err.kind, RuntimeErrKind::ArgErr(_)));
}
