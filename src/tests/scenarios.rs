use crate::scenarios::{self, define_calculator, SCENARIOS};
use crate::types::new;
use crate::vm::VM;

fn run(name: &str) -> Vec<String> {
    let scenario = scenarios::find(name).unwrap();
    let mut vm = VM::new(0);
    (scenario.run)(&mut vm).unwrap();
    vm.take_output()
}

#[test]
fn test_all_scenarios_succeed() {
    for scenario in SCENARIOS {
        let mut vm = VM::new(0);
        assert!((scenario.run)(&mut vm).is_ok(), "{} failed", scenario.name);
        assert!(!vm.output().is_empty());
    }
    assert!(scenarios::find("nope").is_none());
}

#[test]
fn test_visibility_scenario() {
    assert_eq!(
        run("visibility"),
        vec![
            "=== Visibility Modifiers Demo ===",
            "Deposited 50, new balance: 150",
            "[INTERNAL LOG] withdrawal: 30",
            "Withdrew 30, new balance: 120",
            "account.richer_than(poorer) = true",
            "account.validate_transaction(5) -> private method `validate_transaction' called \
             for an instance of BankAccount",
            "account.get_balance_internal -> protected method `get_balance_internal' called \
             for an instance of BankAccount",
        ]
    );
}

#[test]
fn test_alias_scenario() {
    assert_eq!(
        run("alias"),
        vec![
            "=== Alias Demo ===",
            "add(2, 3) = 5",
            "plus(2, 3) = 5",
            "sum(2, 3) = 5",
            "multiply(4, 5) = 20",
            "times(4, 5) = 20",
        ]
    );
}

#[test]
fn test_calculator_aliases_share_behavior() {
    let class = define_calculator().unwrap();
    let table = class.methods();
    let add = table.lookup("add").unwrap().behavior();
    assert!(table.lookup("plus").unwrap().behavior().is(add));
    assert!(table.lookup("sum").unwrap().behavior().is(add));
    assert!(!table.lookup("times").unwrap().behavior().is(add));
}

#[test]
fn test_retroactive_scenario() {
    assert_eq!(
        run("retroactive"),
        vec![
            "=== Changing Visibility After Definition ===",
            "bar is also public",
            "foo is public by default",
            "ex.foo -> private method `foo' called for an instance of Example",
        ]
    );
}

#[test]
fn test_protected_scenario() {
    assert_eq!(
        run("protected"),
        vec![
            "=== Protected Methods Across Subclasses ===",
            "savings.richer_than(checking) = true",
            "auditor.peek(checking) -> protected method `balance' called for an instance of \
             Checking",
            "checking.balance -> protected method `balance' called for an instance of Checking",
        ]
    );
}

#[test]
fn test_bank_account_rejects_bad_initialize_args() {
    let class = scenarios::define_bank_account().unwrap();
    let mut vm = VM::new(0);
    assert!(vm.instantiate(&class, vec![]).is_err());
    assert!(vm.instantiate(&class, vec![new::str("lots")]).is_err());
}
