//! Acceptance scenarios for the object model. Each one defines a few
//! classes the way an evaluator would, exercises them, and writes what
//! happened to the VM's output.
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::types::{new, Args, ClassRef, Value};
use crate::util::{check_args, expect_int, int_arg};
use crate::vm::{CallSite, ClassBody, MutationResult, RuntimeErr, RuntimeResult, VM};

pub type ScenarioFn = fn(&mut VM) -> MutationResult;

pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub run: ScenarioFn,
}

pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "visibility",
        description: "Bare private/public/protected sections in a bank account",
        run: bank_account,
    },
    Scenario {
        name: "alias",
        description: "Several names for the same calculator behaviors",
        run: calculator,
    },
    Scenario {
        name: "retroactive",
        description: "Making a method private after it was defined",
        run: retroactive,
    },
    Scenario {
        name: "protected",
        description: "Protected calls between sibling subclasses",
        run: protected_siblings,
    },
];

pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.name == name)
}

/// Write the outcome of a call that's expected to fail.
fn report(vm: &mut VM, label: &str, result: RuntimeResult) {
    let line = match result {
        Ok(value) => format!("{label} -> {value}"),
        Err(err) => format!("{label} -> {err}"),
    };
    vm.puts(line);
}

fn get_int_ivar(this: &Value, name: &str) -> Result<BigInt, RuntimeErr> {
    let obj = this
        .as_obj()
        .ok_or_else(|| RuntimeErr::type_err(format!("@{name} read on {}", this.class_name())))?;
    match obj.get_ivar(name) {
        Value::Int(val) => Ok(val),
        Value::Nil => Ok(BigInt::zero()),
        other => Err(RuntimeErr::type_err(format!(
            "@{name} expected to be an Integer; got {}",
            other.class_name()
        ))),
    }
}

fn set_ivar(this: &Value, name: &str, value: Value) -> MutationResult {
    match this.as_obj() {
        Some(obj) => {
            obj.set_ivar(name, value);
            Ok(())
        }
        None => Err(RuntimeErr::type_err(format!("@{name} written on {}", this.class_name()))),
    }
}

// Bank Account --------------------------------------------------------

pub fn define_bank_account() -> Result<ClassRef, RuntimeErr> {
    let class = new::class("BankAccount", None);
    let mut body = ClassBody::open(&class);

    body.def("initialize", |_, this, args| {
        let balance = int_arg("initialize", &args, 0)?.clone();
        set_ivar(&this, "balance", new::int(balance))?;
        Ok(new::nil())
    });

    body.def("deposit", |vm, this, args| {
        let amount = int_arg("deposit", &args, 0)?.clone();
        let balance = get_int_ivar(&this, "balance")? + &amount;
        set_ivar(&this, "balance", new::int(balance.clone()))?;
        vm.puts(format!("Deposited {amount}, new balance: {balance}"));
        Ok(new::nil())
    });

    body.private();

    body.def("validate_transaction", |_, _, args| {
        let amount = int_arg("validate_transaction", &args, 0)?;
        Ok(new::bool(amount.is_positive()))
    });

    body.def("log_transaction", |vm, _, args| {
        check_args("log_transaction", &args, 2, Some(2))?;
        vm.puts(format!("[INTERNAL LOG] {}: {}", args[0], args[1]));
        Ok(new::nil())
    });

    body.public();

    body.def("withdraw", |vm, this, args| {
        let amount = int_arg("withdraw", &args, 0)?.clone();
        let valid = vm.call_self(&this, "validate_transaction", vec![new::int(amount.clone())])?;
        if valid.is_truthy() {
            vm.call_self(
                &this,
                "log_transaction",
                vec![new::str("withdrawal"), new::int(amount.clone())],
            )?;
            let balance = get_int_ivar(&this, "balance")? - &amount;
            set_ivar(&this, "balance", new::int(balance.clone()))?;
            vm.puts(format!("Withdrew {amount}, new balance: {balance}"));
        }
        Ok(new::nil())
    });

    body.def("richer_than", |vm, this, args| {
        check_args("richer_than", &args, 1, Some(1))?;
        let diff = vm.call_self(&this, "compare_balance", args)?;
        Ok(new::bool(diff.get_int_val().map(|d| d.is_positive()).unwrap_or(false)))
    });

    body.protected();

    body.def("compare_balance", |vm, this, args| {
        check_args("compare_balance", &args, 1, Some(1))?;
        let other = vm.call_method(&args[0], "get_balance_internal", vec![])?;
        let other = expect_int("get_balance_internal", &other)?;
        Ok(new::int(get_int_ivar(&this, "balance")? - other))
    });

    body.def("get_balance_internal", |_, this, _| Ok(new::int(get_int_ivar(&this, "balance")?)));

    Ok(body.finish())
}

fn bank_account(vm: &mut VM) -> MutationResult {
    vm.puts("=== Visibility Modifiers Demo ===");
    let class = define_bank_account()?;

    let account = vm.instantiate(&class, vec![new::int(100)])?;
    vm.call_method(&account, "deposit", vec![new::int(50)])?;
    vm.call_method(&account, "withdraw", vec![new::int(30)])?;

    let poorer = vm.instantiate(&class, vec![new::int(10)])?;
    let richer = vm.call_method(&account, "richer_than", vec![poorer])?;
    vm.puts(format!("account.richer_than(poorer) = {richer}"));

    let result = vm.call_method(&account, "validate_transaction", vec![new::int(5)]);
    report(vm, "account.validate_transaction(5)", result);
    let result = vm.call_method(&account, "get_balance_internal", vec![]);
    report(vm, "account.get_balance_internal", result);

    Ok(())
}

// Calculator ----------------------------------------------------------

fn binary_op(name: &str, args: &Args, op: fn(&BigInt, &BigInt) -> BigInt) -> RuntimeResult {
    check_args(name, args, 2, Some(2))?;
    let a = int_arg(name, args, 0)?;
    let b = int_arg(name, args, 1)?;
    Ok(new::int(op(a, b)))
}

pub fn define_calculator() -> Result<ClassRef, RuntimeErr> {
    let class = new::class("Calculator", None);
    let mut body = ClassBody::open(&class);
    body.def("add", |_, _, args| binary_op("add", &args, |a, b| a + b));
    body.def("multiply", |_, _, args| binary_op("multiply", &args, |a, b| a * b));
    body.alias("plus", "add")?;
    body.alias("times", "multiply")?;
    body.alias("sum", "add")?;
    Ok(body.finish())
}

fn calculator(vm: &mut VM) -> MutationResult {
    vm.puts("=== Alias Demo ===");
    let class = define_calculator()?;
    let calc = vm.instantiate(&class, vec![])?;
    for (name, a, b) in
        [("add", 2, 3), ("plus", 2, 3), ("sum", 2, 3), ("multiply", 4, 5), ("times", 4, 5)]
    {
        let result = vm.call_method(&calc, name, vec![new::int(a), new::int(b)])?;
        vm.puts(format!("{name}({a}, {b}) = {result}"));
    }
    Ok(())
}

// Changing Visibility After Definition --------------------------------

pub fn define_example() -> Result<ClassRef, RuntimeErr> {
    let class = new::class("Example", None);
    let mut body = ClassBody::open(&class);
    body.def("foo", |_, _, _| Ok(new::str("foo is public by default")));
    body.def("bar", |_, _, _| Ok(new::str("bar is also public")));
    body.private_names(&["foo"])?;
    body.def("test", |vm, this, _| vm.call_self(&this, "foo", vec![]));
    Ok(body.finish())
}

fn retroactive(vm: &mut VM) -> MutationResult {
    vm.puts("=== Changing Visibility After Definition ===");
    let class = define_example()?;
    let ex = vm.instantiate(&class, vec![])?;
    let bar = vm.call_method(&ex, "bar", vec![])?;
    vm.puts(bar.to_string());
    let test = vm.call_method(&ex, "test", vec![])?;
    vm.puts(test.to_string());
    let result = vm.call_method(&ex, "foo", vec![]);
    report(vm, "ex.foo", result);
    Ok(())
}

// Protected Siblings --------------------------------------------------

/// `Account` with a protected `balance`, two sibling subclasses, and an
/// unrelated `Auditor` that tries to peek.
pub fn define_accounts() -> Result<(ClassRef, ClassRef, ClassRef, ClassRef), RuntimeErr> {
    let account = new::class("Account", None);
    let savings = new::class("Savings", Some(&account));
    let checking = new::class("Checking", Some(&account));

    let mut body = ClassBody::open(&account);
    body.attr_writer(&["amount"]);
    body.protected();
    body.def("balance", |_, this, _| Ok(new::int(get_int_ivar(&this, "amount")?)));

    // `richer_than` must come out public.
    body.reopen(&savings);
    body.def("richer_than", |vm, this, args| {
        check_args("richer_than", &args, 1, Some(1))?;
        let theirs = vm.call_method(&args[0], "balance", vec![])?;
        let mine = vm.call(this, "balance", vec![], CallSite::SelfRef)?;
        let mine = expect_int("balance", &mine)?;
        let theirs = expect_int("balance", &theirs)?;
        Ok(new::bool(mine > theirs))
    });

    body.reopen(&checking);
    body.finish();

    let auditor = new::class("Auditor", None);
    let mut body = ClassBody::open(&auditor);
    body.def("peek", |vm, _, args| {
        check_args("peek", &args, 1, Some(1))?;
        vm.call_method(&args[0], "balance", vec![])
    });
    let auditor = body.finish();

    Ok((account, savings, checking, auditor))
}

fn protected_siblings(vm: &mut VM) -> MutationResult {
    vm.puts("=== Protected Methods Across Subclasses ===");
    let (_, savings, checking, auditor) = define_accounts()?;

    let s = vm.instantiate(&savings, vec![])?;
    vm.call_method(&s, "amount=", vec![new::int(500)])?;
    let c = vm.instantiate(&checking, vec![])?;
    vm.call_method(&c, "amount=", vec![new::int(200)])?;

    let richer = vm.call_method(&s, "richer_than", vec![c.clone()])?;
    vm.puts(format!("savings.richer_than(checking) = {richer}"));

    let auditor = vm.instantiate(&auditor, vec![])?;
    let result = vm.call_method(&auditor, "peek", vec![c.clone()]);
    report(vm, "auditor.peek(checking)", result);
    let result = vm.call_method(&c, "balance", vec![]);
    report(vm, "checking.balance", result);
    Ok(())
}
