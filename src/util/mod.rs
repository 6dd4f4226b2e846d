pub use call::{check_args, expect_int, int_arg};

mod call;
