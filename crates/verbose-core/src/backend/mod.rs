//! Output backends
//!
//! A backend renders a logger's name and the caller's arguments to a sink.
//! Every `Verbose` instance holds one, swappable at any time:
//! - `StreamBackend`: `<colored-name> <message>` on stderr, stdout or any writer
//! - `LogBackend`: `<name>: <message>` through the `log` facade
//! - `NoopBackend`: discards everything

mod traits;
mod stream;
mod log_facade;
mod noop;

pub use traits::{Backend, BackendHandle, SharedBackend};
pub use stream::StreamBackend;
pub use log_facade::{LogBackend, LOG_TARGET};
pub use noop::NoopBackend;

use std::fmt::{Display, Write};

/// Concatenate operands, `separator` between each pair
pub(crate) fn join_operands(args: &[&dyn Display], separator: &str) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // writing to a String cannot fail
        let _ = write!(out, "{}", arg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_operands() {
        assert_eq!(join_operands(&[&"a", &1, &'c'], " "), "a 1 c");
        assert_eq!(join_operands(&[&"a", &"b"], ""), "ab");
        assert_eq!(join_operands(&[], " "), "");
    }
}
