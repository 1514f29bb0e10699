//! One module per subcommand.

pub mod check;
pub mod lock;
pub mod unlock;
