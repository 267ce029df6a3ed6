//! Small helpers shared by the workspace's test suites.

mod result;

pub mod prelude {
    pub use crate::{assert_err, assert_err_contains, assert_ok};
}
