//! Testing utilities and harness for Paddock

pub mod assertions;
pub mod fixtures;
pub mod robot;
pub mod store;

pub use assertions::{assert_approx_eq, assert_at_rest, assert_order};
pub use robot::{ScreenRobot, ROW_HEIGHT};
pub use store::{InMemoryStore, StoreCall};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::fixtures;
    pub use crate::robot::*;
    pub use crate::store::{InMemoryStore, StoreCall};
}
