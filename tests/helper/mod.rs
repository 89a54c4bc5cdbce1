pub mod registry;

pub use registry::{FakePrimaryRegistry, FakeSecondaryRegistry, create_test_updater};
