//! Commonly used types for registering fixture services.
//!
//! ```
//! use fixturekit_seeding::prelude::*;
//! ```

pub use crate::classes::{COMMAND_TAG, SET_ORM};
pub use crate::error::{SeedingError, SeedingResult};
pub use crate::extension::{FixtureRegistrations, FixturesExtension};
pub use crate::names::FixtureService;
pub use fixturekit_conf::{ExecutionContext, FixturesSettings};
