//! In-memory registry of plants, users, profiles and care tasks.
//!
//! [`PlantCareRegistry`] is a plain value owned by the caller: plants are
//! looked up by name, recommended by light requirement, and care tasks are
//! drained earliest due date first.

pub mod error;
pub mod models;
pub mod registry;
pub mod seed;

pub use error::{RegistryError, RegistryResult};
pub use models::{Plant, Task, User, UserProfile};
pub use registry::{DrainTasks, PlantCareRegistry};
