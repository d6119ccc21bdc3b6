//! Configuration store infrastructure
//!
//! Layered key/value configuration:
//! - Properties file source
//! - Environment variable source
//! - In-memory map source
//! - Ordinal-based store with `${...}` expression expansion

pub mod env;
pub mod map;
pub mod properties;
pub mod store;

pub use env::{EnvSource, ENV_ORDINAL};
pub use map::{MapSource, MAP_ORDINAL};
pub use properties::{parse_properties, PropertiesSource, PROPERTIES_ORDINAL};
pub use store::{ConfigStore, ConfigStoreBuilder};
