//! Data access for the Holonet records.
//!
//! Every table has its own module holding the sea-orm entity and the plain
//! record handed out to callers. All reads and writes go through [`Engine`].

pub use characters::Character;
pub use commands::{CharacterCmd, FavoriteCmd, PlanetCmd, UserCmd, UserUpdateCmd, VehicleCmd};
pub use error::EngineError;
pub use favorites::{Favorite, FavoriteKind};
pub use ops::{Engine, EngineBuilder};
pub use planets::Planet;
pub use users::User;
pub use vehicles::Vehicle;

mod characters;
mod commands;
mod error;
mod favorites;
mod ops;
mod planets;
mod users;
mod util;
mod vehicles;

type ResultEngine<T> = Result<T, EngineError>;
