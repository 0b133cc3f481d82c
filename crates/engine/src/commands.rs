//! Command structs for engine operations.
//!
//! These types group the fields of write operations so call sites stay
//! readable and the engine can validate them in one place.

use chrono::{DateTime, FixedOffset};

use crate::FavoriteKind;

/// Register a new user.
#[derive(Clone, Debug)]
pub struct UserCmd {
    pub username: String,
    pub email: String,
    /// Plaintext password, hashed before it is stored.
    pub password: String,
}

/// Partially update a user. `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct UserUpdateCmd {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserUpdateCmd {
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Create a character.
#[derive(Clone, Debug)]
pub struct CharacterCmd {
    pub name: String,
    pub url: String,
    pub species: String,
    pub gender: String,
    pub birth_year: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub eye_color: String,
    pub skin_color: String,
    pub films: String,
    pub created: DateTime<FixedOffset>,
    pub edited: DateTime<FixedOffset>,
}

/// Create a planet.
#[derive(Clone, Debug, Default)]
pub struct PlanetCmd {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub gravity: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
}

impl PlanetCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Create a vehicle.
#[derive(Clone, Debug, Default)]
pub struct VehicleCmd {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
}

impl VehicleCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Mark a record as a user's favorite.
#[derive(Clone, Copy, Debug)]
pub struct FavoriteCmd {
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub item_id: i32,
}
