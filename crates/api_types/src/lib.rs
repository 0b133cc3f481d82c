use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub username: String,
        pub email: String,
        pub password: String,
    }

    /// Partial update: absent fields are left untouched.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserUpdate {
        pub username: Option<String>,
        pub email: Option<String>,
        pub password: Option<String>,
    }

    impl UserUpdate {
        pub fn is_empty(&self) -> bool {
            self.username.is_none() && self.email.is_none() && self.password.is_none()
        }
    }

    /// A user as returned by the API. The password never leaves the server.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: i32,
        pub username: String,
        pub email: String,
    }
}

pub mod character {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CharacterNew {
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
        /// Reference to the films the character appears in.
        pub films: String,
        /// RFC3339 timestamp, including timezone offset.
        pub created: DateTime<FixedOffset>,
        /// RFC3339 timestamp, including timezone offset.
        pub edited: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CharacterView {
        pub id: i32,
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
}

pub mod planet {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PlanetNew {
        pub name: String,
        pub climate: Option<String>,
        pub terrain: Option<String>,
        pub population: Option<String>,
        pub diameter: Option<String>,
        pub gravity: Option<String>,
        pub rotation_period: Option<String>,
        pub orbital_period: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PlanetView {
        pub id: i32,
        pub name: String,
        pub climate: Option<String>,
        pub terrain: Option<String>,
        pub population: Option<String>,
        pub diameter: Option<String>,
        pub gravity: Option<String>,
        pub rotation_period: Option<String>,
        pub orbital_period: Option<String>,
    }
}

pub mod vehicle {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VehicleNew {
        pub name: String,
        pub model: Option<String>,
        pub manufacturer: Option<String>,
        pub vehicle_class: Option<String>,
        pub cost_in_credits: Option<String>,
        pub crew: Option<String>,
        pub passengers: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VehicleView {
        pub id: i32,
        pub name: String,
        pub model: Option<String>,
        pub manufacturer: Option<String>,
        pub vehicle_class: Option<String>,
        pub cost_in_credits: Option<String>,
        pub crew: Option<String>,
        pub passengers: Option<String>,
    }
}

pub mod favorite {
    use super::*;

    /// Which table a favorite points into.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FavoriteKind {
        Character,
        Planet,
        Vehicle,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct FavoriteNew {
        pub user_id: i32,
        pub kind: FavoriteKind,
        pub item_id: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct FavoriteView {
        pub id: i32,
        pub user_id: i32,
        pub kind: FavoriteKind,
        pub item_id: i32,
    }
}
