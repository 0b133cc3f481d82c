//! The module contains the `Character` record and its table.

use sea_orm::entity::prelude::*;

/// A person of the galaxy.
///
/// Height and mass are kept as text: the dataset uses values like
/// `"unknown"` or `"1,358"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
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
    pub created: DateTimeWithTimeZone,
    pub edited: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub created: DateTimeWithTimeZone,
    pub edited: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Character {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            url: value.url,
            species: value.species,
            gender: value.gender,
            birth_year: value.birth_year,
            height: value.height,
            mass: value.mass,
            hair_color: value.hair_color,
            eye_color: value.eye_color,
            skin_color: value.skin_color,
            films: value.films,
            created: value.created,
            edited: value.edited,
        }
    }
}
