//! The module contains the `Planet` record and its table.

use sea_orm::entity::prelude::*;

/// A planet. Only the name is mandatory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Planet {
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

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Planet {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            climate: value.climate,
            terrain: value.terrain,
            population: value.population,
            diameter: value.diameter,
            gravity: value.gravity,
            rotation_period: value.rotation_period,
            orbital_period: value.orbital_period,
        }
    }
}
