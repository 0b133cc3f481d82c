//! The module contains the `Vehicle` record and its table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "model")]
    pub vehicle_model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
    pub cost_in_credits: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Vehicle {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            model: value.vehicle_model,
            manufacturer: value.manufacturer,
            vehicle_class: value.vehicle_class,
            cost_in_credits: value.cost_in_credits,
            crew: value.crew,
            passengers: value.passengers,
        }
    }
}
