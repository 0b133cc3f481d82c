//! The module contains the `Favorite` record and its table.
//!
//! A favorite links a user to a character, a planet or a vehicle. The
//! target table is stored as text in `kind` next to the target id.

use sea_orm::entity::prelude::*;

use crate::EngineError;

/// Table a favorite points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    /// Value stored in the `kind` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        }
    }
}

impl core::fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FavoriteKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "character" => Ok(Self::Character),
            "planet" => Ok(Self::Planet),
            "vehicle" => Ok(Self::Vehicle),
            other => Err(EngineError::InvalidField(format!(
                "unsupported favorite kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub item_id: i32,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub item_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Favorite {
    type Error = EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            kind: FavoriteKind::try_from(value.kind.as_str())?,
            item_id: value.item_id,
        })
    }
}
