//! Initial schema migration.
//!
//! Creates the record tables served by Holonet:
//!
//! - `users`: API users (password stored as an Argon2 hash)
//! - `characters`: people of the galaxy
//! - `planets`: planets and their descriptive attributes
//! - `vehicles`: vehicles and their descriptive attributes
//!
//! Favorites live in their own migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Url,
    Species,
    Gender,
    BirthYear,
    Height,
    Mass,
    HairColor,
    EyeColor,
    SkinColor,
    Films,
    Created,
    Edited,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
    Population,
    Diameter,
    Gravity,
    RotationPeriod,
    OrbitalPeriod,
}

#[derive(Iden)]
enum Vehicles {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    VehicleClass,
    CostInCredits,
    Crew,
    Passengers,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Characters
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string().not_null())
                    .col(ColumnDef::new(Characters::Url).string().not_null())
                    .col(ColumnDef::new(Characters::Species).string().not_null())
                    .col(ColumnDef::new(Characters::Gender).string().not_null())
                    .col(ColumnDef::new(Characters::BirthYear).string().not_null())
                    .col(ColumnDef::new(Characters::Height).string().not_null())
                    .col(ColumnDef::new(Characters::Mass).string().not_null())
                    .col(ColumnDef::new(Characters::HairColor).string().not_null())
                    .col(ColumnDef::new(Characters::EyeColor).string().not_null())
                    .col(ColumnDef::new(Characters::SkinColor).string().not_null())
                    .col(ColumnDef::new(Characters::Films).string().not_null())
                    .col(
                        ColumnDef::new(Characters::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Characters::Edited)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-characters-name")
                    .table(Characters::Table)
                    .col(Characters::Name)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Planets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::Name).string().not_null())
                    .col(ColumnDef::new(Planets::Climate).string())
                    .col(ColumnDef::new(Planets::Terrain).string())
                    .col(ColumnDef::new(Planets::Population).string())
                    .col(ColumnDef::new(Planets::Diameter).string())
                    .col(ColumnDef::new(Planets::Gravity).string())
                    .col(ColumnDef::new(Planets::RotationPeriod).string())
                    .col(ColumnDef::new(Planets::OrbitalPeriod).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-planets-name")
                    .table(Planets::Table)
                    .col(Planets::Name)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Vehicles
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::Name).string().not_null())
                    .col(ColumnDef::new(Vehicles::Model).string())
                    .col(ColumnDef::new(Vehicles::Manufacturer).string())
                    .col(ColumnDef::new(Vehicles::VehicleClass).string())
                    .col(ColumnDef::new(Vehicles::CostInCredits).string())
                    .col(ColumnDef::new(Vehicles::Crew).string())
                    .col(ColumnDef::new(Vehicles::Passengers).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-vehicles-name")
                    .table(Vehicles::Table)
                    .col(Vehicles::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
