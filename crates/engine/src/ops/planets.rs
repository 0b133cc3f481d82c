use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};

use crate::{
    EngineError, Planet, PlanetCmd, ResultEngine, planets,
    util::{normalize_optional_text, normalize_required},
};

use super::Engine;

impl Engine {
    /// Add a planet. Blank descriptive attributes are stored as `NULL`.
    pub async fn create_planet(&self, cmd: PlanetCmd) -> ResultEngine<Planet> {
        let name = normalize_required(&cmd.name, "name")?;

        let model = planets::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            climate: ActiveValue::Set(normalize_optional_text(cmd.climate.as_deref())),
            terrain: ActiveValue::Set(normalize_optional_text(cmd.terrain.as_deref())),
            population: ActiveValue::Set(normalize_optional_text(cmd.population.as_deref())),
            diameter: ActiveValue::Set(normalize_optional_text(cmd.diameter.as_deref())),
            gravity: ActiveValue::Set(normalize_optional_text(cmd.gravity.as_deref())),
            rotation_period: ActiveValue::Set(normalize_optional_text(
                cmd.rotation_period.as_deref(),
            )),
            orbital_period: ActiveValue::Set(normalize_optional_text(
                cmd.orbital_period.as_deref(),
            )),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!(planet_id = model.id, "planet created");
        Ok(Planet::from(model))
    }

    pub async fn planets(&self) -> ResultEngine<Vec<Planet>> {
        let models = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Planet::from).collect())
    }

    /// Look a planet up by exact name. On duplicates the oldest wins.
    pub async fn planet_by_name(&self, name: &str) -> ResultEngine<Planet> {
        planets::Entity::find()
            .filter(planets::Column::Name.eq(name))
            .order_by_asc(planets::Column::Id)
            .one(&self.database)
            .await?
            .map(Planet::from)
            .ok_or_else(|| EngineError::KeyNotFound(format!("planet '{name}'")))
    }
}
