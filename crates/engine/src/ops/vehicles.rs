use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};

use crate::{
    EngineError, ResultEngine, Vehicle, VehicleCmd,
    util::{normalize_optional_text, normalize_required},
    vehicles,
};

use super::Engine;

impl Engine {
    /// Add a vehicle. Blank descriptive attributes are stored as `NULL`.
    pub async fn create_vehicle(&self, cmd: VehicleCmd) -> ResultEngine<Vehicle> {
        let name = normalize_required(&cmd.name, "name")?;

        let model = vehicles::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            vehicle_model: ActiveValue::Set(normalize_optional_text(cmd.model.as_deref())),
            manufacturer: ActiveValue::Set(normalize_optional_text(cmd.manufacturer.as_deref())),
            vehicle_class: ActiveValue::Set(normalize_optional_text(
                cmd.vehicle_class.as_deref(),
            )),
            cost_in_credits: ActiveValue::Set(normalize_optional_text(
                cmd.cost_in_credits.as_deref(),
            )),
            crew: ActiveValue::Set(normalize_optional_text(cmd.crew.as_deref())),
            passengers: ActiveValue::Set(normalize_optional_text(cmd.passengers.as_deref())),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!(vehicle_id = model.id, "vehicle created");
        Ok(Vehicle::from(model))
    }

    pub async fn vehicles(&self) -> ResultEngine<Vec<Vehicle>> {
        let models = vehicles::Entity::find()
            .order_by_asc(vehicles::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Vehicle::from).collect())
    }

    /// Look a vehicle up by exact name. On duplicates the oldest wins.
    pub async fn vehicle_by_name(&self, name: &str) -> ResultEngine<Vehicle> {
        vehicles::Entity::find()
            .filter(vehicles::Column::Name.eq(name))
            .order_by_asc(vehicles::Column::Id)
            .one(&self.database)
            .await?
            .map(Vehicle::from)
            .ok_or_else(|| EngineError::KeyNotFound(format!("vehicle '{name}'")))
    }
}
