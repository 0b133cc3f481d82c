use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};

use crate::{Character, CharacterCmd, EngineError, ResultEngine, characters, util::normalize_required};

use super::Engine;

impl Engine {
    /// Add a character. Every text attribute is required and stored trimmed.
    pub async fn create_character(&self, cmd: CharacterCmd) -> ResultEngine<Character> {
        let model = characters::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(normalize_required(&cmd.name, "name")?),
            url: ActiveValue::Set(normalize_required(&cmd.url, "url")?),
            species: ActiveValue::Set(normalize_required(&cmd.species, "species")?),
            gender: ActiveValue::Set(normalize_required(&cmd.gender, "gender")?),
            birth_year: ActiveValue::Set(normalize_required(&cmd.birth_year, "birthYear")?),
            height: ActiveValue::Set(normalize_required(&cmd.height, "height")?),
            mass: ActiveValue::Set(normalize_required(&cmd.mass, "mass")?),
            hair_color: ActiveValue::Set(normalize_required(&cmd.hair_color, "hairColor")?),
            eye_color: ActiveValue::Set(normalize_required(&cmd.eye_color, "eyeColor")?),
            skin_color: ActiveValue::Set(normalize_required(&cmd.skin_color, "skinColor")?),
            films: ActiveValue::Set(normalize_required(&cmd.films, "films")?),
            created: ActiveValue::Set(cmd.created),
            edited: ActiveValue::Set(cmd.edited),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!(character_id = model.id, "character created");
        Ok(Character::from(model))
    }

    pub async fn characters(&self) -> ResultEngine<Vec<Character>> {
        let models = characters::Entity::find()
            .order_by_asc(characters::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Character::from).collect())
    }

    /// Look a character up by exact name. On duplicates the oldest wins.
    pub async fn character_by_name(&self, name: &str) -> ResultEngine<Character> {
        characters::Entity::find()
            .filter(characters::Column::Name.eq(name))
            .order_by_asc(characters::Column::Id)
            .one(&self.database)
            .await?
            .map(Character::from)
            .ok_or_else(|| EngineError::KeyNotFound(format!("character '{name}'")))
    }
}
