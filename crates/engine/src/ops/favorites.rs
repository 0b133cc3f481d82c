use sea_orm::{
    ActiveValue, DatabaseTransaction, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
    prelude::*,
};

use crate::{
    EngineError, Favorite, FavoriteCmd, FavoriteKind, ResultEngine, characters, favorites,
    planets, users, vehicles,
};

use super::{Engine, with_tx};

fn favorite_not_found(id: i32) -> EngineError {
    EngineError::KeyNotFound(format!("favorite {id}"))
}

fn duplicate_favorite(cmd: &FavoriteCmd) -> EngineError {
    EngineError::ExistingKey(format!(
        "favorite {} {} for user {}",
        cmd.kind, cmd.item_id, cmd.user_id
    ))
}

fn favorites_from_models(models: Vec<favorites::Model>) -> ResultEngine<Vec<Favorite>> {
    models.into_iter().map(Favorite::try_from).collect()
}

impl Engine {
    async fn require_user(&self, db_tx: &DatabaseTransaction, user_id: i32) -> ResultEngine<()> {
        users::Entity::find_by_id(user_id)
            .one(db_tx)
            .await?
            .map(|_| ())
            .ok_or_else(|| EngineError::KeyNotFound(format!("user {user_id}")))
    }

    async fn require_item(
        &self,
        db_tx: &DatabaseTransaction,
        kind: FavoriteKind,
        item_id: i32,
    ) -> ResultEngine<()> {
        let exists = match kind {
            FavoriteKind::Character => characters::Entity::find_by_id(item_id)
                .one(db_tx)
                .await?
                .is_some(),
            FavoriteKind::Planet => planets::Entity::find_by_id(item_id)
                .one(db_tx)
                .await?
                .is_some(),
            FavoriteKind::Vehicle => vehicles::Entity::find_by_id(item_id)
                .one(db_tx)
                .await?
                .is_some(),
        };
        if !exists {
            return Err(EngineError::KeyNotFound(format!("{kind} {item_id}")));
        }
        Ok(())
    }

    /// Mark a character, planet or vehicle as a favorite of a user.
    ///
    /// Both the user and the item must exist, and the same
    /// `(user, kind, item)` triple cannot be stored twice.
    pub async fn create_favorite(&self, cmd: FavoriteCmd) -> ResultEngine<Favorite> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, cmd.user_id).await?;
            self.require_item(&db_tx, cmd.kind, cmd.item_id).await?;

            let duplicate = favorites::Entity::find()
                .filter(favorites::Column::UserId.eq(cmd.user_id))
                .filter(favorites::Column::Kind.eq(cmd.kind.as_str()))
                .filter(favorites::Column::ItemId.eq(cmd.item_id))
                .one(&db_tx)
                .await?
                .is_some();
            if duplicate {
                return Err(duplicate_favorite(&cmd));
            }

            // Concurrent inserts of the same triple are stopped by the unique index.
            let model = favorites::ActiveModel {
                id: ActiveValue::NotSet,
                user_id: ActiveValue::Set(cmd.user_id),
                kind: ActiveValue::Set(cmd.kind.as_str().to_string()),
                item_id: ActiveValue::Set(cmd.item_id),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_favorite(&cmd),
                _ => EngineError::from(err),
            })?;

            tracing::debug!(favorite_id = model.id, user_id = cmd.user_id, "favorite created");
            Favorite::try_from(model)
        })
    }

    pub async fn favorites(&self) -> ResultEngine<Vec<Favorite>> {
        let models = favorites::Entity::find()
            .order_by_asc(favorites::Column::Id)
            .all(&self.database)
            .await?;
        favorites_from_models(models)
    }

    pub async fn favorite(&self, id: i32) -> ResultEngine<Favorite> {
        let model = favorites::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| favorite_not_found(id))?;
        Favorite::try_from(model)
    }

    /// Favorites of one user, oldest first. Fails when the user does not exist.
    pub async fn user_favorites(&self, user_id: i32) -> ResultEngine<Vec<Favorite>> {
        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, user_id).await?;
            let models = favorites::Entity::find()
                .filter(favorites::Column::UserId.eq(user_id))
                .order_by_asc(favorites::Column::Id)
                .all(&db_tx)
                .await?;
            favorites_from_models(models)
        })
    }

    pub async fn delete_favorite(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = favorites::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| favorite_not_found(id))?;
            model.delete(&db_tx).await?;
            Ok(())
        })
    }
}
