use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, ResultEngine, User, UserCmd, UserUpdateCmd, users,
    util::{hash_password, normalize_required},
};

use super::{Engine, with_tx};

fn user_not_found(id: i32) -> EngineError {
    EngineError::KeyNotFound(format!("user {id}"))
}

impl Engine {
    /// Register a new user. The password is stored as an Argon2 hash.
    pub async fn create_user(&self, cmd: UserCmd) -> ResultEngine<User> {
        let username = normalize_required(&cmd.username, "username")?;
        let email = normalize_required(&cmd.email, "email")?;
        let password = hash_password(&cmd.password)?;

        let model = users::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!(user_id = model.id, "user created");
        Ok(User::from(model))
    }

    /// Return every user, oldest first.
    pub async fn users(&self) -> ResultEngine<Vec<User>> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    /// Return a single user.
    pub async fn user(&self, id: i32) -> ResultEngine<User> {
        users::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(User::from)
            .ok_or_else(|| user_not_found(id))
    }

    /// Overwrite the fields present in `cmd`, leaving the others untouched.
    pub async fn update_user(&self, id: i32, cmd: UserUpdateCmd) -> ResultEngine<User> {
        if cmd.is_empty() {
            return Err(EngineError::InvalidField(
                "provide at least one of username, email or password".to_string(),
            ));
        }

        let username = cmd
            .username
            .as_deref()
            .map(|value| normalize_required(value, "username"))
            .transpose()?;
        let email = cmd
            .email
            .as_deref()
            .map(|value| normalize_required(value, "email"))
            .transpose()?;
        let password = cmd.password.as_deref().map(hash_password).transpose()?;

        with_tx!(self, |db_tx| {
            let model = users::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| user_not_found(id))?;

            let mut active: users::ActiveModel = model.into();
            if let Some(username) = username {
                active.username = ActiveValue::Set(username);
            }
            if let Some(email) = email {
                active.email = ActiveValue::Set(email);
            }
            if let Some(password) = password {
                active.password = ActiveValue::Set(password);
            }
            let model = active.update(&db_tx).await?;

            Ok(User::from(model))
        })
    }

    /// Delete a user. Favorites pointing at it are left in place.
    pub async fn delete_user(&self, id: i32) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = users::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| user_not_found(id))?;
            model.delete(&db_tx).await?;

            tracing::debug!(user_id = id, "user deleted");
            Ok(())
        })
    }
}
