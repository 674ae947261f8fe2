use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::User;
use super::store::UserStore;

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn create_user(store: &UserStore, user: User) -> Result<User, AppError> {
        if !store.try_insert(user.clone()).await {
            return Err(AppError::conflict(anyhow::anyhow!("User already exists.")));
        }
        Ok(user)
    }

    #[instrument(skip(store))]
    pub async fn get_users(store: &UserStore) -> Vec<User> {
        store.list().await
    }

    #[instrument(skip(store))]
    pub async fn get_user(store: &UserStore, id: u32) -> Result<User, AppError> {
        store
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with ID {} not found.", id)))
    }

    /// Full-record replace. The path id wins over whatever id the body
    /// carries, and the write is rejected if the record changed since it
    /// was read.
    #[instrument(skip(store))]
    pub async fn update_user(
        store: &UserStore,
        id: u32,
        mut updated: User,
    ) -> Result<(), AppError> {
        let existing = Self::get_user(store, id).await?;

        updated.id = id;
        if !store.try_update(id, &existing, updated).await {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Failed to update user due to a concurrency conflict."
            )));
        }
        Ok(())
    }

    #[instrument(skip(store))]
    pub async fn delete_user(store: &UserStore, id: u32) -> Result<(), AppError> {
        store
            .remove(id)
            .await
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with ID {} not found.", id)))
    }
}
