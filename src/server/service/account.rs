use sea_orm::ConnectionTrait;

use crate::server::{data::user::UserRepository, error::AppError, model::account::NewAccount};
use entity::enums::Status;

/// Identity collaborator. Owns credential storage so the member lifecycle
/// never touches password material directly.
///
/// Generic over the connection so member signup can run it inside the
/// same transaction as the member rows.
pub struct AccountService<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a credential account with an argon2-hashed password.
    pub async fn create_account(
        &self,
        params: NewAccount,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Duplicate(format!(
                "Account with email {} already exists",
                params.email
            )));
        }

        let hash = hash_password(&params.password)?;
        let user = repo
            .insert(params.email, hash, params.role, params.status)
            .await?;
        Ok(user)
    }

    /// Marks the account behind `email` inactive. Missing accounts are
    /// ignored so lifecycle cascades stay best-effort on this edge.
    pub async fn deactivate_by_email(&self, email: &str) -> Result<(), AppError> {
        self.set_status_by_email(email, Status::Inactive).await
    }

    /// Reinstates the account behind `email`. Missing accounts are ignored,
    /// same as deactivation.
    pub async fn activate_by_email(&self, email: &str) -> Result<(), AppError> {
        self.set_status_by_email(email, Status::Active).await
    }

    async fn set_status_by_email(&self, email: &str, status: Status) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        if let Some(user) = repo.find_by_email(email).await? {
            repo.set_status(user, status).await?;
        }
        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    use argon2::password_hash::rand_core::OsRng;
    use argon2::password_hash::SaltString;
    use argon2::{Argon2, PasswordHasher};

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}
