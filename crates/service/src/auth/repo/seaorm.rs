use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_auth_user(u: models::user::Model) -> AuthUser {
    AuthUser { id: u.id, email: u.email, username: u.username, phone: u.phone }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::Entity::find()
            .filter(models::user::Column::Email.eq(email.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(to_auth_user))
    }

    async fn create_user(
        &self,
        email: &str,
        username: &str,
        phone: Option<&str>,
    ) -> Result<AuthUser, AuthError> {
        let created = models::user::create(&self.db, email, username, phone)
            .await
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        Ok(to_auth_user(created))
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let res = models::user_credentials::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|c| Credentials {
            user_id: c.user_id,
            password_hash: c.password_hash,
            password_algorithm: c.password_algorithm,
        }))
    }

    async fn upsert_password(
        &self,
        user_id: Uuid,
        password_hash: String,
        password_algorithm: String,
    ) -> Result<Credentials, AuthError> {
        let c = models::user_credentials::upsert_password(
            &self.db,
            user_id,
            password_hash,
            &password_algorithm,
        )
        .await
        .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(Credentials {
            user_id: c.user_id,
            password_hash: c.password_hash,
            password_algorithm: c.password_algorithm,
        })
    }
}
