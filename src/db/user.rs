use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::user::{DBUserCreate, DBUserUpdate};
use crate::utils::password::hash_password;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, UserRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

/// Development seed accounts, created at startup when absent. Known
/// credentials, never meant to survive into production data.
const SEED_USERS: [(&str, &str, UserRole); 2] = [
    ("admin@example.com", "admin123", UserRole::Admin),
    ("user@example.com", "user123", UserRole::User),
];

impl PostgresService {
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Login lookup. Absence is not an error here so the caller can collapse
    /// unknown email and wrong password into one refusal.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Insert straight away and let the unique index on email arbitrate
    /// duplicates; a violation comes back as `AlreadyExists`. No existence
    /// pre-check, that would just reopen the race between concurrent creates.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let uid = Uuid::new_v4();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            role: Set(payload.role),
            created_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        self.get_user_by_id(&uid).await
    }

    pub async fn update_user(
        &self,
        id: &Uuid,
        changes: DBUserUpdate,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(id).await?.into();

        if let Some(email) = changes.email {
            am.email = Set(email);
        }
        if let Some(hash) = changes.password_hash {
            am.password_hash = Set(hash);
        }
        if let Some(role) = changes.role {
            am.role = Set(role);
        }

        Ok(am.update(&self.db).await?)
    }

    /// Permanent removal. A second delete of the same id reports `NotFound`
    /// instead of pretending it worked.
    pub async fn delete_user(&self, id: &Uuid) -> Result<(), AppError> {
        let res = User::delete_by_id(*id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn seed_default_users(&self) -> Result<(), AppError> {
        for (email, password, role) in SEED_USERS {
            let created = self
                .create_user(DBUserCreate {
                    email: email.to_string(),
                    password_hash: hash_password(password)?,
                    role,
                })
                .await;

            match created {
                Ok(user) => info!("Seeded default {} account {}", role, user.email),
                // another instance (or a previous run) got there first
                Err(AppError::AlreadyExists) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
