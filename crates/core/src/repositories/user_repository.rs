use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use travelapp_primitives::error::{ApiError, AuthError};
use travelapp_primitives::models::entities::user::{NewUser, User};
use travelapp_primitives::schema::users;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<User>, ApiError> {
        users::table
            .find(user_id)
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::email.eq(user_email))
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    ApiError::Auth(AuthError::DuplicateAccount)
                }
                other => ApiError::from(other),
            })
    }
}
