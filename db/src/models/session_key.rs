use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use serde::Serialize;
use util::geo::Coordinate;

/// Random bytes per token; hex-encoded to 64 characters.
const TOKEN_BYTES: usize = 32;

/// One time-boxed attendance-taking event for a course.
///
/// Rows are written once at issuance and never mutated. A key accepts scans only
/// while the current time is before `expires_at`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "session_keys")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub course_id: i64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub required_latitude: Option<f64>,
    pub required_longitude: Option<f64>,
    pub location_tolerance_m: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Creator,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Parameters for issuing a new key.
#[derive(Debug, Clone)]
pub struct NewSessionKey {
    pub course_id: i64,
    pub created_by: i64,
    pub duration: Duration,
    pub required_location: Option<Coordinate>,
    pub location_tolerance_m: i32,
}

/// 64 hex characters from the OS RNG.
pub fn generate_token() -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

impl Model {
    /// Persists a freshly generated key valid from `now` for `params.duration`.
    pub async fn create<C>(db: &C, params: NewSessionKey, now: DateTime<Utc>) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let (lat, lon) = match params.required_location {
            Some(c) => (Some(c.latitude), Some(c.longitude)),
            None => (None, None),
        };

        ActiveModel {
            key: Set(generate_token()),
            course_id: Set(params.course_id),
            created_by: Set(params.created_by),
            created_at: Set(now),
            expires_at: Set(now + params.duration),
            required_latitude: Set(lat),
            required_longitude: Set(lon),
            location_tolerance_m: Set(params.location_tolerance_m),
        }
        .insert(db)
        .await
    }

    pub async fn find_by_key<C>(db: &C, key: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(key.to_owned()).one(db).await
    }

    /// A key is expired from `expires_at` onwards.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// The coordinate scans must fall near, if the key was issued with one.
    pub fn required_location(&self) -> Option<Coordinate> {
        match (self.required_latitude, self.required_longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{course, user};
    use crate::test_utils::setup_test_db;
    use chrono::TimeZone;

    #[test]
    fn test_tokens_are_random_hex() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), TOKEN_BYTES * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_create_sets_expiry_and_location() {
        let db = setup_test_db().await;
        let lect = user::Model::create(&db, "l", "l@test.com", "pw", false)
            .await
            .unwrap();
        let c = course::Model::create(&db, "MATH101", "Maths", lect.id, 12)
            .await
            .unwrap();

        let now = Utc.with_ymd_and_hms(2025, 9, 8, 10, 0, 0).unwrap();
        let key = Model::create(
            &db,
            NewSessionKey {
                course_id: c.id,
                created_by: lect.id,
                duration: Duration::minutes(10),
                required_location: Some(Coordinate::new(6.6710, -1.5658)),
                location_tolerance_m: 50,
            },
            now,
        )
        .await
        .unwrap();

        assert_eq!(key.expires_at, now + Duration::minutes(10));
        assert_eq!(key.required_location(), Some(Coordinate::new(6.6710, -1.5658)));

        let found = Model::find_by_key(&db, &key.key).await.unwrap().unwrap();
        assert_eq!(found.course_id, c.id);

        assert!(!key.is_expired(now + Duration::minutes(9)));
        assert!(key.is_expired(now + Duration::minutes(10)));
        assert!(key.is_expired(now + Duration::minutes(11)));
    }
}
