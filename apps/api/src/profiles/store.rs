//! Persistence for profiles, social links, education and experience.
//!
//! Handlers only see the `ProfileStore` trait; `PgProfileStore` is the
//! PostgreSQL backend used in production.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{
    Candidate, EducationCreate, EducationRow, ExperienceCreate, ExperienceRow, ProfileCreate,
    ProfileRow,
};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profile(&self, profile_id: i64) -> Result<Option<ProfileRow>, AppError>;

    /// Creates the profile, or overwrites every field of the one already
    /// registered under the same email.
    async fn upsert_profile(&self, profile: &ProfileCreate) -> Result<ProfileRow, AppError>;

    /// Deletes the profile and, through cascading keys, everything it owns.
    async fn delete_profile(&self, profile_id: i64) -> Result<bool, AppError>;

    async fn insert_education(
        &self,
        profile_id: i64,
        education: &EducationCreate,
    ) -> Result<EducationRow, AppError>;

    async fn list_educations(&self, profile_id: i64) -> Result<Vec<EducationRow>, AppError>;

    async fn delete_education(&self, profile_id: i64, education_id: i64) -> Result<bool, AppError>;

    async fn insert_experience(&self, experience: &ExperienceCreate) -> Result<ExperienceRow, AppError>;

    async fn list_experiences(&self, profile_id: i64) -> Result<Vec<ExperienceRow>, AppError>;

    async fn delete_experience(&self, profile_id: i64, experience_id: i64) -> Result<bool, AppError>;
}

/// Loads a profile with its education and experience, or `NotFound`.
pub async fn load_candidate(store: &dyn ProfileStore, profile_id: i64) -> Result<Candidate, AppError> {
    let profile = require_profile(store, profile_id).await?;
    let education = store.list_educations(profile_id).await?;
    let experience = store.list_experiences(profile_id).await?;
    Ok(Candidate {
        profile,
        education,
        experience,
    })
}

pub async fn require_profile(store: &dyn ProfileStore, profile_id: i64) -> Result<ProfileRow, AppError> {
    store
        .find_profile(profile_id)
        .await?
        .ok_or_else(|| AppError::profile_not_found(profile_id))
}

const PROFILE_SELECT: &str = r#"
    SELECT p.id, p.first_name, p.last_name, p.email, p.country, p.state, p.city, p.phone,
           s.linkedin_url, s.github_url, s.personal_website,
           s.other_links ->> 0 AS other_url,
           p.about_me, p.created_at, p.updated_at
    FROM profiles p
    LEFT JOIN social_media s ON s.profile_id = p.id
"#;

const EDUCATION_COLUMNS: &str =
    "id, profile_id, institution, degree, start_date, end_date, additional_info, created_at, updated_at";

const EXPERIENCE_COLUMNS: &str =
    "id, profile_id, job_title, company, start_date, end_date, description, created_at, updated_at";

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn select_profile(conn: &mut PgConnection, profile_id: i64) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(&format!("{PROFILE_SELECT} WHERE p.id = $1"))
        .bind(profile_id)
        .fetch_optional(conn)
        .await
}

/// Writes the profile's links into its single `social_media` row.
async fn upsert_social_media(
    conn: &mut PgConnection,
    profile_id: i64,
    profile: &ProfileCreate,
) -> Result<(), sqlx::Error> {
    let other_links: Vec<String> = profile.other_url.iter().cloned().collect();

    sqlx::query(
        r#"
        INSERT INTO social_media (profile_id, linkedin_url, github_url, personal_website, other_links)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (profile_id) DO UPDATE
        SET linkedin_url = EXCLUDED.linkedin_url,
            github_url = EXCLUDED.github_url,
            personal_website = EXCLUDED.personal_website,
            other_links = EXCLUDED.other_links,
            updated_at = now()
        "#,
    )
    .bind(profile_id)
    .bind(&profile.linkedin_url)
    .bind(&profile.github_url)
    .bind(&profile.personal_website)
    .bind(Json(other_links))
    .execute(conn)
    .await?;

    Ok(())
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find_profile(&self, profile_id: i64) -> Result<Option<ProfileRow>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(select_profile(&mut conn, profile_id).await?)
    }

    async fn upsert_profile(&self, profile: &ProfileCreate) -> Result<ProfileRow, AppError> {
        let mut tx = self.pool.begin().await?;

        // xmax is zero only for a freshly inserted tuple.
        let (profile_id, inserted): (i64, bool) = sqlx::query_as(
            r#"
            INSERT INTO profiles (first_name, last_name, email, phone, city, state, country, about_me)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (email) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                phone = EXCLUDED.phone,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                country = EXCLUDED.country,
                about_me = EXCLUDED.about_me,
                updated_at = now()
            RETURNING id, (xmax = 0) AS inserted
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.country)
        .bind(&profile.about_me)
        .fetch_one(&mut *tx)
        .await?;

        upsert_social_media(&mut tx, profile_id, profile).await?;

        let row = select_profile(&mut tx, profile_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Profile {profile_id} vanished inside its own transaction"))?;

        tx.commit().await?;
        if inserted {
            info!("Created profile {profile_id}");
        } else {
            info!("Updated profile {profile_id} for existing email");
        }
        Ok(row)
    }

    async fn delete_profile(&self, profile_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(profile_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_education(
        &self,
        profile_id: i64,
        education: &EducationCreate,
    ) -> Result<EducationRow, AppError> {
        let row = sqlx::query_as::<_, EducationRow>(&format!(
            r#"
            INSERT INTO education (profile_id, institution, degree, start_date, end_date, additional_info)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EDUCATION_COLUMNS}
            "#
        ))
        .bind(profile_id)
        .bind(&education.institution)
        .bind(&education.degree)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(&education.additional_info)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_educations(&self, profile_id: i64) -> Result<Vec<EducationRow>, AppError> {
        let rows = sqlx::query_as::<_, EducationRow>(&format!(
            "SELECT {EDUCATION_COLUMNS} FROM education WHERE profile_id = $1 ORDER BY start_date DESC, id"
        ))
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete_education(&self, profile_id: i64, education_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM education WHERE id = $1 AND profile_id = $2")
            .bind(education_id)
            .bind(profile_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_experience(&self, experience: &ExperienceCreate) -> Result<ExperienceRow, AppError> {
        let row = sqlx::query_as::<_, ExperienceRow>(&format!(
            r#"
            INSERT INTO experience (profile_id, job_title, company, start_date, end_date, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EXPERIENCE_COLUMNS}
            "#
        ))
        .bind(experience.profile_id)
        .bind(&experience.job_title)
        .bind(&experience.company)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_experiences(&self, profile_id: i64) -> Result<Vec<ExperienceRow>, AppError> {
        let rows = sqlx::query_as::<_, ExperienceRow>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experience WHERE profile_id = $1 ORDER BY start_date DESC, id"
        ))
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete_experience(&self, profile_id: i64, experience_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1 AND profile_id = $2")
            .bind(experience_id)
            .bind(profile_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
