use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::project::{Project, ProjectInsert, UpdateProjectRequest, UpdatedProject},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

const SLUG_CONSTRAINT: &str = "projects_slug_key";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Oldest first.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn update_project(&self, id: i32, project: &UpdateProjectRequest) -> Result<UpdatedProject, AppError>;
    async fn delete_project(&self, id: i32) -> Result<String, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some(SLUG_CONSTRAINT) {
            return AppError::Conflict("Slug already exists".into());
        }
    }
    AppError::from(e)
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"SELECT * FROM projects ORDER BY created_at ASC, id ASC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"SELECT * FROM projects WHERE featured = TRUE ORDER BY created_at ASC, id ASC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"SELECT * FROM projects WHERE slug = $1"#
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                slug, title, description, full_description, image, images,
                tech_stack, live_link, github_link, purpose, featured
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#
        )
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.full_description)
        .bind(&project.image)
        .bind(&project.images)
        .bind(&project.tech_stack)
        .bind(&project.live_link)
        .bind(&project.github_link)
        .bind(&project.purpose)
        .bind(project.featured)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(created)
    }

    async fn update_project(&self, id: i32, project: &UpdateProjectRequest) -> Result<UpdatedProject, AppError> {
        let (set_full_description, full_description) = nullable(&project.full_description);
        let (set_image, image) = nullable(&project.image);
        let (set_live_link, live_link) = nullable(&project.live_link);
        let (set_github_link, github_link) = nullable(&project.github_link);
        let (set_purpose, purpose) = nullable(&project.purpose);

        // COALESCE keeps the stored value for every field left out of the request;
        // the nullable columns carry a flag so that an explicit null clears them.
        // The FROM row is read before the update, so it still holds the old slug.
        let updated = sqlx::query_as::<_, UpdatedProject>(
            r#"
            UPDATE projects SET
                slug = COALESCE($1, slug),
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                full_description = CASE WHEN $4 THEN $5 ELSE full_description END,
                image = CASE WHEN $6 THEN $7 ELSE image END,
                images = COALESCE($8, images),
                tech_stack = COALESCE($9, tech_stack),
                live_link = CASE WHEN $10 THEN $11 ELSE live_link END,
                github_link = CASE WHEN $12 THEN $13 ELSE github_link END,
                purpose = CASE WHEN $14 THEN $15 ELSE purpose END,
                featured = COALESCE($16, featured),
                updated_at = NOW()
            FROM (SELECT id AS previous_id, slug AS previous_slug FROM projects WHERE id = $17) AS previous
            WHERE projects.id = previous.previous_id
            RETURNING projects.*, previous.previous_slug
            "#
        )
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(set_full_description)
        .bind(full_description)
        .bind(set_image)
        .bind(image)
        .bind(&project.images)
        .bind(&project.tech_stack)
        .bind(set_live_link)
        .bind(live_link)
        .bind(set_github_link)
        .bind(github_link)
        .bind(set_purpose)
        .bind(purpose)
        .bind(project.featured)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        updated.ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn delete_project(&self, id: i32) -> Result<String, AppError> {
        let slug: Option<String> = sqlx::query_scalar(
            r#"DELETE FROM projects WHERE id = $1 RETURNING slug"#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        slug.ok_or_else(|| AppError::NotFound("Project not found".into()))
    }
}

/// Whether the column is written, and the value written to it.
fn nullable(field: &Option<Option<String>>) -> (bool, Option<&str>) {
    (field.is_some(), field.as_ref().and_then(|value| value.as_deref()))
}
