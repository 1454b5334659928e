use std::sync::Arc;

use super::write_failure;
use crate::{
    entities::{
        outcome::WriteOutcome,
        project::{NewProjectRequest, Project, UpdateProjectRequest},
    },
    repositories::project::ProjectRepository,
    revalidation::{project_view, ViewRegistry, DASHBOARD_VIEW, WORK_VIEW},
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
    views: Arc<ViewRegistry>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R, views: Arc<ViewRegistry>) -> Self {
        ProjectHandler { project_repo, views }
    }

    /// All projects, oldest first. Empty when the store cannot be read.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.project_repo.list_projects().await.unwrap_or_else(|e| {
            tracing::error!(operation = "list_projects", error = %e, "Failed to fetch projects");
            Vec::new()
        })
    }

    pub async fn list_featured_projects(&self) -> Vec<Project> {
        self.project_repo.list_featured_projects().await.unwrap_or_else(|e| {
            tracing::error!(operation = "list_featured_projects", error = %e, "Failed to fetch featured projects");
            Vec::new()
        })
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Option<Project> {
        self.project_repo.get_project_by_slug(slug).await.unwrap_or_else(|e| {
            tracing::error!(operation = "get_project_by_slug", slug, error = %e, "Failed to fetch project");
            None
        })
    }

    pub async fn create_project(&self, request: NewProjectRequest) -> WriteOutcome {
        let result = async {
            let insert = request.prepare_for_insert()?;
            self.project_repo.create_project(&insert).await
        }
        .await;

        match result {
            Ok(project) => {
                tracing::info!(id = project.id, slug = %project.slug, "Project created");
                WriteOutcome::succeeded(self.mark_project_views([project.slug.as_str()]))
            }
            Err(e) => write_failure("create_project", "Failed to create project", &e),
        }
    }

    pub async fn update_project(&self, id: i32, request: UpdateProjectRequest) -> WriteOutcome {
        let result = async {
            let request = request.prepare()?;
            self.project_repo.update_project(id, &request).await
        }
        .await;

        match result {
            Ok(updated) => {
                tracing::info!(id, slug = %updated.project.slug, "Project updated");
                WriteOutcome::succeeded(self.mark_project_views([
                    updated.previous_slug.as_str(),
                    updated.project.slug.as_str(),
                ]))
            }
            Err(e) => write_failure("update_project", "Failed to update project", &e),
        }
    }

    pub async fn delete_project(&self, id: i32) -> WriteOutcome {
        match self.project_repo.delete_project(id).await {
            Ok(slug) => {
                tracing::info!(id, slug = %slug, "Project deleted");
                WriteOutcome::succeeded(self.mark_project_views([slug.as_str()]))
            }
            Err(e) => write_failure("delete_project", "Failed to delete project", &e),
        }
    }

    fn mark_project_views<'a>(&self, slugs: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut paths = vec![WORK_VIEW.to_string()];
        paths.extend(slugs.into_iter().map(project_view));
        paths.push(DASHBOARD_VIEW.to_string());
        self.views.mark_stale(paths)
    }
}
