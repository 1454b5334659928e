use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;

pub const WORK_VIEW: &str = "/work";
pub const ABOUT_VIEW: &str = "/about";
pub const RESUME_VIEW: &str = "/resume";
pub const CONTACT_VIEW: &str = "/contact";
pub const DASHBOARD_VIEW: &str = "/admin/dashboard";

pub fn project_view(slug: &str) -> String {
    format!("{}/{}", WORK_VIEW, slug)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewState {
    pub path: String,
    pub generation: u64,
    pub stale_since: DateTime<Utc>,
}

/// Tracks which presentation views depend on data that changed.
///
/// Each mark bumps the view's generation; a renderer that remembers the
/// generation it rendered can tell whether it must re-fetch.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: DashMap<String, ViewState>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every view in `paths` stale and returns the paths, in order.
    pub fn mark_stale<I, S>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = Utc::now();
        let mut marked = Vec::new();

        for path in paths {
            let path = path.into();
            if marked.contains(&path) {
                continue;
            }

            self.views
                .entry(path.clone())
                .and_modify(|state| {
                    state.generation += 1;
                    state.stale_since = now;
                })
                .or_insert_with(|| ViewState {
                    path: path.clone(),
                    generation: 1,
                    stale_since: now,
                });

            tracing::debug!(view = %path, "Marked view stale");
            marked.push(path);
        }

        marked
    }

    pub fn generation(&self, path: &str) -> u64 {
        self.views.get(path).map(|s| s.generation).unwrap_or(0)
    }

    /// All tracked views, sorted by path.
    pub fn snapshot(&self) -> Vec<ViewState> {
        let mut states: Vec<ViewState> = self.views.iter().map(|e| e.value().clone()).collect();
        states.sort_by(|a, b| a.path.cmp(&b.path));
        states
    }
}
