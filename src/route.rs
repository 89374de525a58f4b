//! Hash Routing
//!
//! `#/tasks/{parentId}` and `#/kader/{parentId}` pick the view.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Tasks(String),
    Kader(String),
    NotFound,
}

impl Route {
    /// Parse a location hash (with or without the leading `#`)
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let mut parts = path.split('/').filter(|p| !p.is_empty());
        match (parts.next(), parts.next(), parts.next()) {
            (Some("tasks"), Some(id), None) => Route::Tasks(id.to_string()),
            (Some("kader"), Some(id), None) => Route::Kader(id.to_string()),
            _ => Route::NotFound,
        }
    }
}
