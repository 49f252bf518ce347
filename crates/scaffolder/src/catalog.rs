use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;
use crate::store::{FileStore, normalize};

/// Whether a template is a single file or a directory tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    File,
    Directory,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TemplateKind::File => "file",
            TemplateKind::Directory => "directory",
        };
        write!(f, "{label}")
    }
}

/// A template discovered directly under the templates root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub path: PathBuf,
    pub kind: TemplateKind,
}

/// Lists the templates directly under `root`, sorted by name.
///
/// Hidden entries are skipped. A missing or unreadable root yields no templates.
pub fn list_templates<S: FileStore + ?Sized>(store: &S, root: &Path) -> Vec<Template> {
    let Ok(entries) = store.list_entries(root) else {
        return Vec::new();
    };

    let mut templates: Vec<Template> = entries
        .into_iter()
        .filter(|name| !is_hidden(name))
        .map(|name| {
            let path = root.join(&name);
            let kind = if store.is_dir(&path) {
                TemplateKind::Directory
            } else {
                TemplateKind::File
            };
            Template { name, path, kind }
        })
        .collect();
    templates.sort_by(|a, b| a.name.cmp(&b.name));
    templates
}

pub(crate) fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Resolves template names against a single templates root.
pub struct TemplateCatalog<S: FileStore> {
    store: S,
    root: PathBuf,
}

impl<S: FileStore> TemplateCatalog<S> {
    pub fn new(store: S, root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> Vec<Template> {
        list_templates(&self.store, &self.root)
    }

    /// Resolves `name` to a template inside the root.
    ///
    /// Names that escape the root are rejected before any store access.
    pub fn resolve(&self, name: &str) -> Result<Template, ScaffoldError> {
        let path = self.template_path(name)?;
        if !self.store.exists(&path) {
            return Err(ScaffoldError::TemplateNotFound(name.to_string()));
        }

        let kind = if self.store.is_dir(&path) {
            TemplateKind::Directory
        } else {
            TemplateKind::File
        };
        Ok(Template {
            name: name.to_string(),
            path,
            kind,
        })
    }

    fn template_path(&self, name: &str) -> Result<PathBuf, ScaffoldError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ScaffoldError::InvalidInput(
                "template name must not be empty".into(),
            ));
        }

        let candidate = Path::new(trimmed);
        if candidate.is_absolute()
            || candidate
                .components()
                .any(|component| matches!(component, Component::Prefix(_) | Component::RootDir))
        {
            return Err(ScaffoldError::InvalidInput(format!(
                "template name '{trimmed}' must be relative to the templates root"
            )));
        }

        let root = normalize(&self.root);
        let resolved = normalize(&self.root.join(candidate));
        if resolved == root || !resolved.starts_with(&root) {
            return Err(ScaffoldError::InvalidInput(format!(
                "template name '{trimmed}' escapes the templates root"
            )));
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn catalog() -> TemplateCatalog<MemoryStore> {
        let store = MemoryStore::new();
        store.insert_file("templates/component/__templateNameToPascalCase__.tsx", "x");
        store.insert_file("templates/hook.ts", "y");
        store.insert_file("templates/.DS_Store", "");
        TemplateCatalog::new(store, "templates")
    }

    #[test]
    fn list_returns_sorted_visible_templates() {
        let templates = catalog().list();
        let summary: Vec<_> = templates
            .iter()
            .map(|template| (template.name.as_str(), template.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("component", TemplateKind::Directory),
                ("hook.ts", TemplateKind::File)
            ]
        );
    }

    #[test]
    fn list_is_lenient_for_missing_root() {
        let store = MemoryStore::new();
        assert!(list_templates(&store, Path::new("nowhere")).is_empty());
    }

    #[test]
    fn resolve_rejects_traversal_as_input_error() {
        let catalog = catalog();
        for name in ["../secrets", "component/../../etc", "/etc/passwd", "", ".", "  "] {
            let err = catalog.resolve(name).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidInput(_)),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn resolve_reports_missing_templates_by_name() {
        let err = catalog().resolve("widget").unwrap_err();
        match err {
            ScaffoldError::TemplateNotFound(name) => assert_eq!(name, "widget"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_classifies_kind() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve("component").unwrap().kind,
            TemplateKind::Directory
        );
        let hook = catalog.resolve("hook.ts").unwrap();
        assert_eq!(hook.kind, TemplateKind::File);
        assert_eq!(hook.path, PathBuf::from("templates/hook.ts"));
    }
}
