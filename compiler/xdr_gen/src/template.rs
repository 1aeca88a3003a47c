//! Output templates.
//!
//! Templates are literal text with a handful of tags:
//!
//! - `{{#enums}} ... {{/enums}}` and `{{#consts}} ... {{/consts}}` repeat
//!   their body once per model entry, in model order.
//! - `{{name}}` / `{{value}}` expand to the current entry's fields and are
//!   only valid inside a section.
//! - `{{! ... }}` is a comment.
//!
//! Sections do not nest. Anything else is rejected when the template is
//! parsed, so rendering itself cannot fail.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use xdr_ir::{ConstItem, SymbolModel};

/// Logical name of the constants template.
pub const CONSTANTS_TEMPLATE: &str = "constants.tmpl";

const BUILTIN_CONSTANTS: &str = include_str!("../templates/constants.tmpl");

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("no built-in template named `{name}`")]
    UnknownBuiltin { name: String },

    #[error("template {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read template {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed template `{name}` at byte {offset}: {message}")]
    Malformed {
        name: String,
        offset: usize,
        message: String,
    },
}

/// Which model list a section iterates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum List {
    Enums,
    Consts,
}

impl List {
    fn from_tag(tag: &str) -> Option<List> {
        match tag {
            "enums" => Some(List::Enums),
            "consts" => Some(List::Consts),
            _ => None,
        }
    }

    fn items(self, model: &SymbolModel) -> &[ConstItem] {
        match self {
            List::Enums => &model.enums,
            List::Consts => &model.consts,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Field {
    Name,
    Value,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Node {
    Text(String),
    Field(Field),
    Section { list: List, body: Vec<Node> },
}

/// A parsed template.
#[derive(Clone, Debug)]
pub struct Template {
    name: String,
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source. `name` is used in error messages.
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let malformed = |offset: usize, message: &str| TemplateError::Malformed {
            name: name.to_string(),
            offset,
            message: message.to_string(),
        };

        let mut nodes = Vec::new();
        // Open section: its list, its body so far, and where it started.
        let mut open: Option<(List, Vec<Node>, usize)> = None;
        let mut pos = 0;

        while let Some(found) = source[pos..].find("{{") {
            let tag_start = pos + found;
            let Some(len) = source[tag_start + 2..].find("}}") else {
                return Err(malformed(tag_start, "unclosed tag"));
            };
            let tag = source[tag_start + 2..tag_start + 2 + len].trim();
            let target = match open.as_mut() {
                Some((_, body, _)) => body,
                None => &mut nodes,
            };
            if tag_start > pos {
                target.push(Node::Text(source[pos..tag_start].to_string()));
            }
            pos = tag_start + 2 + len + 2;

            if tag.starts_with('!') {
                continue;
            }
            if let Some(list) = tag.strip_prefix('#') {
                let list = List::from_tag(list)
                    .ok_or_else(|| malformed(tag_start, &format!("unknown section `{list}`")))?;
                if open.is_some() {
                    return Err(malformed(tag_start, "sections cannot nest"));
                }
                open = Some((list, Vec::new(), tag_start));
            } else if let Some(list) = tag.strip_prefix('/') {
                match open.take() {
                    Some((open_list, body, _)) if List::from_tag(list) == Some(open_list) => {
                        nodes.push(Node::Section {
                            list: open_list,
                            body,
                        });
                    }
                    _ => {
                        return Err(malformed(tag_start, &format!("unexpected `{{{{/{list}}}}}`")))
                    }
                }
            } else {
                let field = match tag {
                    "name" => Field::Name,
                    "value" => Field::Value,
                    _ => return Err(malformed(tag_start, &format!("unknown tag `{tag}`"))),
                };
                let Some((_, body, _)) = open.as_mut() else {
                    return Err(malformed(
                        tag_start,
                        &format!("`{tag}` used outside a section"),
                    ));
                };
                body.push(Node::Field(field));
            }
        }

        if let Some((_, _, start)) = open {
            return Err(malformed(start, "unclosed section"));
        }
        if pos < source.len() {
            nodes.push(Node::Text(source[pos..].to_string()));
        }

        Ok(Template {
            name: name.to_string(),
            nodes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the model into a string.
    pub fn render(&self, model: &SymbolModel) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Section { list, body } => {
                    for item in list.items(model) {
                        render_body(body, item, &mut out);
                    }
                }
                // Rejected by `parse` outside sections.
                Node::Field(_) => {}
            }
        }
        out
    }
}

fn render_body(body: &[Node], item: &ConstItem, out: &mut String) {
    for node in body {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Field(Field::Name) => out.push_str(&item.name),
            Node::Field(Field::Value) => out.push_str(&item.value),
            Node::Section { .. } => {}
        }
    }
}

/// Resolves logical template names to parsed templates.
///
/// By default the built-in copies are used. With a directory set, the
/// template is read from `<dir>/<name>` instead and must exist there.
#[derive(Clone, Debug, Default)]
pub struct TemplateLoader {
    dir: Option<PathBuf>,
}

impl TemplateLoader {
    /// Loader for the built-in templates.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loader reading templates from `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        TemplateLoader {
            dir: Some(dir.into()),
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn load(&self, name: &str) -> Result<Template, TemplateError> {
        let Some(dir) = &self.dir else {
            debug!(name, "using built-in template");
            let source = builtin(name).ok_or_else(|| TemplateError::UnknownBuiltin {
                name: name.to_string(),
            })?;
            return Template::parse(name, source);
        };

        let path = dir.join(name);
        debug!(path = %path.display(), "loading template");
        let source = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                TemplateError::NotFound { path: path.clone() }
            } else {
                TemplateError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        Template::parse(name, &source)
    }
}

fn builtin(name: &str) -> Option<&'static str> {
    match name {
        CONSTANTS_TEMPLATE => Some(BUILTIN_CONSTANTS),
        _ => None,
    }
}
