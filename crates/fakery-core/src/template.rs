//! `{{placeholder}}` templates resolved against a registry of expanders.
//!
//! A template is split once into literal and placeholder segments. Resolution
//! walks the registry in declaration order and, for each placeholder name it
//! finds in the template, calls the expander once and substitutes the result
//! at the first occurrence of that token only. Substituted text is never
//! scanned again, and tokens without an expander are written back verbatim.
//!
//! # Example
//!
//! ```rust
//! use fakery_core::template::{Registry, Template};
//!
//! struct Ctx { calls: usize }
//!
//! let registry = Registry::<Ctx, std::convert::Infallible>::new()
//!     .with("greeting", |_| Ok("Hello".to_string()))
//!     .with("name", |ctx| {
//!         ctx.calls += 1;
//!         Ok("World".to_string())
//!     });
//!
//! let mut ctx = Ctx { calls: 0 };
//! let template = Template::parse("{{greeting}}, {{name}}! {{unknown}}");
//! let out = template.resolve(&registry, &mut ctx).unwrap();
//! assert_eq!(out, "Hello, World! {{unknown}}");
//! assert_eq!(ctx.calls, 1);
//! ```

use std::collections::HashSet;
use std::fmt;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Template string split into literal and placeholder segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Split `source` into segments. An unterminated `{{` or an empty or
    /// brace-containing name stays literal text.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };
            let name = &after_open[..end];

            if name.is_empty() || name.contains('{') || name.contains('}') {
                // Step past one brace so `{{{a}}` still finds `{{a}}`
                literal.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
                continue;
            }

            literal.push_str(&rest[..start]);
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name.to_string()));
            rest = &after_open[end + CLOSE.len()..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in template order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the template contains `{{name}}`.
    pub fn contains(&self, name: &str) -> bool {
        self.placeholders().any(|p| p == name)
    }

    /// Expand the template against `registry`, threading `ctx` through every
    /// expander call.
    pub fn resolve<C, E>(&self, registry: &Registry<C, E>, ctx: &mut C) -> Result<String, E> {
        let mut expansions: Vec<Option<String>> = vec![None; self.segments.len()];
        let mut suppressed: HashSet<&str> = HashSet::new();

        for (name, expander) in &registry.entries {
            if suppressed.contains(name) {
                continue;
            }
            let Some(idx) = self
                .segments
                .iter()
                .position(|s| matches!(s, Segment::Placeholder(p) if p == name))
            else {
                continue;
            };

            for group in registry.exclusive.iter().filter(|g| g.contains(name)) {
                suppressed.extend(group.iter().copied().filter(|other| other != name));
            }

            expansions[idx] = Some(expander(ctx)?);
        }

        let mut out = String::new();
        for (segment, expansion) in self.segments.iter().zip(expansions) {
            match (segment, expansion) {
                (_, Some(value)) => out.push_str(&value),
                (Segment::Literal(text), None) => out.push_str(text),
                (Segment::Placeholder(name), None) => {
                    out.push_str(OPEN);
                    out.push_str(name);
                    out.push_str(CLOSE);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder(name) => write!(f, "{OPEN}{name}{CLOSE}")?,
            }
        }
        Ok(())
    }
}

/// Expander invoked for one placeholder name.
pub type Expander<C, E> = fn(&mut C) -> Result<String, E>;

/// Ordered mapping from placeholder name to expander.
///
/// Declaration order is the order expanders run in, which fixes the order
/// random draws are made and keeps seeded output stable.
pub struct Registry<C, E> {
    entries: Vec<(&'static str, Expander<C, E>)>,
    exclusive: Vec<Vec<&'static str>>,
}

impl<C, E> Registry<C, E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            exclusive: Vec::new(),
        }
    }

    /// Register an expander for `{{name}}`.
    pub fn with(mut self, name: &'static str, expander: Expander<C, E>) -> Self {
        self.entries.push((name, expander));
        self
    }

    /// Declare mutually exclusive alternatives: once one of `names` is
    /// expanded, the others are left untouched.
    pub fn exclusive(mut self, names: &[&'static str]) -> Self {
        self.exclusive.push(names.to_vec());
        self
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl<C, E> Default for Registry<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> fmt::Debug for Registry<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names().collect::<Vec<_>>())
            .field("exclusive", &self.exclusive)
            .finish()
    }
}
