//! Code generation from a grid configuration and its committed areas.
//!
//! Two target syntaxes are supported:
//! * `Syntax::Tailwind` (primary): one container `div` with utility classes
//!   and one child per area (`tailwind::generate`).
//! * `Syntax::Css` (secondary): a stylesheet with one rule per area plus the
//!   matching bare markup (`css::generate`).
//!
//! Both generators are pure and total: identical inputs always produce
//! byte-identical text, and areas are emitted in registry order. Areas lying
//! outside the current grid are emitted unchanged.
//!
//! The two syntaxes read different gap fields (Tailwind uses the column gap,
//! CSS uses the row gap). Existing exports depend on that, so it stays.

use core_grid::{AreaRegistry, GridConfiguration};
use serde::Deserialize;
use std::fmt;

pub mod css;
pub mod tailwind;

pub use css::CssOutput;

/// Which generated text the code panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    #[default]
    Tailwind,
    Css,
}

impl Syntax {
    pub fn toggle(self) -> Self {
        match self {
            Syntax::Tailwind => Syntax::Css,
            Syntax::Css => Syntax::Tailwind,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Syntax::Tailwind => "Tailwind",
            Syntax::Css => "CSS",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Syntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tailwind" | "tw" => Ok(Syntax::Tailwind),
            "css" | "html" => Ok(Syntax::Css),
            other => Err(format!("unknown syntax `{other}` (expected tailwind or css)")),
        }
    }
}

/// Output of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedCode {
    Tailwind(String),
    Css(CssOutput),
}

impl GeneratedCode {
    /// Exact text handed to the clipboard: the Tailwind markup alone, or the
    /// stylesheet and markup separated by a blank line.
    pub fn clipboard_text(&self) -> String {
        match self {
            GeneratedCode::Tailwind(markup) => markup.clone(),
            GeneratedCode::Css(out) => format!("{}\n\n{}", out.stylesheet, out.markup),
        }
    }

    /// Lines shown in the code panel (same content as `clipboard_text`).
    pub fn display_lines(&self) -> Vec<String> {
        self.clipboard_text().lines().map(str::to_owned).collect()
    }

    pub fn syntax(&self) -> Syntax {
        match self {
            GeneratedCode::Tailwind(_) => Syntax::Tailwind,
            GeneratedCode::Css(_) => Syntax::Css,
        }
    }
}

/// Run the generator for `syntax`.
pub fn generate(syntax: Syntax, config: &GridConfiguration, areas: &AreaRegistry) -> GeneratedCode {
    tracing::trace!(target: "codegen", %syntax, areas = areas.len(), "generate");
    match syntax {
        Syntax::Tailwind => GeneratedCode::Tailwind(tailwind::generate(config, areas)),
        Syntax::Css => GeneratedCode::Css(css::generate(config, areas)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grid::{AreaRect, CellPos};

    #[test]
    fn syntax_parses_and_toggles() {
        assert_eq!("Tailwind".parse::<Syntax>(), Ok(Syntax::Tailwind));
        assert_eq!("css".parse::<Syntax>(), Ok(Syntax::Css));
        assert!("sass".parse::<Syntax>().is_err());
        assert_eq!(Syntax::Tailwind.toggle(), Syntax::Css);
        assert_eq!(Syntax::Css.toggle(), Syntax::Tailwind);
    }

    #[test]
    fn css_clipboard_text_joins_with_blank_line() {
        let cfg = GridConfiguration::default();
        let mut reg = AreaRegistry::new();
        reg.commit(AreaRect::spanning(CellPos::new(1, 1), CellPos::new(1, 1)));
        let code = generate(Syntax::Css, &cfg, &reg);
        let GeneratedCode::Css(out) = &code else {
            panic!("expected css output");
        };
        let text = code.clipboard_text();
        assert!(text.starts_with(&out.stylesheet));
        assert!(text.ends_with(&out.markup));
        assert_eq!(text.len(), out.stylesheet.len() + 2 + out.markup.len());
        assert!(text.contains("}\n\n<div class=\"grid-container\">"));
    }

    #[test]
    fn display_lines_match_clipboard_text() {
        let cfg = GridConfiguration::default();
        let reg = AreaRegistry::new();
        let code = generate(Syntax::Tailwind, &cfg, &reg);
        assert_eq!(code.display_lines().join("\n"), code.clipboard_text());
        assert_eq!(code.syntax(), Syntax::Tailwind);
    }
}
