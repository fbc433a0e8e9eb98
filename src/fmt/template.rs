//! Format strings are compiled once, when a logger is built or its format changes,
//! and rendered on every log call.
//!
//! Compilation strips the `%{color:<name>}` token, normalizes the time token to
//! `%{time}` and keeps its layout aside. What remains is a template containing only
//! `%{message}` and `%{time}` placeholders around literal text.

use super::color::ColorName;
use super::layout::{STAMP, TimeLayout};
use super::token;
use chrono::{DateTime, FixedOffset, Local};
use std::fmt;

/// Placeholder replaced by the log message.
pub const MESSAGE: &str = "%{message}";
/// Canonical time placeholder left in a compiled template.
pub const TIME: &str = "%{time}";

/// Non-fatal problems found while compiling a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatWarning {
    /// `%{color:<name>}` named something outside the palette; the line is left uncolored.
    UnknownColor(String),
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(name) => write!(f, "unknown color '{name}' ignored"),
        }
    }
}

/// Piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Message,
    Time,
}

/// Splits a compiled template on its placeholders. `%{time}` only becomes a
/// placeholder when a layout is available to render it.
fn segments(template: &str, with_time: bool) -> Vec<TemplateSegment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(MESSAGE) {
            push_literal(&mut segments, &mut literal);
            segments.push(TemplateSegment::Message);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(TIME).filter(|_| with_time) {
            push_literal(&mut segments, &mut literal);
            segments.push(TemplateSegment::Time);
            rest = after;
        } else {
            let c = rest.chars().next().unwrap_or_default();
            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    push_literal(&mut segments, &mut literal);
    segments
}

fn push_literal(segments: &mut Vec<TemplateSegment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(TemplateSegment::Literal(std::mem::take(literal)));
    }
}

/// A format string after compilation. Immutable: changing a logger's format
/// compiles a new value and swaps it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    raw: String,
    template: String,
    time_layout: String,
    layout: Option<TimeLayout>,
    color: Option<ColorName>,
    warnings: Vec<FormatWarning>,
    segments: Vec<TemplateSegment>,
}

impl CompiledFormat {
    /// Compiles a raw format string. Never fails: an empty format passes the message
    /// through unchanged, and an unknown color name is dropped with a warning.
    ///
    /// Only one color token and one time token are honored, the last well-formed
    /// occurrence of each. Other occurrences stay in the template as literal text.
    #[must_use]
    pub fn compile(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::assemble(raw, MESSAGE.to_string(), String::new(), None, Vec::new());
        }

        let mut warnings = Vec::new();

        let (color, stripped) = match token::find_color(raw) {
            Some(m) => {
                let color = match m.capture.parse::<ColorName>() {
                    Ok(color) => Some(color),
                    Err(e) => {
                        warnings.push(FormatWarning::UnknownColor(e.name().to_string()));
                        None
                    }
                };
                (color, m.splice(raw, ""))
            }
            None => (None, raw.to_string()),
        };

        let (time_layout, template) = match token::find_time(&stripped) {
            Some(m) => {
                let layout = m.capture.trim_start_matches(':');
                let layout = if layout.is_empty() { STAMP } else { layout };
                (layout.to_string(), m.splice(&stripped, TIME))
            }
            None => (String::new(), stripped),
        };

        Self::assemble(raw, template, time_layout, color, warnings)
    }

    fn assemble(
        raw: &str,
        template: String,
        time_layout: String,
        color: Option<ColorName>,
        warnings: Vec<FormatWarning>,
    ) -> Self {
        let layout = (!time_layout.is_empty()).then(|| TimeLayout::parse(&time_layout));
        let segments = segments(&template, layout.is_some());
        Self {
            raw: raw.to_string(),
            template,
            time_layout,
            layout,
            color,
            warnings,
            segments,
        }
    }

    /// The format string as the caller supplied it.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The compiled template: color token removed, time token normalized to `%{time}`.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The extracted time layout; empty when the format has no time token.
    #[must_use]
    pub fn time_layout(&self) -> &str {
        &self.time_layout
    }

    /// The selected palette color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<ColorName> {
        self.color
    }

    #[must_use]
    pub fn warnings(&self) -> &[FormatWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Whether rendering needs a timestamp.
    #[must_use]
    pub const fn uses_time(&self) -> bool {
        self.layout.is_some()
    }

    /// Substitutes `message` and the formatted time into the template.
    ///
    /// The message is inserted verbatim; placeholder-shaped text inside it is not
    /// substituted. `time` is sampled from the local clock when `None` and the
    /// template has a time placeholder. No line terminator is appended.
    #[must_use]
    pub fn render(&self, message: &str, time: Option<DateTime<FixedOffset>>) -> String {
        let stamp = self.layout.as_ref().map(|layout| {
            let time = time.unwrap_or_else(|| Local::now().fixed_offset());
            layout.format(&time)
        });

        let mut out = String::with_capacity(self.template.len() + message.len());
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(s) => out.push_str(s),
                TemplateSegment::Message => out.push_str(message),
                TemplateSegment::Time => out.push_str(stamp.as_deref().unwrap_or(TIME)),
            }
        }
        out
    }
}

impl Default for CompiledFormat {
    fn default() -> Self {
        Self::compile("")
    }
}

/// Compiles `raw`; shorthand for [`CompiledFormat::compile`].
#[must_use]
pub fn compile(raw: &str) -> CompiledFormat {
    CompiledFormat::compile(raw)
}

/// Renders an already-compiled template without a [`CompiledFormat`] at hand.
///
/// Every `%{message}` is replaced by `message`. When `time_layout` is non-empty every
/// `%{time}` is replaced by `time` (or the current local time) formatted per the
/// layout; otherwise `%{time}` is left as is.
#[must_use]
pub fn render(
    template: &str,
    time_layout: &str,
    message: &str,
    time: Option<DateTime<FixedOffset>>,
) -> String {
    let compiled = CompiledFormat::assemble(
        template,
        template.to_string(),
        time_layout.to_string(),
        None,
        Vec::new(),
    );
    compiled.render(message, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_inside_message_is_not_expanded() {
        let format = CompiledFormat::compile("<%{message}>");
        assert_eq!(format.render("%{message}", None), "<%{message}>");
    }

    #[test]
    fn time_without_layout_stays_literal() {
        assert_eq!(
            segments("%{time}|%{message}", false),
            vec![
                TemplateSegment::Literal("%{time}|".to_string()),
                TemplateSegment::Message,
            ]
        );
    }

    #[test]
    fn adjacent_placeholders_split_cleanly() {
        assert_eq!(
            segments("%{time}%{message}%{message}", true),
            vec![
                TemplateSegment::Time,
                TemplateSegment::Message,
                TemplateSegment::Message,
            ]
        );
    }
}
