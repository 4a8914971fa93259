//! Syntax highlighting for the report view, themed from the picked colors.

use std::str::FromStr;
use std::sync::LazyLock;

use palette::Srgb;
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{
    Color, FontStyle, ScopeSelectors, StyleModifier, Theme, ThemeItem, ThemeSettings,
};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use syntect_tui::into_span;

use crate::luminance::luminance_u8;
use crate::picker::Foreground;

/// Cached syntax set - expensive to load, so we cache it globally.
pub static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Syntax highlighter whose theme puts the selected color on the reference.
pub struct Highlighter {
    theme: Theme,
}

impl Highlighter {
    /// `background` fills the view; `accent` colors keys and literals.
    pub fn new(background: Srgb<u8>, accent: Srgb<u8>) -> Self {
        Self {
            theme: build_theme(background, accent),
        }
    }

    fn setting(color: Option<Color>) -> ratatui::style::Color {
        color
            .map(|c| ratatui::style::Color::Rgb(c.r, c.g, c.b))
            .unwrap_or(ratatui::style::Color::Reset)
    }

    pub fn background_color(&self) -> ratatui::style::Color {
        Self::setting(self.theme.settings.background)
    }

    pub fn gutter_color(&self) -> ratatui::style::Color {
        Self::setting(self.theme.settings.gutter_foreground)
    }

    /// Highlight code and return ratatui Lines.
    pub fn highlight(&self, code: &str, extension: &str) -> Vec<Line<'static>> {
        let syntax = SYNTAX_SET
            .find_syntax_by_extension(extension)
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        // Newlines kept so scopes that end at line breaks close properly
        LinesWithEndings::from(code)
            .map(|line| {
                let ranges = highlighter
                    .highlight_line(line, &SYNTAX_SET)
                    .unwrap_or_default();
                let spans: Vec<Span<'static>> = ranges
                    .into_iter()
                    .filter_map(|seg| {
                        into_span(seg).ok().map(|span| {
                            let content = span.content.trim_end_matches('\n').to_string();
                            // Drop the span background so the widget background shows through
                            let mut patched = ratatui::style::Style::new();
                            if let Some(fg) = span.style.fg {
                                patched = patched.fg(fg);
                            }
                            for modifier in [
                                ratatui::style::Modifier::BOLD,
                                ratatui::style::Modifier::ITALIC,
                            ] {
                                if span.style.add_modifier.contains(modifier) {
                                    patched = patched.add_modifier(modifier);
                                }
                            }
                            Span::styled(content, patched)
                        })
                    })
                    .filter(|span| !span.content.is_empty())
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn to_syntect(c: Srgb<u8>) -> Color {
    Color {
        r: c.red,
        g: c.green,
        b: c.blue,
        a: 255,
    }
}

/// Channel-wise blend, `t = 0` gives `a`.
fn mix(a: Srgb<u8>, b: Srgb<u8>, t: f64) -> Srgb<u8> {
    let lerp = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Srgb::new(
        lerp(a.red, b.red),
        lerp(a.green, b.green),
        lerp(a.blue, b.blue),
    )
}

fn build_theme(background: Srgb<u8>, accent: Srgb<u8>) -> Theme {
    let foreground = match Foreground::for_luminance(luminance_u8(background)) {
        Foreground::White => Srgb::new(255, 255, 255),
        Foreground::Black => Srgb::new(0, 0, 0),
    };
    let muted = mix(foreground, background, 0.45);

    let settings = ThemeSettings {
        foreground: Some(to_syntect(foreground)),
        background: Some(to_syntect(background)),
        caret: Some(to_syntect(foreground)),
        gutter: Some(to_syntect(background)),
        gutter_foreground: Some(to_syntect(muted)),
        ..Default::default()
    };

    let rule = |scope: &str, color: Srgb<u8>, font_style: Option<FontStyle>| -> ThemeItem {
        ThemeItem {
            scope: ScopeSelectors::from_str(scope).unwrap_or_default(),
            style: StyleModifier {
                foreground: Some(to_syntect(color)),
                background: None,
                font_style,
            },
        }
    };

    let scopes = vec![
        rule(
            "comment, punctuation.definition.comment",
            muted,
            Some(FontStyle::ITALIC),
        ),
        rule("punctuation, keyword.operator", muted, None),
        // YAML keys carry the selected color so its legibility is visible
        rule("entity.name.tag", accent, Some(FontStyle::BOLD)),
        rule("constant, constant.numeric, constant.language", accent, None),
        rule("string", foreground, None),
    ];

    Theme {
        name: Some("lumapick".to_string()),
        author: None,
        settings,
        scopes,
    }
}
