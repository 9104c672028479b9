// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the folio CLI: boxed sections and result rows.
//!
//! Colors come from a palette picked once per process. `FOLIO_THEME`
//! ("dark" / "light") wins, then a light `COLORFGBG` background, then dark.
//! Nothing is colored under `NO_COLOR` or when stdout is not a terminal.

use folio_search::{Field, MatchResult};
use std::sync::OnceLock;

/// Inner width of a section box.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";

/// What a span of text means. Each palette maps roles to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Muted,
    Title,
    Tags,
    Description,
    Good,
    Fair,
    Poor,
}

/// Extra SGR attribute applied before the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    Dim,
}

type Rgb = (u8, u8, u8);

struct Palette {
    heading: Rgb,
    muted: Rgb,
    title: Rgb,
    tags: Rgb,
    description: Rgb,
    good: Rgb,
    fair: Rgb,
    poor: Rgb,
}

// OneDark
const DARK: Palette = Palette {
    heading: (86, 182, 194),
    muted: (92, 99, 112),
    title: (152, 195, 121),
    tags: (198, 120, 221),
    description: (97, 175, 239),
    good: (152, 195, 121),
    fair: (229, 192, 123),
    poor: (224, 108, 117),
};

// One Light
const LIGHT: Palette = Palette {
    heading: (1, 132, 188),
    muted: (160, 161, 167),
    title: (80, 161, 79),
    tags: (166, 38, 164),
    description: (64, 120, 242),
    good: (80, 161, 79),
    fair: (193, 132, 1),
    poor: (228, 86, 73),
};

impl Palette {
    fn get(&self, role: Role) -> Rgb {
        match role {
            Role::Heading => self.heading,
            Role::Muted => self.muted,
            Role::Title => self.title,
            Role::Tags => self.tags,
            Role::Description => self.description,
            Role::Good => self.good,
            Role::Fair => self.fair,
            Role::Poor => self.poor,
        }
    }
}

fn light_background(theme: Option<&str>, colorfgbg: Option<&str>) -> bool {
    match theme.map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return true,
        Some("dark" | "d") => return false,
        _ => {}
    }
    // "fg;bg" (sometimes "fg;default;bg"); 7 and 9-15 are light backgrounds
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg >= 9)
}

fn palette() -> &'static Palette {
    static LIGHT_BG: OnceLock<bool> = OnceLock::new();
    let light = *LIGHT_BG.get_or_init(|| {
        light_background(
            std::env::var("FOLIO_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    });
    if light {
        &LIGHT
    } else {
        &DARK
    }
}

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn escape(role: Role, emphasis: Emphasis) -> String {
    let (r, g, b) = palette().get(role);
    let attr = match emphasis {
        Emphasis::Plain => "",
        Emphasis::Bold => "\x1b[1m",
        Emphasis::Dim => "\x1b[2m",
    };
    format!("{}\x1b[38;2;{};{};{}m", attr, r, g, b)
}

/// Color `text` for its role, or return it unchanged when colors are off.
pub fn paint(role: Role, emphasis: Emphasis, text: &str) -> String {
    if colors_enabled() {
        format!("{}{}{}", escape(role, emphasis), text, RESET)
    } else {
        text.to_string()
    }
}

/// Characters a terminal shows, ignoring SGR escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

fn frame(piece: &str) -> String {
    paint(Role::Muted, Emphasis::Plain, piece)
}

/// `┌─ LABEL ─────┐`
pub fn open_section(label: &str) {
    let label = format!("─ {} ", paint(Role::Heading, Emphasis::Bold, label));
    let fill = BOX_WIDTH.saturating_sub(display_width(&label));
    println!("{}{}{}", frame("┌"), label, frame(&format!("{}┐", "─".repeat(fill))));
}

/// `│ content     │`, padded to the box width.
pub fn line(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(display_width(content));
    println!("{}{}{}{}", frame("│"), content, " ".repeat(pad), frame("│"));
}

/// `└─────────────┘`
pub fn close_section() {
    println!("{}", frame(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Cut text to `max` visible characters, with an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn score_role(score: f64) -> Role {
    if score < 0.3 {
        Role::Good
    } else if score < 0.6 {
        Role::Fair
    } else {
        Role::Poor
    }
}

fn field_role(field: Field) -> Role {
    match field {
        Field::Title => Role::Title,
        Field::Tags => Role::Tags,
        Field::Description => Role::Description,
    }
}

/// One result line: rank, score, matched field, title, url.
pub fn result_row(rank: usize, result: &MatchResult) -> String {
    let field = result.matched_field;
    format!(
        " {:>2}. {}  {}  {}  {}",
        rank,
        paint(score_role(result.score), Emphasis::Plain, &format!("{:>6.3}", result.score)),
        paint(field_role(field), Emphasis::Plain, &format!("{:<11}", field.to_string())),
        paint(Role::Heading, Emphasis::Bold, &truncate(&result.record.title, 28)),
        paint(Role::Muted, Emphasis::Dim, &truncate(&result.record.url, 20)),
    )
}
