//! Numbering configuration.
//!
//! Each tree depth has a numeral style and a format template; the template
//! carries one `#` marker that the styled numeral replaces. Depths beyond the
//! last configured level reuse the last one.

use serde::{Deserialize, Serialize};

/// How a single number is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingStyle {
    #[default]
    Decimal,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

impl NumberingStyle {
    pub fn format(&self, n: u32) -> String {
        match self {
            NumberingStyle::Decimal => n.to_string(),
            NumberingStyle::LowerAlpha => to_alpha(n),
            NumberingStyle::UpperAlpha => to_alpha(n).to_ascii_uppercase(),
            NumberingStyle::LowerRoman => to_roman(n),
            NumberingStyle::UpperRoman => to_roman(n).to_ascii_uppercase(),
        }
    }
}

/// Bijective base-26: 1 -> a, 26 -> z, 27 -> aa.
fn to_alpha(mut n: u32) -> String {
    let mut out = String::new();
    while n > 0 {
        n -= 1;
        out.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    out.chars().rev().collect()
}

/// Subtractive roman numerals, valid for 1..=3999; anything outside that
/// range falls back to decimal.
fn to_roman(n: u32) -> String {
    const TABLE: &[(u32, &str)] = &[
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];

    if n == 0 || n > 3999 {
        return n.to_string();
    }

    let mut remaining = n;
    let mut out = String::new();
    for (value, numeral) in TABLE {
        while remaining >= *value {
            out.push_str(numeral);
            remaining -= value;
        }
    }
    out
}

/// Style and format template for one depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub style: NumberingStyle,
    /// Template with a `#` marker, e.g. `"(#)"` renders 2 as `(2)`.
    pub format: String,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            style: NumberingStyle::Decimal,
            format: "#".to_string(),
        }
    }
}

impl LevelConfig {
    pub fn with_style(style: NumberingStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn render(&self, n: u32) -> String {
        self.format.replace('#', &self.style.format(n))
    }
}

/// Per-document numbering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingConfig {
    /// Index 0 configures depth 1.
    pub levels: Vec<LevelConfig>,
    /// Joins the numbers of a full index. Default `"."`.
    pub separator: String,
    /// Keep only the innermost number of a full index.
    pub innermost_only: bool,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            levels: vec![LevelConfig::default()],
            separator: ".".to_string(),
            innermost_only: false,
        }
    }
}

impl NumberingConfig {
    /// Render the number for a paragraph at the given 1-based depth.
    pub fn render(&self, depth: u32, n: u32) -> String {
        let idx = depth.saturating_sub(1) as usize;
        match self.levels.get(idx).or_else(|| self.levels.last()) {
            Some(level) => level.render(n),
            None => n.to_string(),
        }
    }

    /// Configuration slot for a depth, growing the level table with defaults
    /// as needed.
    pub fn level_mut(&mut self, depth: u32) -> &mut LevelConfig {
        let idx = depth.max(1) as usize - 1;
        while self.levels.len() <= idx {
            self.levels.push(LevelConfig::default());
        }
        &mut self.levels[idx]
    }
}
