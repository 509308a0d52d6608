use std::sync::OnceLock;

use regex::Regex;

use super::types::ListFlavor;

/// Character class accepted as a roman-numeral enumerator.
const ROMAN: &str = "[IVXLCDM]+";

/// An enumerator or bullet that introduces a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `IV. text`
    Roman,
    /// `B. text`
    Alpha,
    /// `12. text`
    Numeric,
    /// `- text`, `– text`, `• text`
    Bullet,
    /// `text;` or `text•` with no leading marker.
    Loose,
}

impl Marker {
    /// Item markers in precedence order. The first one that matches wins, so
    /// a one-letter roman such as `I.` is never read as an alpha item.
    pub const PRECEDENCE: [Marker; 5] = [
        Marker::Roman,
        Marker::Alpha,
        Marker::Numeric,
        Marker::Bullet,
        Marker::Loose,
    ];

    pub fn flavor(self) -> ListFlavor {
        match self {
            Marker::Roman | Marker::Alpha | Marker::Numeric => ListFlavor::Ordered,
            Marker::Bullet | Marker::Loose => ListFlavor::Unordered,
        }
    }

    /// Returns the item payload if `line` (already trimmed) carries this marker.
    pub fn strip(self, line: &str) -> Option<&str> {
        match self {
            Marker::Roman => capture(roman_item(), line),
            Marker::Alpha => capture(alpha_item(), line),
            Marker::Numeric => capture(numeric_item(), line),
            Marker::Bullet => capture(bullet_item(), line),
            Marker::Loose => line
                .strip_suffix(';')
                .or_else(|| line.strip_suffix('•'))
                .map(str::trim_end),
        }
    }
}

/// Colon-terminated headings: `III. The inspector shall inspect:`.
pub struct HeadingMarker;

impl HeadingMarker {
    /// Returns the heading title if `line` (already trimmed) is a heading.
    pub fn title(line: &str) -> Option<&str> {
        capture(heading(), line)
    }
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^(?:{ROMAN}|[0-9]+)\.\s+(.+?):\s*$")).expect("Invalid heading regex")
    })
}

fn roman_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"^{ROMAN}\.\s+(.*)$")).expect("Invalid roman regex"))
}

fn alpha_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]\.\s+(.*)$").expect("Invalid alpha regex"))
}

fn numeric_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.\s+(.*)$").expect("Invalid numeric regex"))
}

fn bullet_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-–•]\s+(.*)$").expect("Invalid bullet regex"))
}
