/*!
format.rs

Formatting utilities for human output (banner, help columns, status lines).

Goals:
  - Keep style decisions in one place (NO_COLOR / NO_EMOJI env, --no-color flag).
  - Return formatted strings; callers decide where to write them.
  - Degrade to plain text when ANSI is disabled.

Public API Summary:
  - StyleOptions::detect(no_color) / StyleOptions::plain()
  - color(role, text, &StyleOptions) -> String
  - emoji(tag, &StyleOptions) -> &'static str
  - banner(&StyleOptions) -> String
  - pad_right(text, width) -> String
*/

use std::borrow::Cow;

/* -------------------------------------------------------------------------- */
/* Style Options                                                              */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub use_emoji: bool,
}

impl StyleOptions {
    /// `force_plain` comes from `--no-color` and disables emoji as well.
    pub fn detect(force_plain: bool) -> Self {
        let no_color = force_plain || std::env::var_os("NO_COLOR").is_some();
        let no_emoji = force_plain || std::env::var_os("NO_EMOJI").is_some();
        StyleOptions {
            use_color: !no_color,
            use_emoji: !no_emoji,
        }
    }

    pub fn plain() -> Self {
        StyleOptions {
            use_color: false,
            use_emoji: false,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Color / Emoji                                                              */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Success,
    Error,
    Dim,
    Bold,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Primary => "38;5;45",    // cyan-ish
        Role::Secondary => "38;5;250", // gray
        Role::Accent => "38;5;213",    // magenta/pink
        Role::Success => "38;5;82",    // green
        Role::Error => "38;5;196",     // red
        Role::Dim => "2",
        Role::Bold => "1",
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

pub fn emoji(tag: &str, style: &StyleOptions) -> &'static str {
    if !style.use_emoji {
        return "";
    }
    match tag {
        "error" => "✖",
        "spark" => "✨",
        "folder" => "📁",
        "file" => "📄",
        "wave" => "👋",
        _ => "",
    }
}

/// Emoji followed by a space, or nothing when emoji are off.
pub fn emoji_prefix(tag: &str, style: &StyleOptions) -> String {
    let e = emoji(tag, style);
    if e.is_empty() {
        String::new()
    } else {
        format!("{e} ")
    }
}

/* -------------------------------------------------------------------------- */
/* Banner                                                                     */
/* -------------------------------------------------------------------------- */

const BANNER_ART: &str = r"
██╗   ██╗██╗████████╗██████╗  ██████╗ ███╗   ██╗
██║   ██║██║╚══██╔══╝██╔══██╗██╔═══██╗████╗  ██║
██║   ██║██║   ██║   ██████╔╝██║   ██║██╔██╗ ██║
╚██╗ ██╔╝██║   ██║   ██╔══██╗██║   ██║██║╚██╗██║
 ╚████╔╝ ██║   ██║   ██║  ██║╚██████╔╝██║ ╚████║
  ╚═══╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═══╝";

const TAGLINE: &str = "          A powerful command line interface";

pub fn banner(style: &StyleOptions) -> String {
    format!(
        "{}\n\n{}\n",
        color(Role::Primary, BANNER_ART, style),
        color(Role::Secondary, TAGLINE, style)
    )
}

/* -------------------------------------------------------------------------- */
/* Text Helpers                                                                */
/* -------------------------------------------------------------------------- */

/// Pad `s` with spaces to `width` visible columns (ANSI codes ignored).
/// Longer strings are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let len = display_width(s);
    if len >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - len))
}

pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    // scans for ESC '[' ... letter
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for n in chars.by_ref() {
                if n.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        buf.push(c);
    }
    Cow::Owned(buf)
}

fn display_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/* -------------------------------------------------------------------------- */
/* Tests                                                                       */
/* -------------------------------------------------------------------------- */
