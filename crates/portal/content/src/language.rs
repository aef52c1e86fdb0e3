//! Message language selection and `printf`-style rendering.

use portal_core::MessageArg;

/// Languages with bundled message resources.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    /// Reads the `language` config value. Unknown codes select English.
    pub fn from_config(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

/// Substitutes `%d` and `%s` with `args` in order; `%%` is a literal percent.
///
/// With no arguments the template is returned untouched. Placeholders left
/// over after the arguments run out are kept as written.
pub fn format_message(template: &str, args: &[MessageArg]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('d' | 's')) => {
                chars.next();
                match args.next() {
                    Some(MessageArg::Int(value)) => out.push_str(&value.to_string()),
                    Some(MessageArg::Text(text)) => out.push_str(text),
                    None => {
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_selects_english() {
        assert_eq!(Language::from_config("ja"), Language::Ja);
        assert_eq!(Language::from_config("JA"), Language::Ja);
        assert_eq!(Language::from_config("fr"), Language::En);
        assert_eq!(Language::from_config(""), Language::En);
        assert_eq!(Language::from_config(" ja"), Language::En);
    }

    #[test]
    fn substitutes_in_order() {
        let text = format_message(
            "Within %d blocks of spawn (world: %s)",
            &[MessageArg::Int(100), MessageArg::Text("world".into())],
        );
        assert_eq!(text, "Within 100 blocks of spawn (world: world)");
    }

    #[test]
    fn escapes_and_leftovers() {
        assert_eq!(
            format_message("%d%% of %s", &[MessageArg::Int(5)]),
            "5% of %s"
        );
        assert_eq!(format_message("100%", &[MessageArg::Int(1)]), "100%");
    }

    #[test]
    fn no_args_leaves_template_alone() {
        assert_eq!(format_message("50%% off %d", &[]), "50%% off %d");
    }
}
