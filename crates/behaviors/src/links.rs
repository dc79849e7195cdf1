/// Browsing-context name the external links open in.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// The two external-link flavors. They behave the same; the split exists so
/// page markup can name them separately.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Demo,
    Code,
}

impl LinkKind {
    pub const ALL: [LinkKind; 2] = [LinkKind::Demo, LinkKind::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Demo => "demo",
            LinkKind::Code => "code",
        }
    }

    /// Name of the handler installed on `window` for inline `onclick` markup.
    pub fn global_name(self) -> &'static str {
        match self {
            LinkKind::Demo => "openDemo",
            LinkKind::Code => "openCode",
        }
    }
}

/// The URL to open for a link's `href`, or `None` for the empty and `"#"`
/// placeholders.
pub fn external_url(href: Option<&str>) -> Option<&str> {
    match href {
        Some(url) if !url.is_empty() && url != "#" => Some(url),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkKind, external_url};

    #[test]
    fn placeholders_do_not_navigate() {
        assert_eq!(external_url(None), None);
        assert_eq!(external_url(Some("")), None);
        assert_eq!(external_url(Some("#")), None);
    }

    #[test]
    fn real_urls_pass_through() {
        assert_eq!(
            external_url(Some("https://github.com/someone/project")),
            Some("https://github.com/someone/project")
        );
        assert_eq!(external_url(Some("demo/index.html")), Some("demo/index.html"));
    }

    #[test]
    fn kinds_have_distinct_globals() {
        assert_eq!(LinkKind::Demo.global_name(), "openDemo");
        assert_eq!(LinkKind::Code.global_name(), "openCode");
        assert_eq!(LinkKind::ALL.map(LinkKind::as_str), ["demo", "code"]);
    }
}
