use std::sync::LazyLock;

use regex::Regex;

static ANY_FOOTNOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static ALNUM_FOOTNOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[a-zA-Z0-9_ ]+\]").unwrap());
static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s\-']").unwrap());

/// Which bracketed reference markers get stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footnotes {
    /// Anything between brackets: `[1]`, `[note 2]`, `[†]`.
    Any,
    /// Only word characters and spaces: `[a]`, `[O 1]`. `[†]` survives step one
    /// and is reduced to whitespace by the punctuation pass instead.
    Alphanumeric,
}

/// Strip footnote markers and punctuation, then collapse whitespace.
///
/// The output only contains ASCII letters, digits, single spaces, `-` and `'`.
pub fn normalize(text: &str, footnotes: Footnotes) -> String {
    let re = match footnotes {
        Footnotes::Any => &*ANY_FOOTNOTE_RE,
        Footnotes::Alphanumeric => &*ALNUM_FOOTNOTE_RE,
    };
    let text = re.replace_all(text, "");
    let text = PUNCT_RE.replace_all(&text, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: [Footnotes; 2] = [Footnotes::Any, Footnotes::Alphanumeric];

    fn allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '\''
    }

    #[test]
    fn strips_simple_footnotes() {
        for style in STYLES {
            assert_eq!(normalize("Lambeau Field[a]", style), "Lambeau Field");
            assert_eq!(normalize("Soldier Field[O 1]", style), "Soldier Field");
        }
    }

    #[test]
    fn any_style_strips_symbol_footnotes() {
        assert_eq!(normalize("Citi Field[†]", Footnotes::Any), "Citi Field");
        assert_eq!(normalize("Oracle Park[note-3]", Footnotes::Any), "Oracle Park");
        assert_eq!(normalize("Coors Field[]", Footnotes::Any), "Coors Field");
    }

    #[test]
    fn alphanumeric_style_keeps_marker_text_with_symbols() {
        // The brackets are not matched, so the inner text survives as words.
        assert_eq!(
            normalize("Oracle Park[note-3]", Footnotes::Alphanumeric),
            "Oracle Park note-3"
        );
        assert_eq!(normalize("Citi Field[†]", Footnotes::Alphanumeric), "Citi Field");
        assert_eq!(normalize("Coors Field[]", Footnotes::Alphanumeric), "Coors Field");
    }

    #[test]
    fn punctuation_becomes_space() {
        assert_eq!(
            normalize("Boston, Massachusetts", Footnotes::Any),
            "Boston Massachusetts"
        );
        assert_eq!(
            normalize("St. Louis (Missouri)", Footnotes::Alphanumeric),
            "St Louis Missouri"
        );
        assert_eq!(normalize("Levi's Stadium", Footnotes::Any), "Levi's Stadium");
        assert_eq!(
            normalize("Winston-Salem, N.C.", Footnotes::Any),
            "Winston-Salem N C"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  Arrowhead \t\n Stadium  ", Footnotes::Any), "Arrowhead Stadium");
        assert_eq!(normalize("", Footnotes::Any), "");
        assert_eq!(normalize("[1]", Footnotes::Any), "");
    }

    #[test]
    fn non_ascii_letters_are_replaced() {
        assert_eq!(normalize("Estadio Banorte–Azteca", Footnotes::Any), "Estadio Banorte Azteca");
        assert_eq!(normalize("Montréal", Footnotes::Any), "Montr al");
    }

    #[test]
    fn idempotent_and_restricted_alphabet() {
        let samples = [
            "Fenway Park[13]",
            "Wrigley Field[a][b]",
            "[[a]]",
            "Yankee Stadium  (2009–present)",
            "Dignity Health Sports Park[O 1]†",
            "Paradise, Nevada[c]",
            "Q2 Stadium\u{a0}[12]",
            "\"Big House\"",
            "São Paulo",
        ];
        for style in STYLES {
            for s in samples {
                let once = normalize(s, style);
                assert_eq!(normalize(&once, style), once, "not idempotent for {:?}", s);
                assert!(once.chars().all(allowed), "bad char in {:?}", once);
                assert_eq!(once.trim(), once);
                assert!(!once.contains("  "));
            }
        }
    }
}
