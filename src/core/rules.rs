//! The hand-curated substitution rules.
//!
//! Each rule targets one known corruption left behind by a faulty automated
//! edit that injected whitespace into compound tokens: template-string
//! interpolation, optional chaining, hyphenated attribute identifiers, and
//! HTML tag/attribute syntax. The list is ordered and the order is part of
//! the contract: later rules operate on the text earlier rules leave behind.
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// A single pattern/replacement pair, applied globally and unconditionally
/// within the pipeline.
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("invalid curated pattern"),
            replacement,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of occurrences the rule would rewrite.
    pub fn match_count(&self, input: &str) -> usize {
        self.pattern.find_iter(input).count()
    }

    /// Rewrite every occurrence. Borrows the input unchanged when nothing
    /// matches.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, self.replacement)
    }
}

/// The curated rule list, in application order.
///
/// The general interpolation rule runs first and claims any span whose
/// spacing it matches; the identifier-specific template-literal rules
/// (`roster`, `bench-table`) are narrower fallbacks kept for whitespace
/// variants the general rule leaves alone. The rules are curated for one
/// known corruption, not for general robustness, and are intentionally not
/// generalized beyond the identifiers that corruption hit.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // $ { expr } -> ${expr}
        Rule::new(
            "interpolation-spacing",
            r"\$\s+\{\s+([^}]+?)\s+\}",
            "$${${1}}",
        ),
        // ? . -> ?.
        Rule::new("optional-chaining", r"\?\s+\.", "?."),
        // data - player -> data-player
        Rule::new("data-player-attribute", r"data\s+-\s+player", "data-player"),
        // ` roster - $ { team } ` -> `roster-${team}`
        Rule::new(
            "roster-template-literal",
            r"`\s+roster\s+-\s+\$\s+\{\s+team\s+\}\s+`",
            "`roster-$${team}`",
        ),
        // ` bench-table - $ { team } ` -> `bench-table-${team}`
        Rule::new(
            "bench-table-template-literal",
            r"`\s+bench-table\s+-\s+\$\s+\{\s+team\s+\}\s+`",
            "`bench-table-$${team}`",
        ),
        // < td class = "x" > -> <td class="x">
        Rule::new(
            "td-open-tag",
            r#"<\s+td\s+class\s+=\s+"([^"]+)"\s+>"#,
            r#"<td class="${1}">"#,
        ),
        Rule::new("td-close-tag", r"<\s+/td>\s+<", "</td><"),
        // < option value = "x" > -> <option value="x">
        Rule::new(
            "option-open-tag",
            r#"<\s+option\s+value\s+=\s+"([^"]*)"\s+>"#,
            r#"<option value="${1}">"#,
        ),
        Rule::new("option-close-tag", r"<\s+/option>\s+<", "</option><"),
        // < select class = "x" ... -> <select class="x" ...
        Rule::new(
            "select-open-tag",
            r#"<\s+select\s+class\s+=\s+"([^"]+)"\s+"#,
            r#"<select class="${1}" "#,
        ),
        Rule::new("select-close-tag", r"<\s+/select>\s+<", "</select><"),
    ]
});
