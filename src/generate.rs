use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::suffix::{RandomSuffix, SuffixSource};

/// Maximum length of a Kubernetes object name (RFC 1123 subdomain).
pub const MAX_OBJECT_NAME_LENGTH: usize = 253;

/// Maximum length of a DNS label, the limit most namespaced resource names
/// are held to.
pub const MAX_LABEL_NAME_LENGTH: usize = 63;

/// Annotation on the owning object that pins the suffix to a fixed value
/// instead of a random token. Used by fixture-driven test environments where
/// generated names must be predictable.
pub const NAME_SUFFIX_ANNOTATION: &str = "safe-resource-name/name-suffix";

const SEPARATOR_LENGTH: usize = 1;

/// Builds length-bounded names by truncating an arbitrary base name and
/// appending a suffix.
///
/// The suffix comes from the override when one is set, otherwise from the
/// injected [`SuffixSource`]. Generation is stateless; pair it with a
/// [`SafeNameCache`](crate::cache::SafeNameCache) when repeated requests for
/// the same logical object must keep returning the same name.
#[derive(Clone, Debug)]
pub struct SafeNameGenerator<S = RandomSuffix> {
    suffix_source: S,
    suffix_override: Option<String>,
}

impl SafeNameGenerator<RandomSuffix> {
    pub fn new() -> Self {
        Self {
            suffix_source: RandomSuffix,
            suffix_override: None,
        }
    }

    /// Builds a generator honoring a [`NAME_SUFFIX_ANNOTATION`] override on
    /// the owning object's annotations. A missing or empty annotation leaves
    /// suffixes random.
    pub fn from_annotations(annotations: &BTreeMap<String, String>) -> Self {
        let suffix_override = annotations
            .get(NAME_SUFFIX_ANNOTATION)
            .filter(|suffix| !suffix.is_empty())
            .cloned();
        Self {
            suffix_source: RandomSuffix,
            suffix_override,
        }
    }
}

impl Default for SafeNameGenerator<RandomSuffix> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SuffixSource> SafeNameGenerator<S> {
    pub fn with_suffix_source(suffix_source: S) -> Self {
        Self {
            suffix_source,
            suffix_override: None,
        }
    }

    /// Pins every generated name to the given suffix.
    pub fn suffix_override(mut self, suffix: impl Into<String>) -> Self {
        self.suffix_override = Some(suffix.into());
        self
    }

    /// Generates a safe name for `base` in `namespace`, at most `max_length`
    /// characters long.
    pub fn generate(&self, base: &str, namespace: &str, max_length: usize) -> String {
        match self.suffix_override.as_deref() {
            Some(suffix) => new_safe_name(base, namespace, suffix, max_length),
            None => new_safe_name(base, namespace, &self.suffix_source.suffix(), max_length),
        }
    }
}

/// Truncates `base` so that `fragment + "-" + suffix` fits in `max_length`
/// characters once `namespace` is accounted for, and appends the suffix.
///
/// Lengths are counted in Unicode scalar values, not bytes. The truncated
/// fragment never ends in a character outside `[A-Za-z0-9-]`, so the result
/// stays a valid name prefix even when the cut lands inside a dotted version
/// string. If the budget is too small to hold any of `base` the result
/// degrades to `"-" + suffix` rather than failing; callers are expected to
/// pass a limit consistent with what the target resource type allows.
pub fn new_safe_name(base: &str, namespace: &str, suffix: &str, max_length: usize) -> String {
    let overhead = suffix.chars().count() + namespace.chars().count() + SEPARATOR_LENGTH;
    let budget = max_length.saturating_sub(overhead);
    if budget == 0 {
        warn!(
            base,
            namespace, max_length, "name budget exhausted, emitting bare suffix"
        );
    }

    let mut fragment: String = if base.chars().count() > budget {
        base.chars().take(budget).collect()
    } else {
        base.to_owned()
    };

    // The character before the separator must stay inside the DNS grammar.
    while fragment
        .chars()
        .next_back()
        .is_some_and(|c| !is_name_char(c))
    {
        fragment.pop();
    }

    let safe_name = format!("{fragment}-{suffix}");
    debug!(safe_name = %safe_name, namespace, budget, "generated safe name");
    safe_name
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix::{FixedSuffix, RANDOM_SUFFIX_LENGTH};

    const LONG_POLICY_NAME: &str = "cnfdf18-new-common-cnfdf18-looooong-subscriptions-policy";

    #[test]
    fn truncates_long_base_to_budget() {
        let safe = new_safe_name(LONG_POLICY_NAME, "ztp-install", "kuttl", MAX_LABEL_NAME_LENGTH);
        // budget = 63 - 5 - 11 - 1 = 46 characters of base
        assert_eq!(safe, "cnfdf18-new-common-cnfdf18-looooong-subscripti-kuttl");
        assert_eq!(safe.chars().count(), 52);
    }

    #[test]
    fn short_base_is_kept_whole() {
        let base = format!("{LONG_POLICY_NAME}-placement");
        let safe = new_safe_name(&base, "", "kuttl", MAX_OBJECT_NAME_LENGTH);
        assert_eq!(safe, format!("{base}-kuttl"));
        assert_eq!(safe.chars().count(), base.chars().count() + 1 + 5);
    }

    #[test]
    fn cut_landing_on_dash_keeps_the_dash() {
        let base = format!("{LONG_POLICY_NAME}-config");
        let safe = new_safe_name(&base, "", "kuttl", MAX_LABEL_NAME_LENGTH);
        // budget = 57, which lands exactly on the dash after "policy"
        assert_eq!(safe, format!("{LONG_POLICY_NAME}--kuttl"));
        assert_eq!(safe.chars().count(), MAX_LABEL_NAME_LENGTH);
    }

    #[test]
    fn trailing_dot_is_stripped_before_the_separator() {
        let base = "cgu-sriov-cloudransno-site9-spree-lb-du-cvslcm-4.14.0-rc.4-config";
        let safe = new_safe_name(base, "", "kuttl", MAX_LABEL_NAME_LENGTH);
        // budget = 57 cuts inside "rc.4", leaving a trailing dot to strip
        assert_eq!(
            safe,
            "cgu-sriov-cloudransno-site9-spree-lb-du-cvslcm-4.14.0-rc-kuttl"
        );
        assert_eq!(safe.chars().count(), 62);
    }

    #[test]
    fn explicit_long_suffix_shrinks_the_budget() {
        let base = "cgu-sriov-cloudransno-site9-spree-lb-du-cvslcm-4.14.0-rc.4";
        let safe = new_safe_name(base, "", "12345678", MAX_LABEL_NAME_LENGTH);
        // budget = 54 cuts right after "4.14.0-", keeping the dash
        assert_eq!(
            safe,
            "cgu-sriov-cloudransno-site9-spree-lb-du-cvslcm-4.14.0--12345678"
        );
        assert_eq!(safe.chars().count(), MAX_LABEL_NAME_LENGTH);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 12 characters, 16 bytes
        let base = "ünïcödé-náme";
        let safe = new_safe_name(base, "", "kuttl", 10);
        // budget = 4 keeps "ünïc"; 'c' is a legal boundary
        assert_eq!(safe, "ünïc-kuttl");
        assert_eq!(safe.chars().count(), 10);
    }

    #[test]
    fn non_ascii_boundary_is_stripped() {
        let safe = new_safe_name("abcé-name", "", "kuttl", 10);
        // budget = 4 ends on 'é', which may not precede the separator
        assert_eq!(safe, "abc-kuttl");
    }

    #[test]
    fn base_of_only_disallowed_characters_degrades_to_suffix() {
        let safe = new_safe_name("....", "", "kuttl", MAX_LABEL_NAME_LENGTH);
        assert_eq!(safe, "-kuttl");
    }

    #[test]
    fn exhausted_budget_degrades_to_suffix() {
        let safe = new_safe_name("anything", "very-long-namespace", "kuttl", 10);
        assert_eq!(safe, "-kuttl");
    }

    #[test]
    fn generated_suffix_obeys_the_length_bound() {
        let generator = SafeNameGenerator::new();
        let safe = generator.generate(LONG_POLICY_NAME, "ztp-install", MAX_LABEL_NAME_LENGTH);
        assert!(safe.chars().count() <= MAX_LABEL_NAME_LENGTH);
        let (fragment, suffix) = safe.rsplit_once('-').unwrap();
        assert_eq!(suffix.chars().count(), RANDOM_SUFFIX_LENGTH);
        assert!(LONG_POLICY_NAME.starts_with(fragment));
    }

    #[test]
    fn suffix_override_wins_over_the_source() {
        let generator =
            SafeNameGenerator::with_suffix_source(FixedSuffix("nope".into())).suffix_override("yes");
        let safe = generator.generate("short-name", "", MAX_LABEL_NAME_LENGTH);
        assert_eq!(safe, "short-name-yes");
    }

    #[test]
    fn annotation_override_pins_the_suffix() {
        let mut annotations = BTreeMap::new();
        annotations.insert(NAME_SUFFIX_ANNOTATION.to_string(), "kuttl".to_string());
        let generator = SafeNameGenerator::from_annotations(&annotations);
        assert_eq!(
            generator.generate("short-name", "", MAX_LABEL_NAME_LENGTH),
            "short-name-kuttl"
        );
    }

    #[test]
    fn empty_annotation_means_random_suffix() {
        let mut annotations = BTreeMap::new();
        annotations.insert(NAME_SUFFIX_ANNOTATION.to_string(), String::new());
        let generator = SafeNameGenerator::from_annotations(&annotations);
        let safe = generator.generate("short-name", "", MAX_LABEL_NAME_LENGTH);
        let (fragment, suffix) = safe.rsplit_once('-').unwrap();
        assert_eq!(fragment, "short-name");
        assert_eq!(suffix.chars().count(), RANDOM_SUFFIX_LENGTH);
    }
}
