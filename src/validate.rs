//! Format checks for the names this crate emits.
//!
//! Kubernetes object names must be RFC 1123 subdomains, and most namespaced
//! resources are further held to a single DNS label. Generation itself never
//! consults these; they exist for callers that want a pre-flight check on a
//! caller-supplied base and for the test suite.

use std::sync::LazyLock;

use regex::Regex;

use crate::generate::{MAX_LABEL_NAME_LENGTH, MAX_OBJECT_NAME_LENGTH};

static RFC1123_SUBDOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap()
});

static RFC1123_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap());

/// Whether `name` is a valid Kubernetes object name.
pub fn is_rfc1123_subdomain(name: &str) -> bool {
    name.chars().count() <= MAX_OBJECT_NAME_LENGTH && RFC1123_SUBDOMAIN.is_match(name)
}

/// Whether `name` is a valid DNS label.
pub fn is_rfc1123_label(name: &str) -> bool {
    name.chars().count() <= MAX_LABEL_NAME_LENGTH && RFC1123_LABEL.is_match(name)
}
