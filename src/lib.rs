//! Length-bounded, cache-stable resource names for Kubernetes controllers.
//!
//! Controllers routinely assemble child resource names out of parts they do
//! not control (policy names, cluster names, version strings). The result has
//! to fit the target resource type's length limit, has to keep matching the
//! DNS grammar after truncation, and has to stay stable across reconcile
//! loops even though a random suffix keeps it unique. This crate does exactly
//! that and nothing else:
//!
//! * [`new_safe_name`] / [`SafeNameGenerator`] truncate a base name to the
//!   character budget left after reserving room for the namespace, a
//!   separator and a suffix, stripping any trailing character outside
//!   `[A-Za-z0-9-]` so the cut never leaves a dangling dot.
//! * [`SafeNameCache`] remembers the name generated for each
//!   `namespace/name` pair, so repeated reconciles of the same owner keep
//!   using the same child name. It serializes as a plain string map, ready to
//!   embed in a status subresource.
//!
//! ```
//! use safe_resource_name::{SafeNameCache, SafeNameGenerator, MAX_LABEL_NAME_LENGTH};
//!
//! let generator = SafeNameGenerator::new();
//! let mut cache = SafeNameCache::new();
//!
//! let base = "cnfdf18-new-common-cnfdf18-looooong-subscriptions-policy";
//! let name = cache.get_or_create(&generator, base, "ztp-install", MAX_LABEL_NAME_LENGTH);
//! assert!(name.chars().count() <= MAX_LABEL_NAME_LENGTH);
//!
//! // Later reconciles get the same name back.
//! let again = cache.get_or_create(&generator, base, "ztp-install", MAX_LABEL_NAME_LENGTH);
//! assert_eq!(name, again);
//! ```
//!
//! Diagnostics go through `tracing` at debug level (warn for an exhausted
//! length budget); with no subscriber installed the crate is silent and the
//! returned values are unaffected.

pub mod cache;
pub mod generate;
pub mod suffix;
pub mod validate;

pub use cache::SafeNameCache;
pub use generate::{
    new_safe_name, SafeNameGenerator, MAX_LABEL_NAME_LENGTH, MAX_OBJECT_NAME_LENGTH,
    NAME_SUFFIX_ANNOTATION,
};
pub use suffix::{FixedSuffix, RandomSuffix, SuffixSource, RANDOM_SUFFIX_LENGTH};
pub use validate::{is_rfc1123_label, is_rfc1123_subdomain};
