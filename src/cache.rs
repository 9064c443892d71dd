use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generate::SafeNameGenerator;
use crate::suffix::SuffixSource;

/// Safe names already handed out, keyed by `namespace/name`.
///
/// Embedded in the owning object's status (it serializes transparently as a
/// plain string map) so a name generated once keeps being returned for the
/// life of the owner, even though the random suffix itself is not
/// reproducible. Entries are never evicted here; the owner drops the whole
/// cache when the object goes away.
///
/// Not internally synchronized: the owning reconciler is expected to be the
/// single writer for any given owner at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SafeNameCache {
    names: BTreeMap<String, String>,
}

impl SafeNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached safe name for `namespace/name`, generating and
    /// storing one on first use.
    ///
    /// A hit returns the stored value unchanged; `max_length` is only
    /// consulted when generating, so a later call with a different limit
    /// still returns the original name.
    pub fn get_or_create<S: SuffixSource>(
        &mut self,
        generator: &SafeNameGenerator<S>,
        name: &str,
        namespace: &str,
        max_length: usize,
    ) -> String {
        let key = format!("{namespace}/{name}");
        if let Some(safe_name) = self.names.get(&key) {
            debug!(safe_name = %safe_name, namespace, "reusing cached safe name");
            return safe_name.clone();
        }

        let safe_name = generator.generate(name, namespace, max_length);
        self.names.insert(key, safe_name.clone());
        safe_name
    }

    /// Looks up a previously generated name without generating one.
    pub fn get(&self, name: &str, namespace: &str) -> Option<&str> {
        self.names.get(&format!("{namespace}/{name}")).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
