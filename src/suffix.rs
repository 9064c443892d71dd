use rand::Rng;

/// Length of a generated random suffix.
pub const RANDOM_SUFFIX_LENGTH: usize = 5;

/// Characters a generated suffix is drawn from: lowercase consonants plus the
/// digits that cannot be mistaken for letters, the same reduced alphabet
/// Kubernetes uses for its own generated name tokens. Keeping vowels out
/// avoids accidentally spelling words in resource names.
const SUFFIX_ALPHABET: &[u8] = b"bcdfghjklmnpqrstvwxz2456789";

/// Source of the suffix appended to every safe name.
///
/// The production source is [`RandomSuffix`]; tests and fixture-driven
/// environments inject [`FixedSuffix`] to make generated names reproducible.
pub trait SuffixSource {
    fn suffix(&self) -> String;
}

/// Draws a fresh [`RANDOM_SUFFIX_LENGTH`]-character token on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..RANDOM_SUFFIX_LENGTH)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect()
    }
}

/// Always yields the same suffix.
#[derive(Clone, Debug)]
pub struct FixedSuffix(pub String);

impl SuffixSource for FixedSuffix {
    fn suffix(&self) -> String {
        self.0.clone()
    }
}
