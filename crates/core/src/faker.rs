use rand::{Rng, SeedableRng, rngs::StdRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Beatriz", "Carlos", "Chen", "Dalia", "Diego", "Elena", "Farah",
    "Grace", "Hana", "Ibrahim", "Ines", "Jamal", "Julia", "Kenji", "Lena", "Liam", "Maya",
    "Mateo", "Nadia", "Noah", "Olga", "Priya", "Rafael", "Sofia", "Tariq", "Yuki", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bauer", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad",
    "Ivanova", "Johnson", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Patel",
    "Quinn", "Rossi", "Schmidt", "Tanaka", "Upton", "Vargas", "Wagner", "Xu", "Yilmaz",
    "Zhang", "O'Brien", "Novak", "Silva", "Murphy",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

/// Source of plausible customer fields and amounts
pub trait FakeData {
    fn full_name(&mut self) -> String;

    fn email(&mut self) -> String;

    /// Uniformly distributed integer in `min..=max`
    fn integer_between(&mut self, min: i64, max: i64) -> i64;
}

/// [`FakeData`] backed by a random number generator
pub struct RandomFaker<R = StdRng> {
    rng: R,
}

impl RandomFaker<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator: the same seed yields the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words[self.rng.random_range(0..words.len())]
    }
}

impl<R: Rng> FakeData for RandomFaker<R> {
    fn full_name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        format!("{} {}", first, last)
    }

    fn email(&mut self) -> String {
        let first = local_part(self.pick(FIRST_NAMES));
        let last = local_part(self.pick(LAST_NAMES));
        let domain = self.pick(EMAIL_DOMAINS);
        let local = match self.rng.random_range(0..3) {
            0 => format!("{}.{}", first, last),
            1 => format!("{}_{}", first, last),
            _ => format!("{}{}", first, self.rng.random_range(1..100)),
        };
        format!("{}@{}", local, domain)
    }

    fn integer_between(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

fn local_part(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
