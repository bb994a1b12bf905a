//! Realistic text generation
//!
//! The semantic value source delegates all domain-plausible text to a
//! [`TextGenerator`], so applications can plug in their own corpus or a
//! full faker library. [`EnglishText`] is the built-in generator backed by
//! curated word lists.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Pluggable source of domain-plausible text.
pub trait TextGenerator {
    fn email(&mut self) -> String;
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    fn full_name(&mut self) -> String;
    fn phone(&mut self) -> String;
    fn address(&mut self) -> String;
    fn company(&mut self) -> String;
    fn title(&mut self) -> String;
    fn sentence(&mut self) -> String;
    fn category(&mut self) -> String;
    fn product(&mut self) -> String;
    fn word(&mut self) -> String;
}

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack", "Kate",
    "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn", "Ruby", "Sam", "Tina", "Uma", "Victor",
    "Willow", "Xander", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Johnson", "King",
    "Lopez", "Miller", "Nelson", "Parker", "Quinn", "Roberts", "Smith", "Taylor", "Valdez",
    "Williams", "Young", "Zhang",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "test.org", "demo.net", "sample.io", "fake.dev"];

const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Elm Dr", "Park Blvd", "Cedar Ln", "Maple Way", "Pine St", "River Rd",
    "Hill Ave", "Lake Dr", "Forest Ln", "Garden St", "Valley Rd", "Spring Ave", "Sunset Blvd",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Georgetown", "Fairview", "Madison", "Arlington",
    "Salem", "Richmond", "Columbia", "Austin", "Denver", "Phoenix", "Portland", "Seattle",
];

const COMPANY_PREFIXES: &[&str] = &[
    "Acme", "Global", "United", "Premium", "Elite", "Advanced", "Dynamic", "Smart",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Corp", "Inc", "LLC", "Solutions", "Systems", "Technologies", "Enterprises", "Group",
];

const TITLE_ADJECTIVES: &[&str] = &[
    "Silent", "Hidden", "Broken", "Golden", "Distant", "Forgotten", "Crimson", "Endless",
];

const TITLE_NOUNS: &[&str] = &[
    "Garden", "River", "Kingdom", "Promise", "Horizon", "Winter", "Library", "Voyage",
];

const SENTENCE_SUBJECTS: &[&str] = &[
    "The user", "The system", "The application", "The service", "The platform",
];

const SENTENCE_VERBS: &[&str] = &["creates", "updates", "processes", "manages", "handles", "provides"];

const SENTENCE_OBJECTS: &[&str] = &[
    "data", "information", "content", "resources", "functionality", "capabilities",
];

const CATEGORIES: &[&str] = &[
    "Electronics", "Books", "Clothing", "Garden", "Toys", "Grocery", "Automotive", "Health",
    "Sports", "Music",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Sleek", "Rustic", "Ergonomic", "Durable", "Compact", "Lightweight", "Handcrafted",
];

const PRODUCT_MATERIALS: &[&str] = &["Steel", "Wooden", "Cotton", "Granite", "Leather", "Bamboo"];

const PRODUCT_NOUNS: &[&str] = &["Chair", "Lamp", "Keyboard", "Wallet", "Bottle", "Table", "Bag"];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "amet", "tempor", "incidunt", "labore", "magna", "aliqua",
    "veniam", "nostrud", "ullamco", "aliquip", "commodo", "cupidatat",
];

/// Word-list-backed [`TextGenerator`].
#[derive(Debug)]
pub struct EnglishText {
    rng: StdRng,
}

impl EnglishText {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, options: &[&str]) -> String {
        options
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}

impl Default for EnglishText {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGenerator for EnglishText {
    fn email(&mut self) -> String {
        let name = self.pick(FIRST_NAMES).to_lowercase();
        let number: u32 = self.rng.gen_range(1..1000);
        let domain = self.pick(EMAIL_DOMAINS);
        format!("{name}{number:03}@{domain}")
    }

    fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES)
    }

    fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES)
    }

    fn full_name(&mut self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn phone(&mut self) -> String {
        let area = self.rng.gen_range(200..1000);
        let exchange = self.rng.gen_range(200..1000);
        let number = self.rng.gen_range(1000..10000);
        format!("({area}) {exchange}-{number}")
    }

    fn address(&mut self) -> String {
        let number = self.rng.gen_range(1..10000);
        let street = self.pick(STREETS);
        let city = self.pick(CITIES);
        format!("{number} {street}, {city}")
    }

    fn company(&mut self) -> String {
        format!("{} {}", self.pick(COMPANY_PREFIXES), self.pick(COMPANY_SUFFIXES))
    }

    fn title(&mut self) -> String {
        format!("The {} {}", self.pick(TITLE_ADJECTIVES), self.pick(TITLE_NOUNS))
    }

    fn sentence(&mut self) -> String {
        format!(
            "{} {} {}.",
            self.pick(SENTENCE_SUBJECTS),
            self.pick(SENTENCE_VERBS),
            self.pick(SENTENCE_OBJECTS)
        )
    }

    fn category(&mut self) -> String {
        self.pick(CATEGORIES)
    }

    fn product(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(PRODUCT_ADJECTIVES),
            self.pick(PRODUCT_MATERIALS),
            self.pick(PRODUCT_NOUNS)
        )
    }

    fn word(&mut self) -> String {
        self.pick(WORDS)
    }
}
