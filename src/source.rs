//! Synthetic user data.
//!
//! The list core only needs "n well-formed records with unique ids", so the
//! generator sits behind [`RecordSource`] and can be swapped for anything else.

use crate::record::{Record, RecordId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const DEFAULT_SEED: u64 = 0;

/// Produces the initial collection for a store.
pub trait RecordSource {
    /// Returns `n` records with unique ids, in display order.
    fn generate(&self, n: usize) -> Vec<Record>;
}

const PHOTO_URLS: [&str; 9] = [
    "https://i-fotok.ru/girls/foto-lica-devushki-dlya-makiyazha_1/foto-lica-devushki-dlya-makiyazha_2.jpg",
    "https://interesnoznat.com/wp-content/uploads/gesichtermix_11925868_1671921689718597_1702935533_n.jpg",
    "https://www.syl.ru/misc/i/ni/9/4/0/8/9/1/i/940891.jpg",
    "https://i-fotok.ru/stil/lico-devushki-dlya-makiyazha_4/19.jpg",
    "https://style.pibig.info/uploads/posts/2023-03/1679688581_style-pibig-info-p-krasivie-zhenskie-litsa-bez-makiyazha-zhen-1.jpg",
    "https://amiel.club/uploads/posts/2022-03/1647762836_1-amiel-club-p-kartinki-litsa-cheloveka-1.jpg",
    "https://mykaleidoscope.ru/x/uploads/posts/2022-09/1663668908_23-mykaleidoscope-ru-p-interes-na-litse-krasivo-24.jpg",
    "https://img.goodfon.ru/original/1600x1200/1/8f/dzhud-lou-akter-muzhchina-lico.jpg",
    "https://i.pinimg.com/originals/f4/03/77/f40377cbb982eb779f75d5b050ef63a8.jpg",
];

const FIRST_NAMES: [&str; 24] = [
    "Abigail", "Benedict", "Camila", "Dorian", "Eleanor", "Felix", "Gwendolyn", "Horace",
    "Imogen", "Jasper", "Katerina", "Leopold", "Marisol", "Nathaniel", "Ophelia", "Percival",
    "Quentin", "Rosalind", "Sebastian", "Theodora", "Ulysses", "Violet", "Winifred", "Xavier",
];

const LAST_NAMES: [&str; 24] = [
    "Abernathy", "Blackwood", "Castellanos", "Donnelly", "Eastwood", "Fairbanks", "Gallagher",
    "Hawthorne", "Ingram", "Jablonski", "Kowalczyk", "Lindqvist", "McAllister", "Nakamura",
    "O'Connell", "Pemberton", "Quigley", "Rasmussen", "Sutherland", "Thornbury", "Underwood",
    "Vasquez", "Whitfield", "Yarborough",
];

const HAMLET_QUOTES: [&str; 20] = [
    "To be, or not to be: that is the question.",
    "Brevity is the soul of wit.",
    "There is nothing either good or bad, but thinking makes it so.",
    "Something is rotten in the state of Denmark.",
    "Though this be madness, yet there is method in't.",
    "Frailty, thy name is woman!",
    "The lady doth protest too much, methinks.",
    "Neither a borrower nor a lender be.",
    "This above all: to thine own self be true.",
    "There are more things in heaven and earth, Horatio, than are dreamt of in your philosophy.",
    "The rest is silence.",
    "Give every man thy ear, but few thy voice.",
    "Doubt thou the stars are fire; doubt that the sun doth move.",
    "One may smile, and smile, and be a villain.",
    "The play's the thing wherein I'll catch the conscience of the king.",
    "Alas, poor Yorick! I knew him, Horatio.",
    "When sorrows come, they come not single spies, but in battalions.",
    "I must be cruel only to be kind.",
    "What a piece of work is a man!",
    "Good night, sweet prince, and flights of angels sing thee to thy rest.",
];

/// Deterministic fake-user generator.
///
/// Ids run `1..=n`, photos cycle through a fixed URL list by index, and names
/// and status lines come from a seeded RNG so the same seed always yields the
/// same list.
pub struct FakeUserSource {
    seed: u64,
}

impl FakeUserSource {
    pub fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for FakeUserSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for FakeUserSource {
    fn generate(&self, n: usize) -> Vec<Record> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..n)
            .map(|index| {
                let id = index as RecordId + 1;
                let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Anonymous");
                let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("User");
                let status = HAMLET_QUOTES.choose(&mut rng).copied().unwrap_or_default();

                Record::new(
                    id,
                    PHOTO_URLS[index % PHOTO_URLS.len()],
                    format!("{first} {last}"),
                    status,
                )
            })
            .collect()
    }
}
