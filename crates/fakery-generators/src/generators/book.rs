//! Book titles, publishers and the Book entity.

use std::sync::LazyLock;

use chrono::Datelike;
use fakery_core::{Distribution, LocaleDataset};
use serde::Serialize;

use crate::algorithms::{generate_isbn10, generate_isbn13};
use crate::data::datasets;
use crate::entity::Entity;
use crate::error::Result;
use crate::faker::Faker;
use crate::text::{capitalize, pluralize, starts_with_vowel};

static FORMATS: LazyLock<Distribution<&'static str>> = LazyLock::new(|| {
    Distribution::from_pairs([
        ("Paperback", 0.60),
        ("Mass Market Paperback", 0.15),
        ("Hardback", 0.10),
        ("EPUB", 0.05),
        ("Kindle Edition", 0.10),
    ])
});

const NUMBERS: [&str; 24] = [
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Nineteen",
    "Twenty",
    "Thirty",
    "Fifty",
    "Hundred",
    "Thousand",
    "Ten Thousand",
    "Fifty Thousand",
    "An Infinity of",
    "Countless",
];

/// Title shapes that read naturally with a leading "The".
const THE_PREFIXABLE: [u32; 4] = [2, 4, 7, 9];

const FIRST_PUBLICATION_YEAR: i64 = 1970;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: i64,
    #[serde(rename = "isbn_10", skip_serializing_if = "String::is_empty")]
    pub isbn10: String,
    #[serde(rename = "isbn_13", skip_serializing_if = "String::is_empty")]
    pub isbn13: String,
    pub language: String,
    pub genre: String,
    pub page_count: i64,
    pub format: String,
}

impl Entity for Book {}

impl Faker {
    /// Article for `word`: "a", or "an"/"the" before a vowel.
    pub fn article_for(&mut self, word: &str) -> &'static str {
        if !starts_with_vowel(word) {
            return "a";
        }
        if self.rng().coin() == 1 {
            "an"
        } else {
            "the"
        }
    }

    /// Title in one of eleven shapes, e.g. `Echoes of the Forest` or
    /// `How to Vanish a Lantern`.
    pub fn book_title(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::BOOK)?;
        let pattern = self.rng().int_below(11)? as u32 + 1;

        let words: Vec<String> = match pattern {
            1 => vec!["The".into(), self.book_noun(&data)?],
            2 => vec![self.book_word(&data, "literary_adjectives"), self.book_noun(&data)?],
            3 => vec![format!("{}'s", self.first_name()?), self.book_noun(&data)?],
            4 => vec![
                self.book_noun(&data)?,
                self.book_word(&data, "literary_prepositions"),
                "the".into(),
                self.book_noun(&data)?,
            ],
            5 => vec![
                self.book_word(&data, "literary_gerunds"),
                self.book_word(&data, "literary_prepositions"),
                self.book_noun(&data)?,
            ],
            6 => {
                let adjective = self.book_word(&data, "literary_adjectives");
                let article = capitalize(self.article_for(&adjective));
                vec![article, adjective, self.book_noun(&data)?]
            }
            7 => {
                let number = self.pick(&NUMBERS);
                let noun = self.book_noun(&data)?;
                if number == "One" {
                    vec![number, noun]
                } else {
                    vec![number, pluralize(&noun)]
                }
            }
            8 => {
                let preposition = capitalize(&self.book_word(&data, "literary_prepositions"));
                vec![preposition, "the".into(), self.book_noun(&data)?]
            }
            9 => {
                let last = self.book_noun(&data)?;
                let first = self.book_noun(&data)?;
                if self.rng().roll_dice() < 6 {
                    let article = self.article_for(&last).to_string();
                    vec![first, "of".into(), article, last]
                } else {
                    vec![first, "of".into(), last]
                }
            }
            10 => {
                let first = self.book_noun(&data)?;
                let initial = first.chars().next();
                let alliterative: Vec<&str> = data
                    .column_or_empty("literary_nouns")
                    .iter()
                    .map(String::as_str)
                    .filter(|n| *n != first && n.chars().next() == initial)
                    .collect();
                let second = if alliterative.is_empty() {
                    self.book_noun(&data)?
                } else {
                    self.pick(&alliterative)
                };
                let conjunction = self.book_word(&data, "literary_conjunctions");
                vec![first, conjunction, second]
            }
            _ => {
                let verb = self.book_word(&data, "literary_action_verbs");
                let noun = self.book_noun(&data)?;
                let article = self.article_for(&noun).to_string();
                vec!["How to".into(), verb, article, noun]
            }
        };

        let title = words
            .iter()
            .filter(|w| !w.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        if self.rng().roll_dice() == 6 && THE_PREFIXABLE.contains(&pattern) {
            return Ok(format!("The {title}"));
        }
        Ok(title)
    }

    pub fn book_publisher(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::BOOK)?;
        let parts = match self.rng().int_below(3)? {
            0 => vec![
                self.book_word(&data, "publisher_first_names"),
                self.book_word(&data, "publisher_second_names"),
                self.book_word(&data, "publisher_last_names"),
            ],
            1 => vec![
                self.book_word(&data, "publisher_first_names"),
                self.book_word(&data, "publisher_last_names"),
            ],
            _ => vec![
                self.book_word(&data, "publisher_second_names"),
                self.book_word(&data, "publisher_last_names"),
            ],
        };
        Ok(parts.join(" ").trim().to_string())
    }

    pub fn book_genre(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::BOOK)?;
        Ok(self.book_word(&data, "genres"))
    }

    pub fn book_author(&mut self) -> Result<String> {
        self.name()
    }

    pub fn book_format(&mut self) -> Result<String> {
        Ok(self.sample_weighted(&*FORMATS)?.to_string())
    }

    pub fn book_year(&mut self) -> Result<i64> {
        let current = i64::from(chrono::Utc::now().year());
        self.int_between(FIRST_PUBLICATION_YEAR, current - 1)
    }

    /// ISBN-10 or ISBN-13 with equal odds.
    pub fn book_isbn(&mut self) -> String {
        if self.rng().coin() == 1 {
            generate_isbn10(self.rng())
        } else {
            generate_isbn13(self.rng())
        }
    }

    pub fn isbn10(&mut self) -> String {
        generate_isbn10(self.rng())
    }

    pub fn isbn13(&mut self) -> String {
        generate_isbn13(self.rng())
    }

    pub fn book(&mut self) -> Result<Book> {
        let title = self.book_title()?;
        let author = self.book_author()?;
        let genre = self.book_genre()?;
        let year = self.book_year()?;
        let publisher = self.book_publisher()?;
        let language = self.language().to_string();
        let (isbn10, isbn13) = if self.rng().coin() == 1 {
            (self.isbn10(), String::new())
        } else {
            (String::new(), self.isbn13())
        };

        Ok(Book {
            title,
            author,
            publisher,
            year,
            isbn10,
            isbn13,
            language,
            genre,
            page_count: self.int_between(100, 501)?,
            format: self.book_format()?,
        })
    }

    fn book_noun(&mut self, data: &LocaleDataset) -> Result<String> {
        self.require(data, "literary_nouns")
    }

    fn book_word(&mut self, data: &LocaleDataset, key: &str) -> String {
        self.pick(data.column_or_empty(key))
    }
}
