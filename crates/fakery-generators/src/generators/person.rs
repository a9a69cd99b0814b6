//! Person names, gender, jobs and the combined Person entity.

use std::fmt;
use std::sync::LazyLock;

use fakery_core::{Distribution, Registry, Template};
use serde::Serialize;

use crate::data::datasets;
use crate::entity::Entity;
use crate::error::{GeneratorError, Result};
use crate::faker::Faker;

static NAME_FORMATS: LazyLock<Distribution<Template>> = LazyLock::new(|| {
    Distribution::from_pairs([
        (Template::parse("{{firstName}} {{lastName}}"), 0.70),
        (Template::parse("{{firstName}} {{lastName}} {{suffix}}"), 0.10),
        (Template::parse("{{prefix}} {{firstName}} {{lastName}} {{suffix}}"), 0.05),
        (Template::parse("{{prefix}} {{firstName}} {{lastName}}"), 0.15),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl Gender {
    fn key_suffix(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    pub name: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    #[serde(rename = "user_name")]
    pub username: String,
    pub email: String,
    pub job: String,
}

impl Entity for Person {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

impl Entity for Job {}

/// Parts chosen while expanding a name format, kept so every field of a
/// Person comes from the same draw.
struct NameParts<'a> {
    faker: &'a mut Faker,
    gender: Gender,
    first: String,
    last: String,
    prefix: String,
    suffix: String,
}

fn name_registry<'a>() -> Registry<NameParts<'a>, GeneratorError> {
    Registry::<NameParts<'a>, GeneratorError>::new()
        .with("prefix", |p| {
            p.prefix = p.faker.name_prefix_for(p.gender)?;
            Ok(p.prefix.clone())
        })
        .with("firstName", |p| {
            p.first = p.faker.first_name_for(p.gender)?;
            Ok(p.first.clone())
        })
        .with("lastName", |p| {
            p.last = p.faker.last_name()?;
            Ok(p.last.clone())
        })
        .with("suffix", |p| {
            p.suffix = p.faker.name_suffix_for(p.gender)?;
            Ok(p.suffix.clone())
        })
}

impl Faker {
    pub fn gender(&mut self) -> Gender {
        *self.rng().one_of(&[Gender::Male, Gender::Female])
    }

    pub fn first_name(&mut self) -> Result<String> {
        let gender = self.gender();
        self.first_name_for(gender)
    }

    pub fn first_name_for(&mut self, gender: Gender) -> Result<String> {
        let data = self.load_locale(datasets::NAMES)?;
        self.require(&data, &format!("first_name_{}", gender.key_suffix()))
    }

    pub fn last_name(&mut self) -> Result<String> {
        let data = self.load_locale(datasets::NAMES)?;
        self.require(&data, "last_name")
    }

    /// Honorific for `gender`, empty when the locale has none.
    pub fn name_prefix_for(&mut self, gender: Gender) -> Result<String> {
        let data = self.load_locale(datasets::NAMES)?;
        Ok(self.pick(data.column_or_empty(&format!("prefix_{}", gender.key_suffix()))))
    }

    /// Name suffix for `gender`, empty when the locale has none.
    pub fn name_suffix_for(&mut self, gender: Gender) -> Result<String> {
        let data = self.load_locale(datasets::NAMES)?;
        Ok(self.pick(data.column_or_empty(&format!("suffix_{}", gender.key_suffix()))))
    }

    /// Full name from a weighted name format.
    pub fn name(&mut self) -> Result<String> {
        let gender = self.gender();
        Ok(self.chosen_name(gender)?.full)
    }

    fn chosen_name(&mut self, gender: Gender) -> Result<ChosenName> {
        let format = self.sample_weighted(&*NAME_FORMATS)?;
        let mut parts = NameParts {
            faker: self,
            gender,
            first: String::new(),
            last: String::new(),
            prefix: String::new(),
            suffix: String::new(),
        };
        let full = format.resolve(&name_registry(), &mut parts)?;

        Ok(ChosenName {
            // Empty prefix or suffix columns leave doubled spaces behind
            full: full.split_whitespace().collect::<Vec<_>>().join(" "),
            first: parts.first,
            last: parts.last,
            prefix: parts.prefix,
            suffix: parts.suffix,
        })
    }

    pub fn job_title(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::JOBS)?;
        Ok(self.pick(data.column_or_empty("jobs")))
    }

    pub fn job(&mut self) -> Result<Job> {
        Ok(Job {
            title: self.job_title()?,
            profession: None,
        })
    }

    /// A person of random gender whose name, username and email all derive
    /// from one draw.
    pub fn person(&mut self) -> Result<Person> {
        let gender = self.gender();
        self.person_for(gender)
    }

    /// A person of the given gender; first name, prefix and suffix all come
    /// from that gender's columns.
    pub fn person_for(&mut self, gender: Gender) -> Result<Person> {
        let chosen = self.chosen_name(gender)?;
        let username = self.username_for(&chosen.first, &chosen.last)?;
        let email = self.email_for(&chosen.first, &chosen.last)?;
        let job = self.job_title()?;

        Ok(Person {
            first_name: chosen.first,
            last_name: chosen.last,
            name: chosen.full,
            gender,
            prefix: chosen.prefix,
            suffix: chosen.suffix,
            username,
            email,
            job,
        })
    }
}

struct ChosenName {
    full: String,
    first: String,
    last: String,
    prefix: String,
    suffix: String,
}
