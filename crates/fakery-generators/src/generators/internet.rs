//! Domains, emails and usernames.

use crate::data::datasets;
use crate::error::Result;
use crate::faker::Faker;

const USERNAME_SEPARATORS: [&str; 4] = [".", "_", "-", ""];

impl Faker {
    /// Top-level domain drawn from the weighted `tld:weight` table.
    pub fn tld(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::INTERNET)?;
        let tlds = data.weighted("common_tlds_weighted", ":")?;
        Ok(self.sample_weighted(&*tlds)?.clone())
    }

    /// Domain safe to use in fake addresses.
    pub fn email_domain(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::INTERNET)?;
        self.require(&data, "fake_email_domains")
    }

    pub fn free_email_domain(&mut self) -> Result<String> {
        let data = self.load_generic(datasets::INTERNET)?;
        self.require(&data, "free_email_domains")
    }

    /// Email for freshly drawn first and last names.
    pub fn email(&mut self) -> Result<String> {
        let first = self.first_name()?;
        let last = self.last_name()?;
        self.email_for(&first, &last)
    }

    /// Email whose local part is `first.last` or `last.first`, lowercased.
    pub fn email_for(&mut self, first_name: &str, last_name: &str) -> Result<String> {
        let domain = self.email_domain()?;
        let local = if self.rng().coin() == 0 {
            format!("{first_name}.{last_name}")
        } else {
            format!("{last_name}.{first_name}")
        };
        Ok(format!("{}@{domain}", local.to_lowercase()))
    }

    /// Username for freshly drawn first and last names.
    pub fn username(&mut self) -> Result<String> {
        let first = self.first_name()?;
        let last = self.last_name()?;
        self.username_for(&first, &last)
    }

    /// Username in one of twelve shapes built from the given names, a
    /// positive adjective and a number below 1000.
    pub fn username_for(&mut self, first_name: &str, last_name: &str) -> Result<String> {
        let first = first_name.to_lowercase();
        let last = last_name.to_lowercase();
        let sep = self.pick(&USERNAME_SEPARATORS);

        let username = match self.rng().int_below(12)? {
            0 => format!("{first}{sep}{last}"),
            1 => format!("{last}{sep}{first}"),
            2 => format!("{first}{sep}{}", self.rng().int_below(1000)?),
            3 => format!("{first}{sep}{last}{}", self.rng().int_below(1000)?),
            4 => format!("{first}{last}{}", self.rng().int_below(1000)?),
            5 => format!("{first}{sep}{}", self.adjective_positive()?),
            6 => format!("{last}{sep}{}", self.adjective_positive()?),
            7 => format!("{}{sep}{first}", self.adjective_positive()?),
            8 => format!("{}{sep}{last}", self.adjective_positive()?),
            9 => {
                let adj = self.adjective_positive()?;
                let name = if self.rng().coin() == 1 { &first } else { &last };
                format!("{adj}{sep}{name}{}", self.rng().int_below(1000)?)
            }
            10 => {
                let sep2 = self.pick(&USERNAME_SEPARATORS);
                let adj = self.adjective_positive()?;
                if self.rng().coin() == 1 {
                    format!("{adj}{sep}{first}{sep2}{last}")
                } else {
                    format!("{first}{sep2}{last}{sep}{adj}")
                }
            }
            _ => {
                let sep2 = self.pick(&USERNAME_SEPARATORS);
                let adj = self.adjective_positive()?;
                format!("{first}{sep2}{last}{sep}{adj}{}", self.rng().int_below(1000)?)
            }
        };

        Ok(username)
    }
}
