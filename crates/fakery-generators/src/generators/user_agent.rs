//! Browser user agent strings over random platforms.

use crate::error::Result;
use crate::faker::Faker;
use crate::generators::os::Platform;

impl Faker {
    pub fn chrome(&mut self) -> Result<String> {
        let major = self.int_between(45, 138)?;
        let patch = self.rng().int_below(10000)?;
        let build = self.rng().int_below(1000)?;
        let version = format!("{major}.0.{patch}.{build}");

        let platform = self.platform()?;
        let token = self.platform_version_for(platform)?;
        Ok(match platform {
            Platform::Android => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Mobile Safari/537.36"
            ),
            Platform::Ios => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/{version} Mobile/15E148 Safari/604.1"
            ),
            _ => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36"
            ),
        })
    }

    pub fn firefox(&mut self) -> Result<String> {
        let major = self.int_between(45, 136)?;

        let platform = self.platform()?;
        let token = self.platform_version_for(platform)?;
        Ok(match platform {
            Platform::Ios => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/605.1.15 (KHTML, like Gecko) FxiOS/{major}.0 Mobile/15E148 Safari/605.1.15"
            ),
            _ => format!("Mozilla/5.0 ({token}; rv:{major}.0) Gecko/20100101 Firefox/{major}.0"),
        })
    }

    pub fn safari(&mut self) -> Result<String> {
        let platform = self.platform()?;
        let token = self.platform_version_for(platform)?;

        let major = self.int_between(11, 17)?;
        let minor = self.rng().int_below(4)?;
        let patch = self.rng().int_below(16)?;
        let version = format!("{major}.{minor}.{patch}");

        Ok(match platform {
            Platform::Ios => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version} Mobile/15E148 Safari/604.1"
            ),
            Platform::Mac => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{version} Safari/605.1.15"
            ),
            _ => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/537.36 (KHTML, like Gecko) Version/{version} Safari/537.36"
            ),
        })
    }

    /// Internet Explorer 8 to 11, Windows only.
    pub fn internet_explorer(&mut self) -> Result<String> {
        let windows = self.windows_version();
        let version = self.int_between(8, 12)?;
        let trident = (version - 4).max(4);

        Ok(if version >= 11 {
            format!("Mozilla/5.0 ({windows}; Trident/{trident}.0; rv:11.0) like Gecko")
        } else {
            format!("Mozilla/5.0 ({windows}; Trident/{trident}.0; MSIE {version}.0; rv:11.0) like Gecko")
        })
    }

    /// Legacy EdgeHTML one time in three, Chromium Edge otherwise.
    pub fn edge(&mut self) -> Result<String> {
        if self.rng().roll_dice() < 3 {
            let windows = self.windows_version();
            let major = self.int_between(12, 19)?;
            let build = self.int_between(10000, 20000)?;
            return Ok(format!(
                "Mozilla/5.0 ({windows}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36 Edge/{major}.{build}"
            ));
        }

        let major = self.int_between(79, 125)?;
        let patch = self.rng().int_below(1001)?;
        let build = self.rng().int_below(1000)?;
        let version = format!("{major}.0.{patch}.{build}");
        let token = match self.rng().roll_dice() {
            1..=3 => self.windows_version(),
            4 | 5 => self.mac_version()?,
            _ => self.linux_version(),
        };
        Ok(format!(
            "Mozilla/5.0 ({token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36 Edg/{version}"
        ))
    }

    pub fn opera(&mut self) -> Result<String> {
        let platform = self.platform()?;
        let token = self.platform_version_for(platform)?;

        let major = self.int_between(59, 100)?;
        let minor = self.rng().int_below(10)?;
        let patch = self.rng().int_below(10000)?;
        let chrome = format!("{major}.0.{patch}.{}", self.rng().int_below(1000)?);
        let opera = format!(
            "{major}.{minor}.{}.{}",
            self.rng().int_below(1000)?,
            self.rng().int_below(1000)?
        );

        Ok(match platform {
            Platform::Android => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{chrome} Mobile Safari/537.36 OPR/{opera}"
            ),
            Platform::Ios => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.0 Mobile/15E148 Safari/604.1 OPiOS/{opera}"
            ),
            _ => format!(
                "Mozilla/5.0 ({token}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{chrome} Safari/537.36 OPR/{opera}"
            ),
        })
    }

    /// User agent of a random browser.
    pub fn user_agent(&mut self) -> Result<String> {
        match self.rng().int_below(6)? {
            0 => self.chrome(),
            1 => self.firefox(),
            2 => self.safari(),
            3 => self.internet_explorer(),
            4 => self.edge(),
            _ => self.opera(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::seeded;

    #[test]
    fn test_browser_markers() {
        let mut faker = seeded(1);
        for _ in 0..50 {
            let chrome = faker.chrome().unwrap();
            assert!(chrome.contains("Chrome/") || chrome.contains("CriOS/"), "{chrome}");

            let firefox = faker.firefox().unwrap();
            assert!(firefox.contains("Firefox/") || firefox.contains("FxiOS/"), "{firefox}");

            assert!(faker.safari().unwrap().contains("Version/"));

            let ie = faker.internet_explorer().unwrap();
            assert!(ie.contains("Windows NT") && ie.contains("Trident/"), "{ie}");

            let edge = faker.edge().unwrap();
            assert!(edge.contains("Edge/") || edge.contains("Edg/"), "{edge}");

            let opera = faker.opera().unwrap();
            assert!(opera.contains("OPR/") || opera.contains("OPiOS/"), "{opera}");
        }
    }

    #[test]
    fn test_user_agent_shape() {
        let mut faker = seeded(2);
        for _ in 0..100 {
            let agent = faker.user_agent().unwrap();
            assert!(agent.starts_with("Mozilla/5.0 ("), "{agent}");
            assert!(agent.matches('(').count() == agent.matches(')').count());
        }
    }
}
