//! Operating system tokens for user agent strings.

use std::fmt;

use crate::error::Result;
use crate::faker::Faker;

const WINDOWS_VERSIONS: [&str; 11] = [
    "Windows NT 10.0; Win64; x64",
    "Windows NT 10.0; WOW64",
    "Windows NT 6.3; Win64; x64",
    "Windows NT 6.3; WOW64",
    "Windows NT 6.2; Win64; x64",
    "Windows NT 6.2; WOW64",
    "Windows NT 6.1; Win64; x64",
    "Windows NT 6.1; WOW64",
    "Windows NT 6.1",
    "Windows NT 6.0",
    "Windows NT 5.1",
];

const LINUX_VERSIONS: [&str; 6] = [
    "X11; Linux x86_64",
    "X11; Ubuntu; Linux x86_64",
    "X11; Linux i686",
    "X11; Fedora; Linux x86_64",
    "X11; CentOS; Linux x86_64",
    "X11; Debian; Linux x86_64",
];

const ANDROID_VERSIONS: [&str; 12] = [
    "Android 13; Mobile",
    "Android 12; Mobile",
    "Android 11; Mobile",
    "Android 10; Mobile",
    "Android 9; Mobile",
    "Android 8.1.0; Mobile",
    "Android 8.0.0; Mobile",
    "Android 7.1.2; Mobile",
    "Android 7.0; Mobile",
    "Android 6.0.1; Mobile",
    "Android 6.0; Mobile",
    "Android 5.1.1; Mobile",
];

const IOS_DEVICES: [&str; 3] = ["iPhone", "iPad", "iPod"];

const IOS_VERSIONS: [&str; 29] = [
    "17_4_1", "17_0", "16_6", "16_5", "16_4", "16_3_1", "16_0", "15_7", "15_6_1", "15_5",
    "15_4_1", "15_0", "14_8", "14_7_1", "14_6", "14_4_2", "14_0", "13_7", "13_6_1", "13_5_1",
    "13_4_1", "13_3_1", "13_0", "12_5_5", "12_4_1", "12_3_1", "12_2", "12_1", "12_0",
];

/// Operating system family behind a platform token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
    Android,
    Ios,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Windows,
        Platform::Mac,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
    ];

    pub fn is_apple(&self) -> bool {
        matches!(self, Platform::Mac | Platform::Ios)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::Mac => "Mac",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        };
        write!(f, "{name}")
    }
}

impl Faker {
    pub fn windows_version(&mut self) -> String {
        self.pick(&WINDOWS_VERSIONS)
    }

    /// `Macintosh; Intel Mac OS X 10_14_3` style token, newer major
    /// versions one time in three.
    pub fn mac_version(&mut self) -> Result<String> {
        if self.rng().roll_dice() < 3 {
            let major = self.int_between(11, 15)?;
            let minor = self.rng().int_below(8)?;
            let patch = self.rng().int_below(20)?;
            Ok(format!("Macintosh; Intel Mac OS X {major}_{minor}_{patch}"))
        } else {
            let minor = self.int_between(8, 16)?;
            let patch = self.rng().int_below(8)?;
            Ok(format!("Macintosh; Intel Mac OS X 10_{minor}_{patch}"))
        }
    }

    pub fn linux_version(&mut self) -> String {
        self.pick(&LINUX_VERSIONS)
    }

    pub fn android_version(&mut self) -> String {
        self.pick(&ANDROID_VERSIONS)
    }

    pub fn ios_version(&mut self) -> String {
        let device = self.pick(&IOS_DEVICES);
        let version = self.pick(&IOS_VERSIONS);
        let cpu = if self.rng().coin() == 0 {
            format!("CPU iPhone OS {version} like Mac OS X")
        } else {
            format!("CPU OS {version} like Mac OS X")
        };
        format!("{device}; {cpu}")
    }

    pub fn platform(&mut self) -> Result<Platform> {
        let idx = self.rng().int_below(Platform::ALL.len())?;
        Ok(Platform::ALL[idx])
    }

    /// Token for the given platform family.
    pub fn platform_version_for(&mut self, platform: Platform) -> Result<String> {
        Ok(match platform {
            Platform::Windows => self.windows_version(),
            Platform::Mac => self.mac_version()?,
            Platform::Linux => self.linux_version(),
            Platform::Android => self.android_version(),
            Platform::Ios => self.ios_version(),
        })
    }

    pub fn platform_version(&mut self) -> Result<String> {
        let platform = self.platform()?;
        self.platform_version_for(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::seeded;

    #[test]
    fn test_platform_tokens() {
        let mut faker = seeded(1);
        for _ in 0..50 {
            assert!(faker.windows_version().starts_with("Windows NT "));
            assert!(faker.mac_version().unwrap().starts_with("Macintosh; Intel Mac OS X "));
            assert!(faker.linux_version().starts_with("X11; "));
            assert!(faker.android_version().starts_with("Android "));
            let ios = faker.ios_version();
            assert!(IOS_DEVICES.iter().any(|d| ios.starts_with(d)));
            assert!(ios.ends_with("like Mac OS X"));
        }
    }

    #[test]
    fn test_every_platform_is_reachable() {
        let mut faker = seeded(2);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let platform = faker.platform().unwrap();
            if !seen.contains(&platform) {
                seen.push(platform);
            }
        }
        assert_eq!(seen.len(), Platform::ALL.len());
    }
}
