use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for an external job-listing site.
///
/// Each site has its own URL grammar and markup; the variants here are
/// the stable identifiers used on the wire (`"remoteok"`, `"indeed"`, …)
/// and as keys in per-source status maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSite {
    RemoteOk,
    WeWorkRemotely,
    HackerNews,
    Indeed,
    Naukri,
    Google,
    Dice,
    SimplyHired,
    Arbeitnow,
    Jobspresso,
    StartupJobs,
    Wellfound,
    Himalayas,
    RemoteCo,
}

impl JobSite {
    /// All supported sites, in the order they are presented to callers.
    pub const ALL: [JobSite; 14] = [
        JobSite::RemoteOk,
        JobSite::WeWorkRemotely,
        JobSite::HackerNews,
        JobSite::Indeed,
        JobSite::Naukri,
        JobSite::Google,
        JobSite::Dice,
        JobSite::SimplyHired,
        JobSite::Arbeitnow,
        JobSite::Jobspresso,
        JobSite::StartupJobs,
        JobSite::Wellfound,
        JobSite::Himalayas,
        JobSite::RemoteCo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobSite::RemoteOk => "remoteok",
            JobSite::WeWorkRemotely => "weworkremotely",
            JobSite::HackerNews => "hackernews",
            JobSite::Indeed => "indeed",
            JobSite::Naukri => "naukri",
            JobSite::Google => "google",
            JobSite::Dice => "dice",
            JobSite::SimplyHired => "simplyhired",
            JobSite::Arbeitnow => "arbeitnow",
            JobSite::Jobspresso => "jobspresso",
            JobSite::StartupJobs => "startupjobs",
            JobSite::Wellfound => "wellfound",
            JobSite::Himalayas => "himalayas",
            JobSite::RemoteCo => "remoteco",
        }
    }

    /// Canonical origin of the site, used to rewrite root-relative
    /// job links into absolute URLs.
    pub fn origin(&self) -> &'static str {
        match self {
            JobSite::RemoteOk => "https://remoteok.com",
            JobSite::WeWorkRemotely => "https://weworkremotely.com",
            JobSite::HackerNews => "https://news.ycombinator.com",
            JobSite::Indeed => "https://www.indeed.com",
            JobSite::Naukri => "https://www.naukri.com",
            JobSite::Google => "https://www.google.com",
            JobSite::Dice => "https://www.dice.com",
            JobSite::SimplyHired => "https://www.simplyhired.com",
            JobSite::Arbeitnow => "https://www.arbeitnow.com",
            JobSite::Jobspresso => "https://jobspresso.co",
            JobSite::StartupJobs => "https://startup.jobs",
            JobSite::Wellfound => "https://wellfound.com",
            JobSite::Himalayas => "https://himalayas.app",
            JobSite::RemoteCo => "https://remote.co",
        }
    }
}

impl fmt::Display for JobSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobSite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remoteok" => Ok(JobSite::RemoteOk),
            "weworkremotely" => Ok(JobSite::WeWorkRemotely),
            "hackernews" => Ok(JobSite::HackerNews),
            "indeed" => Ok(JobSite::Indeed),
            "naukri" => Ok(JobSite::Naukri),
            "google" => Ok(JobSite::Google),
            "dice" => Ok(JobSite::Dice),
            "simplyhired" => Ok(JobSite::SimplyHired),
            "arbeitnow" => Ok(JobSite::Arbeitnow),
            "jobspresso" => Ok(JobSite::Jobspresso),
            "startupjobs" => Ok(JobSite::StartupJobs),
            "wellfound" => Ok(JobSite::Wellfound),
            "himalayas" => Ok(JobSite::Himalayas),
            "remoteco" => Ok(JobSite::RemoteCo),
            _ => Err(format!("Unknown job site: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_roundtrip() {
        for site in JobSite::ALL {
            let parsed: JobSite = site.as_str().parse().unwrap();
            assert_eq!(parsed, site);
        }
    }

    #[test]
    fn test_unknown_site_rejected() {
        assert!("monster".parse::<JobSite>().is_err());
        assert!("".parse::<JobSite>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_identifier() {
        let json = serde_json::to_string(&JobSite::WeWorkRemotely).unwrap();
        assert_eq!(json, "\"weworkremotely\"");
        let back: JobSite = serde_json::from_str(&json).unwrap();
        assert_eq!(back, JobSite::WeWorkRemotely);
    }

    #[test]
    fn test_origins_have_no_trailing_slash() {
        for site in JobSite::ALL {
            assert!(site.origin().starts_with("https://"));
            assert!(!site.origin().ends_with('/'));
        }
    }
}
