use clap::{Parser, ValueEnum};
use thiserror::Error;
use vacancy_scraper::{
    headhunter::{self, HeadHunterConfig},
    superjob::{self, SuperJobConfig},
};

const DEFAULT_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "C#",
    "PHP",
    "Go",
    "Swift",
    "Kotlin",
    "Ruby",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SuperJob API key is missing, pass it with --sj-key or set the SJ_KEY environment variable")]
    MissingApiKey,
    #[error("--per-page must be greater than zero")]
    EmptyPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Site {
    #[value(name = "headhunter", alias = "hh")]
    HeadHunter,
    #[value(name = "superjob", alias = "sj")]
    SuperJob,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Average salaries of programming languages on hh.ru and superjob.ru", long_about = None)]
pub struct Cli {
    /// SuperJob application key
    #[arg(long = "sj-key", alias = "sj_key", env = "SJ_KEY", hide_env_values = true)]
    sj_key: Option<String>,

    /// Job sites to survey
    #[arg(long, value_enum, default_values = ["headhunter", "superjob"])]
    site: Vec<Site>,

    /// Programming languages to search for
    #[arg(long = "language", default_values = DEFAULT_LANGUAGES)]
    languages: Vec<String>,

    /// hh.ru region id
    #[arg(long, default_value_t = headhunter::DEFAULT_AREA)]
    hh_area: u32,

    /// Pages walked per language on hh.ru at most
    #[arg(long, default_value_t = headhunter::DEFAULT_MAX_PAGES)]
    hh_max_pages: u32,

    /// superjob.ru town name or id
    #[arg(long, default_value = superjob::DEFAULT_TOWN)]
    sj_town: String,

    /// Vacancies requested per page
    #[arg(long, default_value_t = headhunter::DEFAULT_PER_PAGE)]
    per_page: u32,

    #[arg(long, default_value = headhunter::DEFAULT_URL)]
    hh_url: String,

    #[arg(long, default_value = superjob::DEFAULT_URL)]
    sj_url: String,

    /// Print the reports as JSON instead of tables
    #[arg(long)]
    json: bool,
}

/// Everything a run needs, checked before any request goes out.
#[derive(Debug)]
pub struct Settings {
    pub sites: Vec<Site>,
    pub languages: Vec<String>,
    pub headhunter: HeadHunterConfig,
    /// Set whenever SuperJob is among the sites.
    pub superjob: Option<SuperJobConfig>,
    pub json: bool,
}

impl TryFrom<Cli> for Settings {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.per_page == 0 {
            return Err(ConfigError::EmptyPage);
        }
        let mut sites = Vec::with_capacity(cli.site.len());
        for site in cli.site {
            if !sites.contains(&site) {
                sites.push(site);
            }
        }
        let superjob = if sites.contains(&Site::SuperJob) {
            let api_key = cli
                .sj_key
                .filter(|key| !key.trim().is_empty())
                .ok_or(ConfigError::MissingApiKey)?;
            Some(SuperJobConfig {
                base_url: cli.sj_url,
                api_key,
                town: cli.sj_town,
                per_page: cli.per_page,
            })
        } else {
            None
        };
        let headhunter = HeadHunterConfig {
            base_url: cli.hh_url,
            area: cli.hh_area,
            per_page: cli.per_page,
            max_pages: cli.hh_max_pages,
            ..HeadHunterConfig::default()
        };
        Ok(Settings {
            sites,
            languages: cli.languages,
            headhunter,
            superjob,
            json: cli.json,
        })
    }
}
