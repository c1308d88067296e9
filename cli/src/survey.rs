use salary_analyzer::{aggregate, AggregateReport, HeadHunterSalary, SalaryExtractor, SuperJobSalary};
use serde::Serialize;
use vacancy_scraper::{headhunter::HeadHunter, superjob::SuperJob, VacancySource};

use crate::config::{Settings, Site};

/// One platform's source with the extractor that understands its postings.
pub struct Survey {
    title: String,
    source: Box<dyn VacancySource>,
    extractor: Box<dyn SalaryExtractor>,
}

#[derive(Serialize)]
pub struct SiteReport {
    pub site: String,
    pub languages: AggregateReport,
}

impl Survey {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub async fn run(&self, languages: &[String]) -> SiteReport {
        log::info!("surveying {} for {} languages", self.title, languages.len());
        let report = aggregate(languages, self.source.as_ref(), self.extractor.as_ref()).await;
        if report.is_empty() {
            log::warn!("{} returned no usable vacancies for any language", self.title);
        }
        SiteReport {
            site: self.title.clone(),
            languages: report,
        }
    }
}

/// Build a survey per configured site without touching the network.
pub fn prepare(settings: &Settings) -> vacancy_scraper::Result<Vec<Survey>> {
    let mut surveys = Vec::with_capacity(settings.sites.len());
    for site in &settings.sites {
        let survey = match site {
            Site::HeadHunter => Survey {
                title: format!("HeadHunter, area {}", settings.headhunter.area),
                source: Box::new(HeadHunter::new(settings.headhunter.clone())?),
                extractor: Box::new(HeadHunterSalary),
            },
            Site::SuperJob => {
                let Some(config) = settings.superjob.clone() else {
                    log::warn!("SuperJob selected without configuration, skipping it");
                    continue;
                };
                Survey {
                    title: format!("SuperJob, {}", config.town),
                    source: Box::new(SuperJob::new(config)?),
                    extractor: Box::new(SuperJobSalary),
                }
            }
        };
        surveys.push(survey);
    }
    Ok(surveys)
}
