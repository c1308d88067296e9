use vacancy_scraper::{Fetched, VacancySource};

use crate::api::{Result, SalaryExtractor};
use crate::types::{AggregateReport, LanguageStats};

/// Average salary per language for one platform.
///
/// Languages are searched one after another. A language without any
/// postings is left out of the report, and so is one whose postings can't
/// be read; both are logged and the remaining languages still run.
pub async fn aggregate<L, S, E>(languages: &[L], source: &S, extractor: &E) -> AggregateReport
where
    L: AsRef<str>,
    S: VacancySource + ?Sized,
    E: SalaryExtractor + ?Sized,
{
    let mut report = AggregateReport::new();
    for language in languages {
        let language = language.as_ref();
        let fetched = source.fetch(language).await;
        if let Some(e) = &fetched.interrupted {
            log::warn!(
                "{} search for {} ended early after {} vacancies: {}",
                source.name(),
                language,
                fetched.postings.len(),
                e
            );
        }
        if fetched.postings.is_empty() {
            log::info!(
                "no vacancies from {} for {}, leaving it out",
                source.name(),
                language
            );
            continue;
        }
        match language_stats(&fetched, extractor) {
            Ok(stats) => {
                log::info!(
                    "{} {}: found {}, processed {}, average salary {}",
                    source.name(),
                    language,
                    stats.vacancies_found,
                    stats.vacancies_processed,
                    stats.average_salary
                );
                report.insert(language, stats);
            }
            Err(e) => log::error!(
                "failed to process {} vacancies for {}: {}",
                source.name(),
                language,
                e
            ),
        }
    }
    report
}

fn language_stats<E: SalaryExtractor + ?Sized>(
    fetched: &Fetched,
    extractor: &E,
) -> Result<LanguageStats> {
    let mut total_salary = 0.0;
    let mut vacancies_processed = 0u64;
    for posting in &fetched.postings {
        if let Some(salary) = extractor.extract(posting)? {
            total_salary += salary;
            vacancies_processed += 1;
        }
    }
    let average_salary = if vacancies_processed > 0 {
        (total_salary / vacancies_processed as f64) as u64
    } else {
        0
    };
    Ok(LanguageStats {
        vacancies_found: fetched.reported_total,
        vacancies_processed,
        average_salary,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::extractors::HeadHunterSalary;
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use vacancy_scraper::Posting;

    /// Serves canned postings per keyword and records what was asked for.
    #[derive(Default)]
    struct FakeSource {
        results: HashMap<String, (Vec<Value>, u64)>,
        cut_short: Vec<String>,
        asked: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn with(mut self, keyword: &str, postings: Vec<Value>, total: u64) -> Self {
            self.results.insert(keyword.to_owned(), (postings, total));
            self
        }

        fn cut_short(mut self, keyword: &str) -> Self {
            self.cut_short.push(keyword.to_owned());
            self
        }
    }

    #[async_trait]
    impl VacancySource for FakeSource {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn fetch(&self, keyword: &str) -> Fetched {
            self.asked.lock().unwrap().push(keyword.to_owned());
            let interrupted = self
                .cut_short
                .iter()
                .any(|k| k == keyword)
                .then(|| vacancy_scraper::Error::RequestNotOk {
                    url: format!("fake://vacancies?page=1&keyword={}", keyword),
                    status: reqwest::StatusCode::BAD_GATEWAY,
                });
            match self.results.get(keyword) {
                Some((postings, total)) => Fetched {
                    postings: postings.iter().cloned().map(Posting::from).collect(),
                    reported_total: *total,
                    interrupted,
                },
                None => Fetched {
                    interrupted,
                    ..Fetched::default()
                },
            }
        }
    }

    /// Reads a ready made estimate from the posting.
    struct EstimateField;

    #[derive(Deserialize)]
    struct WithEstimate {
        estimate: Option<f64>,
    }

    impl SalaryExtractor for EstimateField {
        fn extract(&self, posting: &Posting) -> Result<Option<f64>> {
            let with_estimate: WithEstimate = posting.decode()?;
            Ok(with_estimate.estimate)
        }
    }

    #[tokio::test]
    async fn test_average_over_estimated_postings() {
        let source = FakeSource::default().with(
            "Python",
            vec![
                json!({"estimate": 100.0}),
                json!({"estimate": 200.0}),
                json!({"estimate": null}),
            ],
            57,
        );
        let report = aggregate(&["Python"], &source, &EstimateField).await;
        assert_eq!(
            report.get("Python"),
            Some(&LanguageStats {
                vacancies_found: 57,
                vacancies_processed: 2,
                average_salary: 150,
            })
        );
    }

    #[tokio::test]
    async fn test_average_is_truncated() {
        let source = FakeSource::default().with(
            "Go",
            vec![
                json!({"estimate": 100.0}),
                json!({"estimate": 100.0}),
                json!({"estimate": 101.0}),
            ],
            3,
        );
        let report = aggregate(&["Go"], &source, &EstimateField).await;
        assert_eq!(report.get("Go").unwrap().average_salary, 100);
    }

    #[tokio::test]
    async fn test_language_without_postings_is_left_out() {
        let source = FakeSource::default()
            .with("Python", vec![json!({"estimate": 10.0})], 1)
            .with("Elixir", vec![], 12);
        let report = aggregate(&["Elixir", "Python"], &source, &EstimateField).await;
        assert_eq!(report.get("Elixir"), None);
        assert_eq!(report.languages().collect::<Vec<_>>(), vec!["Python"]);
    }

    #[tokio::test]
    async fn test_no_estimates_gives_zero_average() {
        let source = FakeSource::default().with(
            "Ruby",
            vec![json!({"estimate": null}), json!({})],
            340,
        );
        let report = aggregate(&["Ruby"], &source, &EstimateField).await;
        assert_eq!(
            report.get("Ruby"),
            Some(&LanguageStats {
                vacancies_found: 340,
                vacancies_processed: 0,
                average_salary: 0,
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_posting_skips_only_that_language() {
        let source = FakeSource::default()
            .with(
                "Java",
                vec![json!({"estimate": 10.0}), json!({"estimate": "lots"})],
                2,
            )
            .with("Kotlin", vec![json!({"estimate": 30.0})], 1);
        let report = aggregate(&["Java", "Kotlin"], &source, &EstimateField).await;
        assert_eq!(report.get("Java"), None);
        assert_eq!(report.get("Kotlin").unwrap().average_salary, 30);
        assert_eq!(
            *source.asked.lock().unwrap(),
            vec!["Java".to_owned(), "Kotlin".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_interrupted_search_keeps_partial_postings() {
        let source = FakeSource::default()
            .with(
                "C++",
                vec![json!({"estimate": 90.0}), json!({"estimate": 110.0})],
                400,
            )
            .cut_short("C++")
            .cut_short("Swift");
        let report = aggregate(&["C++", "Swift"], &source, &EstimateField).await;
        assert_eq!(
            report.get("C++"),
            Some(&LanguageStats {
                vacancies_found: 400,
                vacancies_processed: 2,
                average_salary: 100,
            })
        );
        assert_eq!(report.get("Swift"), None);
    }

    #[tokio::test]
    async fn test_report_follows_requested_order() {
        let source = FakeSource::default()
            .with("PHP", vec![json!({"estimate": 1.0})], 1)
            .with("C#", vec![json!({"estimate": 2.0})], 1)
            .with("Swift", vec![json!({"estimate": 3.0})], 1);
        let languages = vec!["Swift".to_owned(), "PHP".to_owned(), "C#".to_owned()];
        let report = aggregate(&languages, &source, &EstimateField).await;
        assert_eq!(
            report.languages().collect::<Vec<_>>(),
            vec!["Swift", "PHP", "C#"]
        );
    }

    #[tokio::test]
    async fn test_headhunter_postings() {
        let source = FakeSource::default().with(
            "JavaScript",
            vec![
                json!({"salary": {"from": 100000, "to": 200000, "currency": "RUR"}}),
                json!({"salary": {"from": 100000, "to": null, "currency": "RUR"}}),
                json!({"salary": {"from": 3000, "to": 5000, "currency": "USD"}}),
                json!({"salary": {"from": "3k", "to": 5000, "currency": "USD"}}),
                json!({"salary": null}),
            ],
            1500,
        );
        let report = aggregate(&["JavaScript"], &source, &HeadHunterSalary).await;
        assert_eq!(
            report.get("JavaScript"),
            Some(&LanguageStats {
                vacancies_found: 1500,
                vacancies_processed: 2,
                average_salary: 135000,
            })
        );
    }
}
