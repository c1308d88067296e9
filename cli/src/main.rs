mod config;
mod survey;
mod table;

use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;

use crate::config::{Cli, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = match Settings::try_from(Cli::parse()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let surveys = match survey::prepare(&settings) {
        Ok(surveys) => surveys,
        Err(e) => {
            log::error!("Failed to set up job site clients: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut reports = Vec::with_capacity(surveys.len());
    for survey in &surveys {
        let report = survey.run(&settings.languages).await;
        if settings.json {
            reports.push(report);
        } else {
            println!("\n{}", table::render(survey.title(), &report.languages));
        }
    }
    if settings.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize reports: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
