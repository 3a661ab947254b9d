//! Command-line parsing for the ensemble salary predictor.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! prediction code. Categorical flags take catalog codes unless `--labels` is
//! given, in which case they take display labels.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::Domain;
use crate::domain::{LabeledFeatures, RawFeatures};
use crate::logging::LogFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "salary", version, about = "Salary prediction from an ensemble of regression models")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log output format (logs go to stderr).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict a salary for one set of job attributes.
    Predict(PredictArgs),
    /// Predict every row of a CSV file.
    Batch(BatchArgs),
    /// Print the normalized model weights.
    Weights,
    /// List the valid values for a request field.
    Catalog(CatalogArgs),
}

/// Where models come from and how they are run.
#[derive(Debug, Args, Clone)]
pub struct EngineArgs {
    /// Directory with the model artifacts (default: $SALARY_MODELS_DIR or ./saved_models).
    #[arg(long, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,

    /// Invoke models one after another instead of in parallel.
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(long, default_value_t = 2024)]
    pub work_year: i32,

    /// Experience level (EN, MI, SE, EX).
    #[arg(long)]
    pub experience_level: Option<String>,

    /// Employment type (FT, CT, FL, PT).
    #[arg(long)]
    pub employment_type: Option<String>,

    #[arg(long, default_value = "Data Scientist")]
    pub job_title: String,

    /// Salary currency (ISO 4217).
    #[arg(long)]
    pub salary_currency: Option<String>,

    /// Employee residence country (ISO 3166 alpha-2).
    #[arg(long)]
    pub employee_residence: Option<String>,

    /// Share of remote work in percent.
    #[arg(long, default_value_t = 0)]
    pub remote_ratio: i32,

    /// Company location country (ISO 3166 alpha-2).
    #[arg(long)]
    pub company_location: Option<String>,

    /// Company size (S, M, L).
    #[arg(long)]
    pub company_size: Option<String>,

    /// Interpret categorical flags as display labels instead of codes.
    #[arg(long)]
    pub labels: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    /// Request built from flags; omitted categorical flags use the default codes.
    pub fn raw_features(&self) -> RawFeatures {
        let defaults = RawFeatures::default();
        RawFeatures {
            work_year: self.work_year,
            experience_level: self.experience_level.clone().unwrap_or(defaults.experience_level),
            employment_type: self.employment_type.clone().unwrap_or(defaults.employment_type),
            job_title: self.job_title.clone(),
            salary_currency: self.salary_currency.clone().unwrap_or(defaults.salary_currency),
            employee_residence: self.employee_residence.clone().unwrap_or(defaults.employee_residence),
            remote_ratio: self.remote_ratio,
            company_location: self.company_location.clone().unwrap_or(defaults.company_location),
            company_size: self.company_size.clone().unwrap_or(defaults.company_size),
        }
    }

    /// With `--labels`: explicitly given flags are labels, omitted ones are
    /// still default codes and are passed through `default_label`.
    pub fn labeled_features(&self, default_label: impl Fn(Domain, &str) -> String) -> LabeledFeatures {
        let defaults = RawFeatures::default();
        let pick = |flag: &Option<String>, domain: Domain, code: &str| {
            flag.clone().unwrap_or_else(|| default_label(domain, code))
        };
        LabeledFeatures {
            work_year: self.work_year,
            experience_level: pick(&self.experience_level, Domain::ExperienceLevel, &defaults.experience_level),
            employment_type: pick(&self.employment_type, Domain::EmploymentType, &defaults.employment_type),
            job_title: self.job_title.clone(),
            salary_currency: pick(&self.salary_currency, Domain::SalaryCurrency, &defaults.salary_currency),
            employee_residence: pick(&self.employee_residence, Domain::Country, &defaults.employee_residence),
            remote_ratio: self.remote_ratio,
            company_location: pick(&self.company_location, Domain::Country, &defaults.company_location),
            company_size: pick(&self.company_size, Domain::CompanySize, &defaults.company_size),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// CSV with one request per row (categorical fields as codes).
    #[arg(long, value_name = "CSV")]
    pub input: PathBuf,

    /// Write per-row results to this CSV.
    #[arg(long, value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CatalogArgs {
    #[arg(value_enum)]
    pub list: CatalogList,
}

/// Listable value sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogList {
    Country,
    ExperienceLevel,
    EmploymentType,
    CompanySize,
    SalaryCurrency,
    JobTitles,
    WorkYears,
}

impl CatalogList {
    pub fn domain(self) -> Option<Domain> {
        match self {
            CatalogList::Country => Some(Domain::Country),
            CatalogList::ExperienceLevel => Some(Domain::ExperienceLevel),
            CatalogList::EmploymentType => Some(Domain::EmploymentType),
            CatalogList::CompanySize => Some(Domain::CompanySize),
            CatalogList::SalaryCurrency => Some(Domain::SalaryCurrency),
            CatalogList::JobTitles | CatalogList::WorkYears => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_defaults_match_default_request() {
        let cli = Cli::parse_from(["salary", "predict"]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.raw_features(), RawFeatures::default());
        assert!(!args.engine.sequential);
    }

    #[test]
    fn predict_flags_override_defaults() {
        let cli = Cli::parse_from([
            "salary",
            "predict",
            "--experience-level",
            "SE",
            "--company-location",
            "DE",
            "--remote-ratio",
            "100",
            "--models-dir",
            "/tmp/models",
            "--sequential",
        ]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let raw = args.raw_features();
        assert_eq!(raw.experience_level, "SE");
        assert_eq!(raw.company_location, "DE");
        assert_eq!(raw.remote_ratio, 100);
        assert_eq!(raw.company_size, "L");
        assert_eq!(args.engine.models_dir, Some(PathBuf::from("/tmp/models")));
        assert!(args.engine.sequential);
    }

    #[test]
    fn labels_mode_keeps_given_labels_and_translates_defaults() {
        let cli = Cli::parse_from(["salary", "predict", "--labels", "--company-size", "Средняя компания"]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let labeled = args.labeled_features(|domain, code| format!("{domain}:{code}"));
        assert_eq!(labeled.company_size, "Средняя компания");
        assert_eq!(labeled.experience_level, "experience level:MI");
    }

    #[test]
    fn catalog_lists_parse() {
        let cli = Cli::parse_from(["salary", "catalog", "job-titles"]);
        let Command::Catalog(args) = cli.command else {
            panic!("expected catalog");
        };
        assert_eq!(args.list, CatalogList::JobTitles);
        assert_eq!(CatalogList::Country.domain(), Some(Domain::Country));
    }
}
