//! Request records.
//!
//! A request enters as a `RawFeatures` (whatever the caller typed, one CSV row,
//! CLI flags) and leaves validation as a `FeatureRecord`. Only the latter is
//! handed to models; it cannot be constructed without passing every check and
//! it is never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{self, CatalogError, CategoryCatalog, Domain};

/// Names of the nine request fields, as referenced by serialized pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    WorkYear,
    ExperienceLevel,
    EmploymentType,
    JobTitle,
    SalaryCurrency,
    EmployeeResidence,
    RemoteRatio,
    CompanyLocation,
    CompanySize,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::WorkYear,
        Feature::ExperienceLevel,
        Feature::EmploymentType,
        Feature::JobTitle,
        Feature::SalaryCurrency,
        Feature::EmployeeResidence,
        Feature::RemoteRatio,
        Feature::CompanyLocation,
        Feature::CompanySize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::WorkYear => "work_year",
            Feature::ExperienceLevel => "experience_level",
            Feature::EmploymentType => "employment_type",
            Feature::JobTitle => "job_title",
            Feature::SalaryCurrency => "salary_currency",
            Feature::EmployeeResidence => "employee_residence",
            Feature::RemoteRatio => "remote_ratio",
            Feature::CompanyLocation => "company_location",
            Feature::CompanySize => "company_size",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Feature::WorkYear | Feature::RemoteRatio)
    }

    /// Catalog domain the field's codes belong to, if any.
    pub fn domain(self) -> Option<Domain> {
        match self {
            Feature::ExperienceLevel => Some(Domain::ExperienceLevel),
            Feature::EmploymentType => Some(Domain::EmploymentType),
            Feature::SalaryCurrency => Some(Domain::SalaryCurrency),
            Feature::EmployeeResidence | Feature::CompanyLocation => Some(Domain::Country),
            Feature::CompanySize => Some(Domain::CompanySize),
            Feature::WorkYear | Feature::JobTitle | Feature::RemoteRatio => None,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field value as seen by a pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("work_year {0} is not a known survey year")]
    UnknownWorkYear(i32),

    #[error("job_title '{0}' is not in the known vocabulary")]
    UnknownJobTitle(String),

    #[error("remote_ratio {0} must be between 0 and 100")]
    RemoteRatioOutOfRange(i32),

    #[error("invalid {field}: {source}")]
    Category {
        field: Feature,
        #[source]
        source: CatalogError,
    },
}

/// Unvalidated request fields, categorical values given as codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeatures {
    pub work_year: i32,
    pub experience_level: String,
    pub employment_type: String,
    pub job_title: String,
    pub salary_currency: String,
    pub employee_residence: String,
    pub remote_ratio: i32,
    pub company_location: String,
    pub company_size: String,
}

impl Default for RawFeatures {
    /// A mid-level, full-time data scientist at a large US company, paid in USD.
    fn default() -> Self {
        Self {
            work_year: 2024,
            experience_level: "MI".to_string(),
            employment_type: "FT".to_string(),
            job_title: "Data Scientist".to_string(),
            salary_currency: "USD".to_string(),
            employee_residence: "US".to_string(),
            remote_ratio: 0,
            company_location: "US".to_string(),
            company_size: "L".to_string(),
        }
    }
}

/// Request fields with categorical values given as display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledFeatures {
    pub work_year: i32,
    pub experience_level: String,
    pub employment_type: String,
    pub job_title: String,
    pub salary_currency: String,
    pub employee_residence: String,
    pub remote_ratio: i32,
    pub company_location: String,
    pub company_size: String,
}

impl LabeledFeatures {
    /// Translate every label into its catalog code.
    pub fn to_codes(&self, catalog: &CategoryCatalog) -> Result<RawFeatures, ValidationError> {
        let code = |field: Feature, label: &str| -> Result<String, ValidationError> {
            let Some(domain) = field.domain() else {
                return Ok(label.to_string());
            };
            catalog
                .code_for(domain, label)
                .map(str::to_string)
                .map_err(|source| ValidationError::Category { field, source })
        };

        Ok(RawFeatures {
            work_year: self.work_year,
            experience_level: code(Feature::ExperienceLevel, &self.experience_level)?,
            employment_type: code(Feature::EmploymentType, &self.employment_type)?,
            job_title: self.job_title.clone(),
            salary_currency: code(Feature::SalaryCurrency, &self.salary_currency)?,
            employee_residence: code(Feature::EmployeeResidence, &self.employee_residence)?,
            remote_ratio: self.remote_ratio,
            company_location: code(Feature::CompanyLocation, &self.company_location)?,
            company_size: code(Feature::CompanySize, &self.company_size)?,
        })
    }
}

/// A validated, code-encoded prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    work_year: i32,
    experience_level: String,
    employment_type: String,
    job_title: String,
    salary_currency: String,
    employee_residence: String,
    remote_ratio: i32,
    company_location: String,
    company_size: String,
}

impl FeatureRecord {
    /// Validate raw fields against the known years, the job-title vocabulary,
    /// the remote-ratio range and the catalog domains.
    pub fn validate(raw: RawFeatures, catalog: &CategoryCatalog) -> Result<Self, ValidationError> {
        if !catalog::work_years().contains(&raw.work_year) {
            return Err(ValidationError::UnknownWorkYear(raw.work_year));
        }
        if !catalog::is_known_job_title(&raw.job_title) {
            return Err(ValidationError::UnknownJobTitle(raw.job_title));
        }
        if !(0..=100).contains(&raw.remote_ratio) {
            return Err(ValidationError::RemoteRatioOutOfRange(raw.remote_ratio));
        }

        let record = Self {
            work_year: raw.work_year,
            experience_level: raw.experience_level,
            employment_type: raw.employment_type,
            job_title: raw.job_title,
            salary_currency: raw.salary_currency,
            employee_residence: raw.employee_residence,
            remote_ratio: raw.remote_ratio,
            company_location: raw.company_location,
            company_size: raw.company_size,
        };

        for field in Feature::ALL {
            let (Some(domain), FeatureValue::Categorical(code)) = (field.domain(), record.value(field)) else {
                continue;
            };
            // `label_for` doubles as the membership check and yields the typed error.
            catalog
                .label_for(domain, code)
                .map_err(|source| ValidationError::Category { field, source })?;
        }

        Ok(record)
    }

    /// Look up one field by name.
    pub fn value(&self, feature: Feature) -> FeatureValue<'_> {
        match feature {
            Feature::WorkYear => FeatureValue::Numeric(f64::from(self.work_year)),
            Feature::ExperienceLevel => FeatureValue::Categorical(&self.experience_level),
            Feature::EmploymentType => FeatureValue::Categorical(&self.employment_type),
            Feature::JobTitle => FeatureValue::Categorical(&self.job_title),
            Feature::SalaryCurrency => FeatureValue::Categorical(&self.salary_currency),
            Feature::EmployeeResidence => FeatureValue::Categorical(&self.employee_residence),
            Feature::RemoteRatio => FeatureValue::Numeric(f64::from(self.remote_ratio)),
            Feature::CompanyLocation => FeatureValue::Categorical(&self.company_location),
            Feature::CompanySize => FeatureValue::Categorical(&self.company_size),
        }
    }

    pub fn work_year(&self) -> i32 {
        self.work_year
    }

    pub fn experience_level(&self) -> &str {
        &self.experience_level
    }

    pub fn employment_type(&self) -> &str {
        &self.employment_type
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn salary_currency(&self) -> &str {
        &self.salary_currency
    }

    pub fn employee_residence(&self) -> &str {
        &self.employee_residence
    }

    pub fn remote_ratio(&self) -> i32 {
        self.remote_ratio
    }

    pub fn company_location(&self) -> &str {
        &self.company_location
    }

    pub fn company_size(&self) -> &str {
        &self.company_size
    }
}
