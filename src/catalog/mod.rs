//! Categorical catalog: bidirectional code <-> label lookups.
//!
//! Every categorical request field is stored as a short code (`"US"`, `"MI"`,
//! `"L"`), while people pick options by their display label. The catalog holds
//! one table per domain and guarantees that, within a domain, both codes and
//! labels are unique, so each direction of the lookup is total and unambiguous.
//!
//! The job-title vocabulary and the known survey years are not code/label
//! domains (the value is its own label); they live next to the tables as plain
//! lists.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod tables;

/// One categorical domain of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Country,
    ExperienceLevel,
    EmploymentType,
    CompanySize,
    SalaryCurrency,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Country,
        Domain::ExperienceLevel,
        Domain::EmploymentType,
        Domain::CompanySize,
        Domain::SalaryCurrency,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Domain::Country => "country",
            Domain::ExperienceLevel => "experience level",
            Domain::EmploymentType => "employment type",
            Domain::CompanySize => "company size",
            Domain::SalaryCurrency => "salary currency",
        }
    }

    /// The built-in table backing this domain.
    pub fn standard_table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Domain::Country => tables::COUNTRIES,
            Domain::ExperienceLevel => tables::EXPERIENCE_LEVELS,
            Domain::EmploymentType => tables::EMPLOYMENT_TYPES,
            Domain::CompanySize => tables::COMPANY_SIZES,
            Domain::SalaryCurrency => tables::SALARY_CURRENCIES,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which side of a mapping was duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    Code,
    Label,
}

impl fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateKind::Code => f.write_str("code"),
            DuplicateKind::Label => f.write_str("label"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown {domain} label '{label}'")]
    UnknownLabel { domain: Domain, label: String },

    #[error("unknown {domain} code '{code}'")]
    UnknownCode { domain: Domain, code: String },

    #[error("catalog integrity violated: duplicate {kind} '{value}' in {domain} table")]
    Integrity {
        domain: Domain,
        kind: DuplicateKind,
        value: String,
    },
}

/// A single `(code, label)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMapping {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
struct DomainTable {
    entries: Vec<CategoryMapping>,
    by_code: HashMap<String, usize>,
    by_label: HashMap<String, usize>,
}

impl DomainTable {
    fn push(&mut self, domain: Domain, code: &str, label: &str) -> Result<(), CatalogError> {
        if self.by_code.contains_key(code) {
            return Err(CatalogError::Integrity {
                domain,
                kind: DuplicateKind::Code,
                value: code.to_string(),
            });
        }
        if self.by_label.contains_key(label) {
            return Err(CatalogError::Integrity {
                domain,
                kind: DuplicateKind::Label,
                value: label.to_string(),
            });
        }

        let idx = self.entries.len();
        self.by_code.insert(code.to_string(), idx);
        self.by_label.insert(label.to_string(), idx);
        self.entries.push(CategoryMapping {
            code: code.to_string(),
            label: label.to_string(),
        });
        Ok(())
    }
}

/// Validated code <-> label tables for all categorical domains.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    tables: HashMap<Domain, DomainTable>,
}

impl CategoryCatalog {
    /// Build the catalog from the built-in domain tables.
    pub fn standard() -> Result<Self, CatalogError> {
        let tables: Vec<_> = Domain::ALL
            .iter()
            .map(|&domain| (domain, domain.standard_table()))
            .collect();
        Self::from_tables(&tables)
    }

    /// Build a catalog from declarative `(domain, [(code, label)])` tables.
    ///
    /// A domain listed more than once is treated as one table, so duplicates
    /// across the repeated lists are still rejected.
    pub fn from_tables(tables: &[(Domain, &[(&str, &str)])]) -> Result<Self, CatalogError> {
        let mut out: HashMap<Domain, DomainTable> = HashMap::new();
        for &(domain, pairs) in tables {
            let table = out.entry(domain).or_default();
            for &(code, label) in pairs {
                table.push(domain, code, label)?;
            }
        }
        Ok(Self { tables: out })
    }

    /// Labels of a domain in table order.
    pub fn labels_for(&self, domain: Domain) -> Vec<&str> {
        self.entries(domain).iter().map(|m| m.label.as_str()).collect()
    }

    /// All `(code, label)` pairs of a domain in table order.
    pub fn entries(&self, domain: Domain) -> &[CategoryMapping] {
        self.tables
            .get(&domain)
            .map(|t| t.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn code_for(&self, domain: Domain, label: &str) -> Result<&str, CatalogError> {
        self.tables
            .get(&domain)
            .and_then(|t| t.by_label.get(label).map(|&idx| t.entries[idx].code.as_str()))
            .ok_or_else(|| CatalogError::UnknownLabel {
                domain,
                label: label.to_string(),
            })
    }

    pub fn label_for(&self, domain: Domain, code: &str) -> Result<&str, CatalogError> {
        self.tables
            .get(&domain)
            .and_then(|t| t.by_code.get(code).map(|&idx| t.entries[idx].label.as_str()))
            .ok_or_else(|| CatalogError::UnknownCode {
                domain,
                code: code.to_string(),
            })
    }

    pub fn contains_code(&self, domain: Domain, code: &str) -> bool {
        self.tables
            .get(&domain)
            .is_some_and(|t| t.by_code.contains_key(code))
    }
}

/// Sorted job-title vocabulary.
pub fn job_titles() -> &'static [&'static str] {
    tables::JOB_TITLES
}

pub fn is_known_job_title(title: &str) -> bool {
    tables::JOB_TITLES.contains(&title)
}

/// Survey years a request may refer to.
pub fn work_years() -> &'static [i32] {
    tables::WORK_YEARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_round_trips_every_code() {
        let catalog = CategoryCatalog::standard().unwrap();
        for domain in Domain::ALL {
            let entries = catalog.entries(domain);
            assert!(!entries.is_empty(), "{domain} table is empty");
            for m in entries {
                let label = catalog.label_for(domain, &m.code).unwrap();
                assert_eq!(catalog.code_for(domain, label).unwrap(), m.code);
            }
        }
    }

    #[test]
    fn labels_keep_table_order() {
        let catalog = CategoryCatalog::standard().unwrap();
        assert_eq!(
            catalog.labels_for(Domain::CompanySize),
            vec!["Маленькая компания", "Средняя компания", "Большая компания"]
        );
        assert_eq!(catalog.labels_for(Domain::Country).len(), tables::COUNTRIES.len());
    }

    #[test]
    fn known_lookups() {
        let catalog = CategoryCatalog::standard().unwrap();
        assert_eq!(catalog.code_for(Domain::SalaryCurrency, "Доллар США").unwrap(), "USD");
        assert_eq!(catalog.label_for(Domain::ExperienceLevel, "MI").unwrap(), "Средний");
        assert!(catalog.contains_code(Domain::Country, "US"));
        assert!(!catalog.contains_code(Domain::Country, "XX"));
    }

    #[test]
    fn same_code_in_different_domains_is_allowed() {
        // "SE" is Sweden and a senior experience level; "PT" is Portugal and part-time.
        let catalog = CategoryCatalog::standard().unwrap();
        assert_eq!(catalog.label_for(Domain::Country, "SE").unwrap(), "Швеция");
        assert_eq!(catalog.label_for(Domain::ExperienceLevel, "SE").unwrap(), "Старший");
        assert_eq!(catalog.label_for(Domain::EmploymentType, "PT").unwrap(), "Частичная занятость");
    }

    #[test]
    fn unknown_lookups_fail() {
        let catalog = CategoryCatalog::standard().unwrap();
        assert_eq!(
            catalog.code_for(Domain::CompanySize, "Huge"),
            Err(CatalogError::UnknownLabel {
                domain: Domain::CompanySize,
                label: "Huge".to_string(),
            })
        );
        assert!(matches!(
            catalog.label_for(Domain::Country, "ZZ"),
            Err(CatalogError::UnknownCode { .. })
        ));
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let pairs: &[(&str, &str)] = &[("S", "Small"), ("M", "Small")];
        let err = CategoryCatalog::from_tables(&[(Domain::CompanySize, pairs)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Integrity {
                domain: Domain::CompanySize,
                kind: DuplicateKind::Label,
                value: "Small".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_code_is_rejected_across_repeated_domain_lists() {
        let first: &[(&str, &str)] = &[("S", "Small")];
        let second: &[(&str, &str)] = &[("S", "Tiny")];
        let err = CategoryCatalog::from_tables(&[
            (Domain::CompanySize, first),
            (Domain::CompanySize, second),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Integrity {
                kind: DuplicateKind::Code,
                ..
            }
        ));
    }

    #[test]
    fn vocabulary_is_sorted_and_contains_defaults() {
        let titles = job_titles();
        assert!(titles.windows(2).all(|w| w[0] < w[1]));
        assert!(is_known_job_title("Data Scientist"));
        assert!(!is_known_job_title("Astronaut"));
        assert_eq!(work_years().last(), Some(&2024));
    }
}
