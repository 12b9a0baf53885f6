// src/specs/categories.rs
//! The ranking categories published each year, and where each one lives.

use crate::config::consts::BASE_URL;
use crate::core::sanitize::file_stem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Display label, also the `Category` column value.
    pub label: &'static str,
    /// Page name under `<BASE_URL>/<year>/`, without `.html`.
    pub page: &'static str,
}

impl Category {
    pub fn url(&self, year: u16) -> String {
        format!("{BASE_URL}/{year}/{}.html", self.page)
    }

    pub fn slug(&self) -> String {
        file_stem(self.label)
    }
}

pub static CATALOGUE: &[Category] = &[
    Category { label: "Overall",                 page: "OverallRanking" },
    Category { label: "University",              page: "UniversityRanking" },
    Category { label: "College",                 page: "CollegeRanking" },
    Category { label: "Research",                page: "ResearchRanking" },
    Category { label: "Engineering",             page: "EngineeringRanking" },
    Category { label: "Management",              page: "ManagementRanking" },
    Category { label: "Pharmacy",                page: "PharmacyRanking" },
    Category { label: "Medical",                 page: "MedicalRanking" },
    Category { label: "Dental",                  page: "DentalRanking" },
    Category { label: "Architecture",            page: "ArchitectureRanking" },
    Category { label: "Law",                     page: "LawRanking" },
    Category { label: "Agriculture",             page: "AgricultureRanking" },
    Category { label: "State Public University", page: "STATEPUBLICUNIVERSITYRanking" },
];

/// Look up by label or slug, ignoring ASCII case.
pub fn find(key: &str) -> Option<&'static Category> {
    let key = key.trim();
    CATALOGUE
        .iter()
        .find(|c| c.label.eq_ignore_ascii_case(key) || c.slug().eq_ignore_ascii_case(key))
}

/// Catalogue index; unknown categories sort last.
pub fn position(category: &Category) -> usize {
    CATALOGUE
        .iter()
        .position(|c| c.label == category.label)
        .unwrap_or(usize::MAX)
}
