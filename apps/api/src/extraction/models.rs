//! Typed model of the documented extraction schema.
//!
//! Field names mirror the JSON template in `extraction::prompts` exactly, so
//! a well-behaved model response deserializes directly. The prompt instructs
//! the model to use the `NILL` sentinel for missing values, which means
//! nominally numeric fields may arrive as strings; `Nillable` absorbs that.

use serde::{Deserialize, Serialize};

/// Top-level document the model is asked to produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionDocument {
    pub data: Vec<CandidateRecord>,
}

/// One extracted person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "Highest_Qualification_Held")]
    pub highest_qualification_held: String,
    /// Numeric in the template, but the NILL sentinel makes it string-or-number.
    #[serde(rename = "Experience_in_Years")]
    pub experience_in_years: Nillable,
    #[serde(rename = "Current_Job_Title")]
    pub current_job_title: String,
    #[serde(rename = "Current_Employer")]
    pub current_employer: String,
    #[serde(rename = "Skill_Set")]
    pub skill_set: String,
    #[serde(rename = "Experience_Details", default)]
    pub experience_details: Vec<ExperienceEntry>,
    #[serde(rename = "Educational_Details", default)]
    pub educational_details: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "I_currently_work_here")]
    pub currently_work_here: bool,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Work_Duration")]
    pub work_duration: DateRange,
    #[serde(rename = "Occupation_Title")]
    pub occupation_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(rename = "Institute_School")]
    pub institute_school: String,
    #[serde(rename = "Currently_pursuing")]
    pub currently_pursuing: bool,
    #[serde(rename = "Degree")]
    pub degree: String,
    #[serde(rename = "Duration")]
    pub duration: DateRange,
}

/// A from/to pair. The prompt asks the model to fill open ends with the
/// current date, so both sides are plain strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// A number that may instead be the `NILL` sentinel (or any other string the
/// model produced for a missing value).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Nillable {
    Number(f64),
    Text(String),
}

impl Nillable {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Nillable::Number(n) => Some(*n),
            Nillable::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::prompts::JSON_TEMPLATE;

    #[test]
    fn test_template_example_deserializes() {
        let doc: ExtractionDocument = serde_json::from_str(JSON_TEMPLATE).unwrap();
        assert_eq!(doc.data.len(), 1);
        assert_eq!(doc.data[0].experience_in_years, Nillable::Number(0.0));
        assert_eq!(doc.data[0].experience_details.len(), 1);
        assert_eq!(doc.data[0].educational_details.len(), 1);
    }

    #[test]
    fn test_nill_sentinel_in_numeric_field() {
        let body = r#"{
            "data": [{
                "Highest_Qualification_Held": "PhD",
                "Experience_in_Years": "NILL",
                "Current_Job_Title": "Physicist",
                "Current_Employer": "Acme Corp",
                "Skill_Set": "NILL",
                "Experience_Details": [],
                "Educational_Details": []
            }]
        }"#;
        let doc: ExtractionDocument = serde_json::from_str(body).unwrap();
        let record = &doc.data[0];
        assert_eq!(record.experience_in_years, Nillable::Text("NILL".into()));
        assert!(record.experience_in_years.as_number().is_none());
        assert_eq!(record.skill_set, "NILL");
    }

    #[test]
    fn test_populated_record_deserializes() {
        let body = r#"{
            "data": [{
                "Highest_Qualification_Held": "PhD in Physics",
                "Experience_in_Years": 5,
                "Current_Job_Title": "Research Scientist",
                "Current_Employer": "Acme Corp",
                "Skill_Set": "Physics, Simulation",
                "Experience_Details": [{
                    "Company": "Acme Corp",
                    "I_currently_work_here": true,
                    "Summary": "Applied physics research",
                    "Work_Duration": {"from": "2021-01-01", "to": "2026-08-31"},
                    "Occupation_Title": "Research Scientist"
                }],
                "Educational_Details": [{
                    "Institute_School": "MIT",
                    "Currently_pursuing": false,
                    "Degree": "PhD",
                    "Duration": {"from": "2015-09-01", "to": "2020-06-01"}
                }]
            }]
        }"#;
        let doc: ExtractionDocument = serde_json::from_str(body).unwrap();
        let record = &doc.data[0];
        assert_eq!(record.experience_in_years.as_number(), Some(5.0));
        assert!(record.experience_details[0].currently_work_here);
        assert_eq!(record.educational_details[0].duration.from, "2015-09-01");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        // A response without the data wrapper must not pass validation.
        let body = r#"{"Highest_Qualification_Held": "PhD"}"#;
        assert!(serde_json::from_str::<ExtractionDocument>(body).is_err());
    }
}
