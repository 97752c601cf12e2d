//! Prompt constants and prompt building for the extraction pipeline.
//!
//! Prompt building is a pure function of (page text, style): identical inputs
//! produce byte-identical prompts. The JSON template below is advisory text
//! for the model; the schema it describes is enforced separately in
//! `extraction::models`.

use std::str::FromStr;

/// System prompt sent with every extraction request.
pub const SYSTEM_PROMPT: &str =
    "You are a smart assistant that extracts the requested information accurately.";

/// JSON-shape example substituted into the user prompt. The model is asked to
/// mirror this structure exactly.
pub const JSON_TEMPLATE: &str = r#"{
    "data": [
        {
            "Highest_Qualification_Held": "",
            "Experience_in_Years": 0,
            "Current_Job_Title": "",
            "Current_Employer": "",
            "Skill_Set": "",
            "Experience_Details": [
                {
                    "Company": "",
                    "I_currently_work_here": false,
                    "Summary": "",
                    "Work_Duration": {
                        "from": "",
                        "to": ""
                    },
                    "Occupation_Title": ""
                }
            ],
            "Educational_Details": [
                {
                    "Institute_School": "",
                    "Currently_pursuing": false,
                    "Degree": "",
                    "Duration": {
                        "from": "",
                        "to": ""
                    }
                }
            ]
        }
    ]
}"#;

/// User prompt template. Replace `{template}` and `{data}` before sending.
const USER_PROMPT_TEMPLATE: &str = r#"Process the raw data below and extract the following details:
1. General Info:
   - Highest Qualification Held
   - Experience in Years
   - Current Job Title
   - Current Employer
   - Skill Set
2. Experience Details:
   - Company
   - Currently working there (True/False)
   - Summary
   - Work Duration (from/to)
   - Occupation Title
3. Educational Details:
   - Institute/School
   - Currently pursuing (True/False)
   - Degree
   - Duration (from/to)

Format the output as a JSON object matching this template:
{template}

Notes:
1. Use NILL for missing values. If "from" or "to" dates are missing, use the current date.
2. If multiple entries exist, append each separately.
3. Strictly follow the given instructions and JSON format.

Raw Data:
{data}"#;

/// Extra instruction appended by the strict-JSON variant.
const STRICT_JSON_NOTE: &str = "\n4. Respond with the JSON object ONLY. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences.";

/// Which of the two prompt variants to use. The variants differ only in
/// whether the JSON-only instruction is appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptStyle {
    #[default]
    Standard,
    StrictJson,
}

impl FromStr for PromptStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PromptStyle::Standard),
            "strict-json" | "strict_json" => Ok(PromptStyle::StrictJson),
            other => Err(anyhow::anyhow!("unknown prompt style '{other}'")),
        }
    }
}

/// Builds the user prompt from scraped page text.
pub fn build_prompt(style: PromptStyle, page_text: &str) -> String {
    let prompt = USER_PROMPT_TEMPLATE
        .replace("{template}", JSON_TEMPLATE)
        .replace("{data}", page_text);

    match style {
        PromptStyle::Standard => prompt,
        // The strict variant slots its extra note after note 3.
        PromptStyle::StrictJson => prompt.replacen(
            "3. Strictly follow the given instructions and JSON format.",
            &format!(
                "3. Strictly follow the given instructions and JSON format.{STRICT_JSON_NOTE}"
            ),
            1,
        ),
    }
}
