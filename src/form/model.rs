//! Per-page field sets and the submission payload.
//!
//! Field values are read from the [`FormSurface`] once, at the boundary, into
//! plain structs. Validation and submission only ever see these structs.

use serde::{Deserialize, Serialize};

use crate::surface::FormSurface;

use super::state::FormStep;

/// Element ids of the form fields.
pub mod field_ids {
    pub const NAME: &str = "name";
    pub const GENDER: &str = "gender";
    pub const AGE: &str = "age";
    pub const CONTACT: &str = "contact";
    pub const LOCATION: &str = "location";
    pub const INDUSTRY: &str = "industry";
    pub const JOB_ROLE: &str = "job_role";
    pub const PREFERENCE_TYPE: &str = "preference_type";
    pub const INVESTMENT_PREFERENCE: &str = "investment_preference";
    pub const INCUBATION_INFO: &str = "incubation_info";
    pub const INVESTMENT_EXPERIENCE: &str = "investment_experience";
    pub const TECH_ADAPTABILITY: &str = "tech_adaptability";
    pub const HIGH_NET_WORTH: &str = "high_net_worth";
    pub const EXPECTED_INVESTMENT: &str = "expected_investment";
}

/// Which optional detail group the preference selector activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceType {
    /// "RWA投资"
    Investment,
    /// "RWA孵化"
    Incubation,
    /// Empty or any other value.
    Unselected,
}

impl PreferenceType {
    pub const INVESTMENT: &'static str = "RWA投资";
    pub const INCUBATION: &'static str = "RWA孵化";

    /// Classify a raw selector value. Matching is exact.
    pub fn from_value(value: &str) -> Self {
        match value {
            Self::INVESTMENT => Self::Investment,
            Self::INCUBATION => Self::Incubation,
            _ => Self::Unselected,
        }
    }
}

fn text(surface: &dyn FormSurface, id: &str) -> String {
    surface.field_value(id).trim().to_string()
}

/// Page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub contact: String,
}

impl BasicInfo {
    pub fn read(surface: &dyn FormSurface) -> Self {
        Self {
            name: text(surface, field_ids::NAME),
            // Select value, taken as-is.
            gender: surface.field_value(field_ids::GENDER),
            age: text(surface, field_ids::AGE),
            contact: text(surface, field_ids::CONTACT),
        }
    }
}

/// Page 2. `location` is collected but optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerInfo {
    pub location: String,
    pub industry: String,
    pub job_role: String,
}

impl CareerInfo {
    pub fn read(surface: &dyn FormSurface) -> Self {
        Self {
            location: text(surface, field_ids::LOCATION),
            industry: text(surface, field_ids::INDUSTRY),
            job_role: text(surface, field_ids::JOB_ROLE),
        }
    }
}

/// Page 3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceInfo {
    pub preference_type: String,
    pub investment_preference: String,
    pub incubation_info: String,
    pub investment_experience: String,
    pub tech_adaptability: String,
}

impl PreferenceInfo {
    pub fn read(surface: &dyn FormSurface) -> Self {
        Self {
            preference_type: surface.field_value(field_ids::PREFERENCE_TYPE),
            investment_preference: text(surface, field_ids::INVESTMENT_PREFERENCE),
            incubation_info: text(surface, field_ids::INCUBATION_INFO),
            investment_experience: text(surface, field_ids::INVESTMENT_EXPERIENCE),
            tech_adaptability: text(surface, field_ids::TECH_ADAPTABILITY),
        }
    }
}

/// Page 4. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInfo {
    pub high_net_worth: String,
    pub expected_investment: String,
}

impl ExtraInfo {
    pub fn read(surface: &dyn FormSurface) -> Self {
        Self {
            high_net_worth: text(surface, field_ids::HIGH_NET_WORTH),
            expected_investment: text(surface, field_ids::EXPECTED_INVESTMENT),
        }
    }
}

/// Field values of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageData {
    Basic(BasicInfo),
    Career(CareerInfo),
    Preference(PreferenceInfo),
    Extra(ExtraInfo),
}

impl PageData {
    /// Read the fields of `step` from the surface.
    pub fn read(step: FormStep, surface: &dyn FormSurface) -> Self {
        match step {
            FormStep::Basic => Self::Basic(BasicInfo::read(surface)),
            FormStep::Career => Self::Career(CareerInfo::read(surface)),
            FormStep::Preference => Self::Preference(PreferenceInfo::read(surface)),
            FormStep::Extra => Self::Extra(ExtraInfo::read(surface)),
        }
    }

    pub fn step(&self) -> FormStep {
        match self {
            Self::Basic(_) => FormStep::Basic,
            Self::Career(_) => FormStep::Career,
            Self::Preference(_) => FormStep::Preference,
            Self::Extra(_) => FormStep::Extra,
        }
    }
}

/// JSON body of `POST /submit_step`: the page's fields plus its `step` number.
///
/// Built per request and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSubmission {
    pub step: FormStep,
    #[serde(flatten)]
    pub data: PageData,
}

impl From<PageData> for StepSubmission {
    fn from(data: PageData) -> Self {
        Self {
            step: data.step(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::surface::HeadlessPage;

    #[test]
    fn preference_type_is_exact_match() {
        assert_eq!(PreferenceType::from_value("RWA投资"), PreferenceType::Investment);
        assert_eq!(PreferenceType::from_value("RWA孵化"), PreferenceType::Incubation);
        assert_eq!(PreferenceType::from_value(""), PreferenceType::Unselected);
        assert_eq!(PreferenceType::from_value(" RWA投资"), PreferenceType::Unselected);
        assert_eq!(PreferenceType::from_value("其他"), PreferenceType::Unselected);
    }

    #[test]
    fn read_trims_text_but_not_selects() {
        let page = HeadlessPage::intake_form();
        page.set_field(field_ids::NAME, "  张三 ");
        page.set_field(field_ids::GENDER, " 男");
        page.set_field(field_ids::CONTACT, " 13800000000\n");

        let basic = BasicInfo::read(&page);
        assert_eq!(basic.name, "张三");
        assert_eq!(basic.gender, " 男");
        assert_eq!(basic.contact, "13800000000");
        assert_eq!(basic.age, "");
    }

    #[test]
    fn submission_carries_step_discriminant() {
        let body = StepSubmission::from(PageData::Basic(BasicInfo {
            name: "张三".into(),
            gender: "男".into(),
            age: "30".into(),
            contact: "13800000000".into(),
        }));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "step": 1,
                "name": "张三",
                "gender": "男",
                "age": "30",
                "contact": "13800000000"
            })
        );
    }

    #[test]
    fn preference_submission_fields() {
        let body = StepSubmission::from(PageData::Preference(PreferenceInfo {
            preference_type: "RWA孵化".into(),
            incubation_info: "新能源".into(),
            ..Default::default()
        }));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["step"], 3);
        assert_eq!(value["preference_type"], "RWA孵化");
        assert_eq!(value["incubation_info"], "新能源");
        assert_eq!(value["investment_preference"], "");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }
}
