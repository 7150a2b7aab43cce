//! Profile sub-records.
//!
//! Every string field defaults to `""` so partially filled (or empty `{}`)
//! sub-records read back without loss. Values of the wrong JSON type read as
//! empty instead of failing the record. Enumerated fields serialize as their
//! display string, with `""` meaning "not selected".

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "crate::lenient::record")]
    pub basic: BasicInfo,
    #[serde(deserialize_with = "crate::lenient::record")]
    pub education: Education,
    #[serde(deserialize_with = "crate::lenient::record")]
    pub experience: Experience,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(deserialize_with = "crate::lenient::string")]
    pub first_name: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub last_name: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub year_of_birth: String,
    pub gender: Gender,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub alt_phone: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub pincode: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub domicile_country: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub domicile_state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "crate::lenient::string")]
    pub school: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub course: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub completion_year: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub grade: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub skills: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub projects: String,
}

/// Work experience: two (domain, sub-domain, bracket) slots plus links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "crate::lenient::string")]
    pub domain1: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub sub1: String,
    #[serde(with = "bracket_label")]
    pub years1: Option<ExperienceBracket>,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub domain2: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub sub2: String,
    #[serde(with = "bracket_label")]
    pub years2: Option<ExperienceBracket>,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub linkedin: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub resume: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Unset,
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Unset, Gender::Male, Gender::Female, Gender::Other];

    /// Stored value (`""` for unset).
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unset => "",
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Unset => "Select an option",
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Unknown values read as `Unset`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "other" => Gender::Other,
            _ => Gender::Unset,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = crate::lenient::string(deserializer)?;
        Ok(Gender::from_value(&value))
    }
}

/// Years-of-experience bracket, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExperienceBracket {
    LessThanOne,
    OneToTwo,
    TwoToFour,
    FourToSeven,
    SevenPlus,
}

impl ExperienceBracket {
    pub const ALL: [ExperienceBracket; 5] = [
        ExperienceBracket::LessThanOne,
        ExperienceBracket::OneToTwo,
        ExperienceBracket::TwoToFour,
        ExperienceBracket::FourToSeven,
        ExperienceBracket::SevenPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBracket::LessThanOne => "< 1 year",
            ExperienceBracket::OneToTwo => "1-2 years",
            ExperienceBracket::TwoToFour => "2-4 years",
            ExperienceBracket::FourToSeven => "4-7 years",
            ExperienceBracket::SevenPlus => "7+ years",
        }
    }

    /// Accepts the display label; `"<1 year"` is tolerated for the first bracket.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "< 1 year" | "<1 year" => Some(ExperienceBracket::LessThanOne),
            "1-2 years" => Some(ExperienceBracket::OneToTwo),
            "2-4 years" => Some(ExperienceBracket::TwoToFour),
            "4-7 years" => Some(ExperienceBracket::FourToSeven),
            "7+ years" => Some(ExperienceBracket::SevenPlus),
            _ => None,
        }
    }
}

impl fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

mod bracket_label {
    use super::ExperienceBracket;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<ExperienceBracket>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|b| b.label()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ExperienceBracket>, D::Error> {
        let value = crate::lenient::string(deserializer)?;
        Ok(ExperienceBracket::from_label(&value))
    }
}
