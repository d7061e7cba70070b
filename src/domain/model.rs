use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named intensity band of a graph cell, derived from its 0-4 level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContribLevel {
    None,
    FirstQuartile,
    SecondQuartile,
    ThirdQuartile,
    FourthQuartile,
    /// Level outside 0-4; serialized as an empty string.
    Unrecognized,
}

impl ContribLevel {
    pub fn from_level(level: i64) -> Self {
        match level {
            0 => ContribLevel::None,
            1 => ContribLevel::FirstQuartile,
            2 => ContribLevel::SecondQuartile,
            3 => ContribLevel::ThirdQuartile,
            4 => ContribLevel::FourthQuartile,
            _ => ContribLevel::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContribLevel::None => "none",
            ContribLevel::FirstQuartile => "first_quartile",
            ContribLevel::SecondQuartile => "second_quartile",
            ContribLevel::ThirdQuartile => "third_quartile",
            ContribLevel::FourthQuartile => "fourth_quartile",
            ContribLevel::Unrecognized => "",
        }
    }
}

impl Serialize for ContribLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContribLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "none" => ContribLevel::None,
            "first_quartile" => ContribLevel::FirstQuartile,
            "second_quartile" => ContribLevel::SecondQuartile,
            "third_quartile" => ContribLevel::ThirdQuartile,
            "fourth_quartile" => ContribLevel::FourthQuartile,
            _ => ContribLevel::Unrecognized,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u64,
    pub level: i64,
    pub day_of_week: u32,
    pub week_of_year: u32,
    pub contrib_level: ContribLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionGraph {
    pub username: String,
    pub total_contributions: u64,
    pub years: Vec<i32>,
    pub days: Vec<ContributionDay>,
}

/// One table-cell match, exactly as it appeared in the page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDay {
    pub date: String,
    pub level: String,
    pub text: String,
}

/// Everything the extractor pulled out of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPage {
    pub total: Option<u64>,
    pub cells: Vec<RawDay>,
}
