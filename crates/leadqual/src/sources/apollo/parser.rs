use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ApolloRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<ApolloRow>() {
        rows.push(row?);
    }
    Ok(rows)
}

/// One record of an Apollo people export, enriched with company funding and
/// technographic columns. Unknown columns are ignored by the reader.
#[derive(Debug, Deserialize)]
pub(crate) struct ApolloRow {
    #[serde(rename = "Name", default)]
    pub(crate) name: String,
    #[serde(rename = "Title", default)]
    pub(crate) title: String,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    pub(crate) email: Option<String>,
    #[serde(
        rename = "Person Linkedin Url",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) linkedin_url: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    pub(crate) phone: Option<String>,
    #[serde(rename = "Location", default)]
    pub(crate) location: String,
    #[serde(rename = "Company", default)]
    pub(crate) company: String,
    #[serde(rename = "Company Domain", default)]
    pub(crate) company_domain: String,
    #[serde(rename = "Company HQ", default)]
    pub(crate) company_hq: String,
    #[serde(rename = "Company Country", default)]
    pub(crate) company_country: String,
    #[serde(
        rename = "Last Funding Round",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) funding_round: Option<String>,
    #[serde(
        rename = "Last Funding Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) funding_date: Option<String>,
    #[serde(
        rename = "Last Funding Amount",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) funding_amount: Option<String>,
    #[serde(
        rename = "Uses In Vitro Models",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) uses_invitro_models: Option<String>,
    #[serde(
        rename = "Open To NAMs",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) open_to_nams: Option<String>,
}

impl ApolloRow {
    pub(crate) fn funding_date_parsed(&self) -> Option<NaiveDate> {
        self.funding_date.as_deref().and_then(parse_date)
    }

    pub(crate) fn funding_amount_parsed(&self) -> Option<u64> {
        self.funding_amount.as_deref().and_then(parse_amount)
    }

    pub(crate) fn uses_invitro_models_flag(&self) -> bool {
        self.uses_invitro_models.as_deref().is_some_and(is_truthy)
    }

    pub(crate) fn open_to_nams_flag(&self) -> bool {
        self.open_to_nams.as_deref().is_some_and(is_truthy)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn parse_amount(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}

#[cfg(test)]
pub(crate) fn parse_amount_for_tests(value: &str) -> Option<u64> {
    parse_amount(value)
}
