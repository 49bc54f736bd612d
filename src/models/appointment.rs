use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields of the appointment form. Each variant owns the `name` attribute used in
/// the markup, which doubles as the column label on the intake sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "Full Name")]
    FullName,
    #[serde(rename = "Phone Number")]
    PhoneNumber,
    #[serde(rename = "Email Address")]
    EmailAddress,
    #[serde(rename = "Preferred Date")]
    PreferredDate,
    #[serde(rename = "Preferred Time")]
    PreferredTime,
    #[serde(rename = "Reason for Visit")]
    ReasonForVisit,
    #[serde(rename = "Additional Information")]
    AdditionalInformation,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::FullName,
        FormField::PhoneNumber,
        FormField::EmailAddress,
        FormField::PreferredDate,
        FormField::PreferredTime,
        FormField::ReasonForVisit,
        FormField::AdditionalInformation,
    ];

    pub const REQUIRED: [FormField; 5] = [
        FormField::FullName,
        FormField::PhoneNumber,
        FormField::PreferredDate,
        FormField::PreferredTime,
        FormField::ReasonForVisit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::PhoneNumber => "Phone Number",
            FormField::EmailAddress => "Email Address",
            FormField::PreferredDate => "Preferred Date",
            FormField::PreferredTime => "Preferred Time",
            FormField::ReasonForVisit => "Reason for Visit",
            FormField::AdditionalInformation => "Additional Information",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

/// Raw values captured from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    values: BTreeMap<FormField, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from `(name, value)` pairs. Names that are not form fields
    /// are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .filter_map(|(k, v)| FormField::from_name(k.as_ref()).map(|f| (f, v.into())))
            .collect();
        Self { values }
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// A field counts as filled in as soon as it holds any character, spaces included.
    pub fn is_missing(&self, field: FormField) -> bool {
        self.get(field).is_empty()
    }

    pub fn optional(&self, field: FormField) -> Option<String> {
        let value = self.get(field);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// A validated request. Lives only for the duration of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRequest {
    pub full_name: String,
    pub phone_number: String,
    pub email_address: Option<String>,
    /// As entered; validation has already checked it is today or later.
    pub preferred_date: String,
    pub preferred_time: String,
    pub reason_for_visit: String,
    pub additional_information: Option<String>,
}

impl AppointmentRequest {
    pub fn into_payload(self, submitted_at: impl Into<String>) -> IntakePayload {
        IntakePayload {
            data: IntakeRecord {
                full_name: self.full_name,
                phone_number: self.phone_number,
                email_address: self.email_address.unwrap_or_default(),
                preferred_date: self.preferred_date,
                preferred_time: self.preferred_time,
                reason_for_visit: self.reason_for_visit,
                additional_information: self.additional_information.unwrap_or_default(),
                submitted_at: submitted_at.into(),
            },
        }
    }
}

/// Body posted to the intake sheet: `{ "data": { ...columns } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakePayload {
    pub data: IntakeRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Phone Number")]
    pub phone_number: String,
    #[serde(rename = "Email Address")]
    pub email_address: String,
    #[serde(rename = "Preferred Date")]
    pub preferred_date: String,
    #[serde(rename = "Preferred Time")]
    pub preferred_time: String,
    #[serde(rename = "Reason for Visit")]
    pub reason_for_visit: String,
    #[serde(rename = "Additional Information")]
    pub additional_information: String,
    #[serde(rename = "Submitted At")]
    pub submitted_at: String,
}

/// How a delivered submission ended, fed back into the page once the endpoint answers.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted(serde_json::Value),
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }
}
