use std::fmt;

pub const SUBJECT_FIELD: &str = "_subject";
pub const ACCEPT_JSON: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "idle",
            SubmitStatus::Sending => "sending",
            SubmitStatus::Success => "success",
            SubmitStatus::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Contact,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] =
        [ContactField::Name, ContactField::Contact, ContactField::Message];

    /// Form field name on the wire.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Contact => "contact",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Имя",
            ContactField::Contact => "Телефон, WhatsApp или Telegram",
            ContactField::Message => "Сообщение",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Contact => &self.contact,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Contact => self.contact = value,
            ContactField::Message => self.message = value,
        }
    }

    /// First required field that is blank, in display order.
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One lead as it goes to the form relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadPayload {
    pub name: String,
    pub contact: String,
    pub message: String,
    pub subject: String,
}

impl LeadPayload {
    pub fn form_pairs(&self) -> [(&'static str, &str); 4] {
        [
            (ContactField::Name.key(), self.name.as_str()),
            (ContactField::Contact.key(), self.contact.as_str()),
            (ContactField::Message.key(), self.message.as_str()),
            (SUBJECT_FIELD, self.subject.as_str()),
        ]
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.form_pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Network(String),
    Status(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(message) => write!(f, "request failed: {message}"),
            SubmitError::Status(status) => write!(f, "relay answered with status {status}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Any 2xx counts as delivered; the body is never inspected.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

/// Contact form contents plus its submission lifecycle.
///
/// `Idle`/`Error` -> `Sending` through [`ContactForm::begin_submit`], which
/// hands out at most one payload until [`ContactForm::finish`] settles it.
/// `Success` is terminal and clears the fields; `Error` keeps them.
/// A submit with a blank required field leaves the status alone and records
/// the field in [`ContactForm::missing`] until it is filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmitStatus,
    subject: String,
    missing: Option<ContactField>,
}

impl ContactForm {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmitStatus::Idle,
            subject: subject.into(),
            missing: None,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// First blank required field from the last rejected submit.
    pub fn missing(&self) -> Option<ContactField> {
        self.missing
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        if self.status == SubmitStatus::Success {
            return;
        }
        self.fields.set(field, value);
        if self.missing.is_some() {
            self.missing = self.fields.first_missing();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.accepts_submit() && self.fields.is_complete()
    }

    fn accepts_submit(&self) -> bool {
        matches!(self.status, SubmitStatus::Idle | SubmitStatus::Error)
    }

    /// Moves to `Sending` and returns what to post, as typed. `None` when a
    /// request is already in flight, the lead was delivered, or a required
    /// field is blank (see [`ContactForm::missing`]).
    pub fn begin_submit(&mut self) -> Option<LeadPayload> {
        if !self.accepts_submit() {
            return None;
        }
        self.missing = self.fields.first_missing();
        if self.missing.is_some() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(LeadPayload {
            name: self.fields.name.clone(),
            contact: self.fields.contact.clone(),
            message: self.fields.message.clone(),
            subject: self.subject.clone(),
        })
    }

    /// Settles the in-flight request. Ignored unless `Sending`.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if self.status != SubmitStatus::Sending {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields.clear();
                self.status = SubmitStatus::Success;
            }
            Err(_) => {
                self.status = SubmitStatus::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_is_urlencoded() {
        let payload = LeadPayload {
            name: "Анна".to_string(),
            contact: "+66 94 706 6687".to_string(),
            message: "a&b=c".to_string(),
            subject: "Lead".to_string(),
        };
        assert_eq!(
            payload.to_form_body(),
            "name=%D0%90%D0%BD%D0%BD%D0%B0&contact=%2B66+94+706+6687&message=a%26b%3Dc&_subject=Lead"
        );
    }

    #[test]
    fn status_range() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(302), Err(SubmitError::Status(302)));
        assert_eq!(check_status(422), Err(SubmitError::Status(422)));
    }
}
