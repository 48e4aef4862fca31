//! Editable organization form shared by the Create and Edit dialogs.

use std::str::FromStr;

use orgdesk_core::error::OrgDeskResult;
use orgdesk_core::models::organization::{
    CreateOrganization, Organization, Tier, UpdateOrganization,
};
use serde::Serialize;

use crate::error::ConsoleError;

/// Form fields of the organization dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrgField {
    Name,
    Slug,
    Description,
    Industry,
    Tier,
    MaxUsers,
    ContactEmail,
    PhoneNumber,
    Domain,
    Location,
}

impl FromStr for OrgField {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let field = match key.as_str() {
            "name" => Self::Name,
            "slug" => Self::Slug,
            "description" => Self::Description,
            "industry" => Self::Industry,
            "tier" => Self::Tier,
            "max_users" | "maxusers" => Self::MaxUsers,
            "contact_email" | "contactemail" | "email" => Self::ContactEmail,
            "phone_number" | "phonenumber" | "phone" => Self::PhoneNumber,
            "domain" => Self::Domain,
            "location" => Self::Location,
            _ => return Err(ConsoleError::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

/// Text typed into a numeric field.
///
/// Unparseable input is kept as-is so the form can show it, and blocks
/// confirm until corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberInput {
    Valid(u32),
    Invalid(String),
}

impl NumberInput {
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<u32>() {
            Ok(n) => Self::Valid(n),
            Err(_) => Self::Invalid(text.to_string()),
        }
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Valid(n) => Some(*n),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub industry: String,
    pub tier: Tier,
    /// `None` until the user types a seat count.
    pub max_users: Option<NumberInput>,
    pub contact_email: String,
    pub phone_number: String,
    pub domain: String,
    pub location: String,
}

impl OrganizationDraft {
    /// Copy of the editable fields of `org`.
    pub fn from_organization(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            slug: org.slug.clone(),
            description: org.description.clone(),
            industry: org.industry.clone(),
            tier: org.tier,
            max_users: Some(NumberInput::Valid(org.max_users)),
            contact_email: org.contact_email.clone(),
            phone_number: org.phone_number.clone(),
            domain: org.domain.clone(),
            location: org.location.clone(),
        }
    }

    /// Store `text` into `field`.
    ///
    /// Unknown tiers are refused and leave the draft unchanged. Bad seat
    /// counts are stored as [`NumberInput::Invalid`].
    pub fn set(&mut self, field: OrgField, text: &str) -> OrgDeskResult<()> {
        match field {
            OrgField::Name => self.name = text.to_string(),
            OrgField::Slug => self.slug = text.to_string(),
            OrgField::Description => self.description = text.to_string(),
            OrgField::Industry => self.industry = text.to_string(),
            OrgField::Tier => self.tier = text.parse()?,
            OrgField::MaxUsers => self.max_users = Some(NumberInput::parse(text)),
            OrgField::ContactEmail => self.contact_email = text.to_string(),
            OrgField::PhoneNumber => self.phone_number = text.to_string(),
            OrgField::Domain => self.domain = text.to_string(),
            OrgField::Location => self.location = text.to_string(),
        }
        Ok(())
    }

    /// Required fields present and numeric fields parsed.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::MissingField("name"));
        }
        if self.slug.trim().is_empty() {
            return Err(ConsoleError::MissingField("slug"));
        }
        if let Some(NumberInput::Invalid(input)) = &self.max_users {
            return Err(ConsoleError::InvalidNumber {
                field: "max_users",
                input: input.clone(),
            });
        }
        Ok(())
    }

    pub fn to_create(&self) -> CreateOrganization {
        CreateOrganization {
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            industry: self.industry.clone(),
            tier: self.tier,
            max_users: self.max_users.as_ref().and_then(NumberInput::value),
            contact_email: self.contact_email.clone(),
            phone_number: self.phone_number.clone(),
            domain: self.domain.clone(),
            location: self.location.clone(),
        }
    }

    /// Patch carrying every profile field. `enabled` is not part of the form.
    pub fn to_update(&self) -> UpdateOrganization {
        UpdateOrganization {
            name: Some(self.name.clone()),
            slug: Some(self.slug.clone()),
            description: Some(self.description.clone()),
            industry: Some(self.industry.clone()),
            max_users: self.max_users.as_ref().and_then(NumberInput::value),
            tier: Some(self.tier),
            contact_email: Some(self.contact_email.clone()),
            phone_number: Some(self.phone_number.clone()),
            domain: Some(self.domain.clone()),
            location: Some(self.location.clone()),
            enabled: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_input_keeps_bad_text() {
        assert_eq!(NumberInput::parse(" 42 "), NumberInput::Valid(42));
        assert_eq!(NumberInput::parse("4x"), NumberInput::Invalid("4x".into()));
        assert_eq!(NumberInput::parse("-1"), NumberInput::Invalid("-1".into()));
        assert_eq!(NumberInput::parse(""), NumberInput::Invalid(String::new()));
    }

    #[test]
    fn field_names_accept_form_spellings() {
        assert_eq!("maxUsers".parse::<OrgField>().unwrap(), OrgField::MaxUsers);
        assert_eq!("contact-email".parse::<OrgField>().unwrap(), OrgField::ContactEmail);
        assert!("logo".parse::<OrgField>().is_err());
    }

    #[test]
    fn unknown_tier_leaves_draft_unchanged() {
        let mut draft = OrganizationDraft::default();
        assert!(draft.set(OrgField::Tier, "Platinum").is_err());
        assert_eq!(draft.tier, Tier::Starter);
        draft.set(OrgField::Tier, "professional").unwrap();
        assert_eq!(draft.tier, Tier::Professional);
    }

    #[test]
    fn invalid_seat_count_blocks_validation() {
        let mut draft = OrganizationDraft {
            name: "Acme".into(),
            slug: "acme".into(),
            ..Default::default()
        };
        draft.set(OrgField::MaxUsers, "lots").unwrap();
        assert_eq!(
            draft.validate(),
            Err(ConsoleError::InvalidNumber {
                field: "max_users",
                input: "lots".into()
            })
        );
        draft.set(OrgField::MaxUsers, "12").unwrap();
        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(draft.to_create().max_users, Some(12));
    }
}
