use orgdesk_core::models::organization::Organization;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: String,
    pub is_badge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub fields: Vec<ProfileField>,
    /// The tab offers an "Edit Profile" action that opens the edit dialog.
    pub editable: bool,
}

fn field(label: &'static str, value: impl ToString) -> ProfileField {
    ProfileField {
        label,
        value: value.to_string(),
        is_badge: false,
    }
}

pub fn render_profile(org: &Organization) -> ProfileView {
    ProfileView {
        fields: vec![
            field("Name", &org.name),
            field("Slug", &org.slug),
            field("Description", &org.description),
            field("Industry", &org.industry),
            field("Max Users", org.max_users),
            field("Tier", org.tier),
            field("Contact Email", &org.contact_email),
            field("Phone Number", &org.phone_number),
            ProfileField {
                is_badge: true,
                ..field("Domain", &org.domain)
            },
            field("Location", &org.location),
        ],
        editable: true,
    }
}
