use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Seller,
    Admin,
}

impl Role {
    /// Unknown role names fall back to the least privileged role.
    pub fn from_claim(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("admin") => Role::Admin,
            Some("seller") => Role::Seller,
            Some("customer") | Some("user") | None => Role::Customer,
            Some(other) => {
                log::warn!("Unknown role in token: {}", other);
                Role::Customer
            }
        }
    }
}
