use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_user_with_null_names() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "username": "marie",
            "email": "marie@example.com",
            "first_name": null,
            "last_name": null,
            "active": true,
            "created_at": "2024-03-02T08:00:00",
            "roles": ["user", "admin"]
        }))
        .unwrap();

        assert!(user.first_name.is_none());
        assert!(user.active);
        assert!(user.has_role("admin"));
        assert!(!user.has_role("editor"));
    }
}
