pub const DEFAULT_DELETE_CONFIRMATION: &str = "Êtes-vous sûr de vouloir supprimer cet élément ?";
pub const NO_FILE_SELECTED: &str = "Aucun fichier sélectionné";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), required: true }
    }

    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), required: false }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    /// Names of the required fields left blank, in form order.
    pub invalid: Vec<String>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid.iter().any(|n| n == name)
    }
}

/// A required field is blank when its trimmed value is empty.
pub fn validate_required(fields: &[FormField]) -> FormValidation {
    FormValidation {
        invalid: fields
            .iter()
            .filter(|f| f.required && f.value.trim().is_empty())
            .map(|f| f.name.clone())
            .collect(),
    }
}

pub fn upload_label(file_name: Option<&str>) -> String {
    format!("Fichier: {}", file_name.unwrap_or(NO_FILE_SELECTED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_required_field_is_invalid() {
        let result = validate_required(&[
            FormField::required("name", "  "),
            FormField::required("price", "12"),
            FormField::optional("description", ""),
            FormField::required("category", "\t\n"),
        ]);

        assert!(!result.is_valid());
        assert_eq!(result.invalid, vec!["name", "category"]);
        assert!(!result.is_invalid("description"));
    }

    #[test]
    fn no_fields_is_valid() {
        assert!(validate_required(&[]).is_valid());
    }

    #[test]
    fn upload_label_names_the_file() {
        assert_eq!(upload_label(Some("facture.pdf")), "Fichier: facture.pdf");
        assert_eq!(upload_label(None), "Fichier: Aucun fichier sélectionné");
    }

    #[test]
    fn delete_confirmation_is_a_question() {
        assert!(DEFAULT_DELETE_CONFIRMATION.ends_with(" ?"));
    }
}
