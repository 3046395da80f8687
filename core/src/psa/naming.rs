use crate::prelude::{UserSensorKind, ORDINAL_PLACEHOLDER};

/// `""` for the first sensor of a type, `", N"` (one-based) afterwards.
pub fn ordinal_suffix(ordinal: usize) -> String {
    if ordinal == 0 {
        String::new()
    } else {
        format!(", {}", ordinal + 1)
    }
}

pub fn substitute_ordinal(name: &str, ordinal: usize) -> String {
    name.replace(ORDINAL_PLACEHOLDER, &ordinal_suffix(ordinal))
}

/// Display strings for a user exponential/polynomial entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLabel {
    pub full_name: String,
    pub calc_name: String,
    /// `None` leaves the template's units untouched.
    pub calc_units: Option<String>,
}

pub fn user_label(
    kind: UserSensorKind,
    ordinal: usize,
    name: Option<&str>,
    units: Option<&str>,
) -> UserLabel {
    let number = ordinal + 1;
    match (kind, name) {
        (UserSensorKind::Exponential, Some(name)) => {
            let units = units.unwrap_or_default();
            UserLabel {
                full_name: format!("Uexpo {number}, {name} [{units}]"),
                calc_name: name.to_string(),
                calc_units: Some(units.to_string()),
            }
        }
        (UserSensorKind::Exponential, None) => UserLabel {
            full_name: format!("User Exponential, {number}"),
            calc_name: String::new(),
            calc_units: Some(String::new()),
        },
        (UserSensorKind::Polynomial, Some(name)) => UserLabel {
            full_name: format!("Upoly {number}, {name}"),
            calc_name: name.to_string(),
            calc_units: None,
        },
        (UserSensorKind::Polynomial, None) => UserLabel {
            full_name: format!("User Polynomial, {number}"),
            calc_name: String::new(),
            calc_units: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_is_unsuffixed() {
        assert_eq!(
            substitute_ordinal("Temperature$ordinal [ITS-90, deg C]", 0),
            "Temperature [ITS-90, deg C]"
        );
    }

    #[test]
    fn later_occurrences_are_one_based() {
        assert_eq!(
            substitute_ordinal("Temperature$ordinal [ITS-90, deg C]", 1),
            "Temperature, 2 [ITS-90, deg C]"
        );
        assert_eq!(ordinal_suffix(4), ", 5");
    }

    #[test]
    fn names_without_placeholder_pass_through() {
        assert_eq!(substitute_ordinal("Pump Status", 3), "Pump Status");
    }

    #[test]
    fn custom_exponential_label_embeds_name_and_units() {
        let label = user_label(UserSensorKind::Exponential, 0, Some("Oxygen"), Some("ml/l"));
        assert_eq!(label.full_name, "Uexpo 1, Oxygen [ml/l]");
        assert_eq!(label.calc_name, "Oxygen");
        assert_eq!(label.calc_units.as_deref(), Some("ml/l"));
    }

    #[test]
    fn fallback_labels_blank_the_sub_fields() {
        let expo = user_label(UserSensorKind::Exponential, 1, None, Some("ml/l"));
        assert_eq!(expo.full_name, "User Exponential, 2");
        assert_eq!(expo.calc_name, "");
        assert_eq!(expo.calc_units.as_deref(), Some(""));

        let poly = user_label(UserSensorKind::Polynomial, 0, None, None);
        assert_eq!(poly.full_name, "User Polynomial, 1");
        assert_eq!(poly.calc_name, "");
        assert_eq!(poly.calc_units, None);
    }

    #[test]
    fn empty_custom_name_is_still_custom() {
        let poly = user_label(UserSensorKind::Polynomial, 2, Some(""), None);
        assert_eq!(poly.full_name, "Upoly 3, ");
    }
}
