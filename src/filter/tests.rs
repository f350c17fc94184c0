//! Filter Engine Tests
//!
//! ## Test Scopes
//! - **Text matching**: case-insensitive substring semantics.
//! - **Numeric matching**: exact equality, unparsable values exclude.
//! - **Composition**: several parameters combine with AND.
//! - **Query decoding**: repeated keys keep their first value.

#[cfg(test)]
mod tests {
    use crate::filter::{DoctorFilter, Filter, PatientFilter, from_query_pairs};
    use crate::model::{Doctor, Patient};

    fn doctor(name: &str, salary: i64) -> Doctor {
        Doctor {
            id: 1,
            name: name.to_string(),
            salary,
        }
    }

    fn patient(name: &str, age: i64, doctor_id: i64) -> Patient {
        Patient {
            id: 1,
            name: name.to_string(),
            age,
            doctor_id,
        }
    }

    // ============================================================
    // TEXT FILTERS
    // ============================================================

    #[test]
    fn test_default_filter_matches_everything() {
        assert!(DoctorFilter::default().matches(&doctor("Dr. Smith", 5000)));
        assert!(PatientFilter::default().matches(&patient("Ann", 30, 1)));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filter = DoctorFilter {
            name: Some("SM".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&doctor("Dr. Smith", 5000)));
        assert!(filter.matches(&doctor("Gus Osmond", 1)));
        assert!(!filter.matches(&doctor("Dr. Lee", 5000)));
    }

    #[test]
    fn test_empty_name_filter_is_no_constraint() {
        let filter = PatientFilter {
            name: Some(String::new()),
            ..Default::default()
        };

        assert!(filter.matches(&patient("Anyone", 1, 1)));
    }

    // ============================================================
    // NUMERIC FILTERS
    // ============================================================

    #[test]
    fn test_salary_filter_requires_exact_equality() {
        let filter = DoctorFilter {
            salary: Some("5000".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&doctor("Dr. Smith", 5000)));
        assert!(!filter.matches(&doctor("Dr. Smith", 50000)));
        assert!(!filter.matches(&doctor("Dr. Smith", 500)));
    }

    #[test]
    fn test_unparsable_numeric_filter_excludes_entity() {
        let filter = DoctorFilter {
            salary: Some("lots".to_string()),
            ..Default::default()
        };

        assert!(!filter.matches(&doctor("Dr. Smith", 5000)));
    }

    #[test]
    fn test_negative_doctor_reference_filter_is_numeric() {
        let filter = PatientFilter {
            doctor_id: Some("-1".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&patient("Orphan", 30, -1)));
        assert!(!filter.matches(&patient("Ann", 30, 1)));
    }

    #[test]
    fn test_patient_age_and_doctor_filters() {
        let filter = PatientFilter {
            age: Some("30".to_string()),
            doctor_id: Some("2".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&patient("Ann", 30, 2)));
        assert!(!filter.matches(&patient("Ann", 30, 3)));
        assert!(!filter.matches(&patient("Ann", 31, 2)));
    }

    // ============================================================
    // COMPOSITION
    // ============================================================

    #[test]
    fn test_filters_are_conjunctive() {
        let filter = DoctorFilter {
            name: Some("sm".to_string()),
            salary: Some("5000".to_string()),
        };

        let doctors = vec![
            doctor("Dr. Smith", 5000),
            doctor("Dr. Smythe", 4999),
            doctor("Dr. Smith", 6000),
            doctor("Dr. Lee", 5000),
        ];

        let matched: Vec<_> = doctors.iter().filter(|d| filter.matches(d)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Dr. Smith");
        assert_eq!(matched[0].salary, 5000);
    }

    #[test]
    fn test_filter_deserializes_from_query_string_shape() {
        let filter: PatientFilter =
            serde_json::from_str(r#"{"name":"an","doctor_id":"4"}"#).unwrap();

        assert_eq!(filter.name.as_deref(), Some("an"));
        assert!(filter.age.is_none());
        assert_eq!(filter.doctor_id.as_deref(), Some("4"));
    }

    // ============================================================
    // QUERY DECODING
    // ============================================================

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_query_key_keeps_first_value() {
        let filter: DoctorFilter =
            from_query_pairs(pairs(&[("name", "sm"), ("name", "zz"), ("salary", "5000")]))
                .unwrap();

        assert_eq!(filter.name.as_deref(), Some("sm"));
        assert_eq!(filter.salary.as_deref(), Some("5000"));
        assert!(filter.matches(&doctor("Dr. Smith", 5000)));
    }

    #[test]
    fn test_unknown_query_keys_are_ignored() {
        let filter: PatientFilter =
            from_query_pairs(pairs(&[("colour", "red"), ("age", "30")])).unwrap();

        assert!(filter.name.is_none());
        assert_eq!(filter.age.as_deref(), Some("30"));
    }
}
