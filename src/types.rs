//! Wire types for the roster API.
//!
//! The student record mirrors the `students` table one-to-one. Decoding is
//! deliberately permissive: every field falls back to its default when absent
//! from the payload, so a missing name reaches the store as NULL and a missing
//! integer as 0. Type-mismatched values still fail decoding.

use serde::{Deserialize, Serialize};

/// A single student record as it appears on the wire and in the store.
///
/// `student_id` is assigned by the store on insert; it is ignored on create
/// and used as the sole row selector on update and delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    pub student_id: i32,
    pub student_name: Option<String>,
    pub student_age: i32,
    pub student_addr: Option<String>,
    pub student_percent: f64,
    pub student_qual: Option<String>,
    pub student_year_passed: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn full_payload_decodes() -> Result<(), serde_json::Error> {
        let json = r#"{
            "student_id": 7,
            "student_name": "Asha",
            "student_age": 21,
            "student_addr": "12 Hill Rd",
            "student_percent": 88.5,
            "student_qual": "BSc",
            "student_year_passed": 2024
        }"#;

        let student: Student = serde_json::from_str(json)?;
        assert_eq!(student.student_id, 7);
        assert_eq!(student.student_name.as_deref(), Some("Asha"));
        assert_eq!(student.student_age, 21);
        assert_eq!(student.student_percent, 88.5);
        assert_eq!(student.student_year_passed, 2024);
        Ok(())
    }

    #[test]
    fn missing_fields_take_defaults() -> Result<(), serde_json::Error> {
        let student: Student = serde_json::from_str(r#"{"student_age": 19}"#)?;
        assert_eq!(student.student_id, 0);
        assert_eq!(student.student_name, None);
        assert_eq!(student.student_age, 19);
        assert_eq!(student.student_percent, 0.0);
        Ok(())
    }

    #[test]
    fn empty_object_decodes_to_default() -> Result<(), serde_json::Error> {
        let student: Student = serde_json::from_str("{}")?;
        assert_eq!(student, Student::default());
        Ok(())
    }

    #[test]
    fn type_mismatch_is_rejected() {
        let result: Result<Student, _> =
            serde_json::from_str(r#"{"student_age": "twenty"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unparseable_body_is_rejected() {
        let result: Result<Student, _> = serde_json::from_str("not json at all");
        assert!(result.is_err());
    }

    #[test]
    fn absent_name_serializes_as_null() -> Result<(), serde_json::Error> {
        let student = Student {
            student_age: 20,
            ..Student::default()
        };
        let json = serde_json::to_value(&student)?;
        assert!(json["student_name"].is_null());
        assert_eq!(json["student_age"], 20);
        Ok(())
    }

    fn student_strategy() -> impl Strategy<Value = Student> {
        (
            any::<i32>(),
            proptest::option::of("[a-zA-Z ]{0,32}"),
            any::<i32>(),
            proptest::option::of("[a-zA-Z0-9 ]{0,64}"),
            // Finite floats only; NaN does not round-trip through JSON.
            -1000.0f64..1000.0f64,
            proptest::option::of("[a-zA-Z]{0,16}"),
            any::<i32>(),
        )
            .prop_map(
                |(id, name, age, addr, percent, qual, year)| Student {
                    student_id: id,
                    student_name: name,
                    student_age: age,
                    student_addr: addr,
                    student_percent: percent,
                    student_qual: qual,
                    student_year_passed: year,
                },
            )
    }

    proptest! {
        #[test]
        fn json_round_trip(student in student_strategy()) {
            let json = serde_json::to_string(&student).unwrap();
            let back: Student = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, student);
        }
    }
}
