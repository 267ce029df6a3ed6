mod support;

use support::School;

#[test]
fn table_description_ignores_case() {
    let school = School::new();

    assert_eq!(school.store.describe_table("student"), "Enrolled students");
    assert_eq!(school.store.describe_table("STUDENT"), "Enrolled students");
    assert_eq!(school.store.describe_table("course"), "");
    assert_eq!(school.store.describe_table("missing"), "");
}

#[test]
fn column_description_ignores_case() {
    let school = School::new();

    assert_eq!(school.store.describe_column("Student", "NAME"), "Full name");
    assert_eq!(school.store.describe_column("student", "student_id"), "");
    assert_eq!(school.store.describe_column("student", "missing"), "");
    assert_eq!(school.store.describe_column("missing", "name"), "");
}

#[test]
fn column_descriptions_are_keyed_by_lowercase_name() {
    let mut school = School::new();
    school.store.tables[1].add_column("Birth_Date", dbfirst_core::schema::store::Type::Date);

    let descriptions = school.store.column_descriptions("student");
    assert_eq!(
        descriptions.iter().collect::<Vec<_>>(),
        [
            (&"student_id".to_string(), &String::new()),
            (&"name".to_string(), &"Full name".to_string()),
            (&"birth_date".to_string(), &String::new()),
        ]
    );

    assert!(school.store.column_descriptions("missing").is_empty());
}
