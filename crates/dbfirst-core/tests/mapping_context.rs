mod support;

use dbfirst_core::mapping::Builder;
use pretty_assertions::assert_eq;
use support::School;

#[test]
fn context_is_named_after_the_database() {
    let school = School::new();
    let builder = Builder::new();

    for (database, expected) in [
        ("school", "SchoolContext"),
        ("SCHOOL", "SchoolContext"),
        ("school db.v2", "SchoolDbV2Context"),
        ("school_db", "School_DbContext"),
        ("my-db", "My-DbContext"),
    ] {
        let context = builder.build_context(&school.conceptual, database);
        assert_eq!(context.name, expected, "database={database}");
    }
}

#[test]
fn context_suffix_is_configurable() {
    let school = School::new();
    let context = Builder::new()
        .context_suffix("Db")
        .build_context(&school.conceptual, "school");

    assert_eq!(context.name, "SchoolDb");
}

#[test]
fn context_lists_sets_in_container_order() {
    let school = School::new();
    let context = Builder::new().build_context(&school.conceptual, "school");

    let entries: Vec<_> = context
        .entity_sets
        .iter()
        .map(|entry| (entry.type_name.as_str(), entry.set_name.as_str()))
        .collect();

    assert_eq!(
        entries,
        [
            ("CustomerOrder", "CustomerOrders"),
            ("Student", "Students"),
            ("Course", "Courses"),
            ("Teacher", "Teachers"),
        ]
    );
}

#[test]
fn context_entries_are_found_by_entity_set() {
    let school = School::new();
    let context = Builder::new().build_context(&school.conceptual, "school");

    let students = &school.conceptual.entity_sets[1];
    let entry = context.entity_set(students.id).expect("students entry");
    assert_eq!(entry.type_name, "Student");
    assert_eq!(entry.set_name, "Students");
}

#[test]
fn empty_container_gives_an_empty_context() {
    let conceptual = dbfirst_core::schema::conceptual::Schema::new("EmptyContext");
    let context = Builder::new().build_context(&conceptual, "");

    assert_eq!(context.name, "Context");
    assert!(context.entity_sets.is_empty());
}
