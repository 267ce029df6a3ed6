#![allow(dead_code)]

use dbfirst_core::schema::conceptual::{self, Multiplicity};
use dbfirst_core::schema::store::{self, Type};

pub const NS_V1: &str = "urn:schemas-microsoft-com:windows:storage:mapping:CS";
pub const NS_V2: &str = "http://schemas.microsoft.com/ado/2008/09/mapping/cs";
pub const NS_V3: &str = "http://schemas.microsoft.com/ado/2009/11/mapping/cs";

/// Store and conceptual schema of a small school database:
///
/// - `customer_order(id, cust_id, total)` bound to `CustomerOrder`
/// - `student`, `course`, `teacher` bound to entity types of the same name
/// - `student_course(student_id, course_id)` junction for the many-to-many
///   `StudentCourse` association
/// - `TeacherCourse`, a one-to-many association carried by `course.teacher_id`
pub struct School {
    pub store: store::Schema,
    pub conceptual: conceptual::Schema,
}

impl School {
    pub fn new() -> School {
        School {
            store: school_store(),
            conceptual: school_conceptual(),
        }
    }

    pub fn table(&self, name: &str) -> &store::Table {
        self.store
            .tables
            .iter()
            .find(|table| table.name == name)
            .unwrap_or_else(|| panic!("no table `{name}`"))
    }

    pub fn entity_type(&self, name: &str) -> &conceptual::EntityType {
        self.conceptual
            .entity_types
            .iter()
            .find(|ty| ty.name == name)
            .unwrap_or_else(|| panic!("no entity type `{name}`"))
    }

    pub fn association(&self, name: &str) -> &conceptual::AssociationType {
        self.conceptual
            .association_types
            .iter()
            .find(|ty| ty.name == name)
            .unwrap_or_else(|| panic!("no association type `{name}`"))
    }
}

fn school_store() -> store::Schema {
    let mut store = store::Schema::new("dbo");

    let orders = store.add_table("customer_order");
    orders.add_column("id", Type::Integer(4)).primary_key = true;
    orders.add_column("cust_id", Type::Integer(4));
    orders.add_column("total", Type::Decimal(18, 2));

    let student = store.add_table("student");
    student.description = Some("Enrolled students".to_string());
    student.add_column("student_id", Type::Integer(4)).primary_key = true;
    student.add_column("name", Type::VarChar(100)).description = Some("Full name".to_string());

    let course = store.add_table("course");
    course.add_column("course_id", Type::Integer(4)).primary_key = true;
    course.add_column("title", Type::Text);
    course.add_column("teacher_id", Type::Integer(4));

    let teacher = store.add_table("teacher");
    teacher.add_column("teacher_id", Type::Integer(4)).primary_key = true;
    teacher.add_column("name", Type::Text);

    let junction = store.add_table("student_course");
    junction.add_column("student_id", Type::Integer(4)).primary_key = true;
    junction.add_column("course_id", Type::Integer(4)).primary_key = true;

    store
}

fn school_conceptual() -> conceptual::Schema {
    let mut schema = conceptual::Schema::new("SchoolContext");

    let order = schema.add_entity_type("CustomerOrder");
    order.add_property("Id", "Int32");
    order.add_property("CustId", "Int32");
    order.add_property("Total", "Decimal");
    let order = order.id;

    let student = schema.add_entity_type("student");
    student.add_property("StudentId", "Int32");
    student.add_property("Name", "String");
    let student = student.id;

    let course = schema.add_entity_type("course");
    course.add_property("CourseId", "Int32");
    course.add_property("Title", "String");
    course.add_property("TeacherId", "Int32");
    let course = course.id;

    let teacher = schema.add_entity_type("teacher");
    teacher.add_property("TeacherId", "Int32");
    teacher.add_property("Name", "String");
    let teacher = teacher.id;

    schema.add_entity_set("CustomerOrders", order);
    let students = schema.add_entity_set("students", student);
    let courses = schema.add_entity_set("courses", course);
    let teachers = schema.add_entity_set("teachers", teacher);

    let student_course = schema.add_association_type(
        "StudentCourse",
        [
            ("Student", student, Multiplicity::Many),
            ("Course", course, Multiplicity::Many),
        ],
    );
    schema.add_association_set(
        "StudentCourse",
        student_course,
        [("Student", students), ("Course", courses)],
    );

    let teacher_course = schema.add_association_type(
        "TeacherCourse",
        [
            ("Teacher", teacher, Multiplicity::One),
            ("Course", course, Multiplicity::Many),
        ],
    );
    schema.add_association_set(
        "TeacherCourse",
        teacher_course,
        [("Teacher", teachers), ("Course", courses)],
    );

    schema
}

/// Which layout to write entity set mappings in.
#[derive(Debug, Clone, Copy)]
pub enum Layout {
    Flat,
    Fragmented,
}

/// Writes an `EntitySetMapping` element.
pub fn entity_set_mapping(
    layout: Layout,
    name: &str,
    table: &str,
    properties: &[(&str, &str)],
) -> String {
    let scalars: String = properties
        .iter()
        .map(|(property, column)| {
            format!(r#"<ScalarProperty Name="{property}" ColumnName="{column}" />"#)
        })
        .collect();

    match layout {
        Layout::Flat => format!(
            r#"<EntitySetMapping Name="{name}" StoreEntitySet="{table}" TypeName="School.{name}">
                 {scalars}
               </EntitySetMapping>"#
        ),
        Layout::Fragmented => format!(
            r#"<EntitySetMapping Name="{name}">
                 <EntityTypeMapping TypeName="IsTypeOf(School.{name})">
                   <MappingFragment StoreEntitySet="{table}">{scalars}</MappingFragment>
                 </EntityTypeMapping>
               </EntitySetMapping>"#
        ),
    }
}

/// Writes an `AssociationSetMapping` element. Each end is a role name and its
/// `(property, column)` pairs.
pub fn association_set_mapping(
    name: &str,
    table: &str,
    ends: &[(&str, &[(&str, &str)])],
) -> String {
    let ends: String = ends
        .iter()
        .map(|(role, properties)| {
            let scalars: String = properties
                .iter()
                .map(|(property, column)| {
                    format!(r#"<ScalarProperty Name="{property}" ColumnName="{column}" />"#)
                })
                .collect();
            format!(r#"<EndProperty Name="{role}">{scalars}</EndProperty>"#)
        })
        .collect();

    format!(
        r#"<AssociationSetMapping Name="{name}" TypeName="School.{name}" StoreEntitySet="{table}">
             {ends}
           </AssociationSetMapping>"#
    )
}

/// Wraps set mappings into a complete mapping document.
pub fn mapping_document(namespace: &str, sets: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Mapping Space="C-S" xmlns="{namespace}">
  <EntityContainerMapping StorageEntityContainer="dbo" CdmEntityContainer="SchoolContext">
    {}
  </EntityContainerMapping>
</Mapping>"#,
        sets.join("\n    ")
    )
}

/// The complete, consistent mapping document for [`School`].
pub fn school_document(namespace: &str, layout: Layout) -> String {
    mapping_document(namespace, &school_sets(layout))
}

pub fn school_sets(layout: Layout) -> Vec<String> {
    vec![
        entity_set_mapping(
            layout,
            "CustomerOrders",
            "customer_order",
            &[("Id", "id"), ("CustId", "cust_id"), ("Total", "total")],
        ),
        entity_set_mapping(
            layout,
            "students",
            "student",
            &[("StudentId", "student_id"), ("Name", "name")],
        ),
        entity_set_mapping(
            layout,
            "courses",
            "course",
            &[
                ("CourseId", "course_id"),
                ("Title", "title"),
                ("TeacherId", "teacher_id"),
            ],
        ),
        entity_set_mapping(
            layout,
            "teachers",
            "teacher",
            &[("TeacherId", "teacher_id"), ("Name", "name")],
        ),
        association_set_mapping(
            "StudentCourse",
            "student_course",
            &[
                ("Student", &[("StudentId", "student_id")][..]),
                ("Course", &[("CourseId", "course_id")][..]),
            ],
        ),
    ]
}
