use assert_fs::{TempDir, prelude::*};
use graphql_expect::{
    EntityKind, Equality, Failure, Schema, SchemaDocument, SchemaError,
};
use indoc::indoc;
use rstest::rstest;
use speculoos::prelude::*;

use crate::{PROJECT_ROOT, expect, expect_with};

#[test]
fn reads_schemas() {
    let expect = expect();

    expect.default_schema().unwrap().is_valid_sdl().unwrap();
    expect
        .schema(format!("{PROJECT_ROOT}/schema.graphql"))
        .unwrap()
        .is_valid_sdl()
        .unwrap();
    expect
        .schema("type Foo { id: ID }")
        .unwrap()
        .not()
        .is_valid_sdl()
        .unwrap();
    expect
        .schema("type Query\ntype Mutation")
        .unwrap()
        .not()
        .is_valid_sdl()
        .unwrap();
}

#[test]
fn missing_query_root_is_a_validation_failure() {
    let err = expect()
        .schema("type Foo { id: ID }")
        .unwrap()
        .is_valid_sdl()
        .unwrap_err();
    assert_that!(err).matches(|err| {
        matches!(err, Failure::Schema(SchemaError::Validation(message)) if message.contains("Query"))
    });
}

#[test]
fn checks_every_kind_in_the_project_schema() {
    expect()
        .default_schema()
        .unwrap()
        .has_type("Foo")
        .unwrap()
        .has_type("Query")
        .unwrap()
        .has_union("BazUnion")
        .unwrap()
        .has_scalar("Date")
        .unwrap()
        .has_enum("FooEnum")
        .unwrap()
        .has_input("FooInput")
        .unwrap()
        .has_interface("FooInterface")
        .unwrap()
        .has_directive("deprecated")
        .unwrap()
        .not()
        .has_type("DefinitelyMissing")
        .unwrap();
}

#[rstest]
#[case::union(EntityKind::Union)]
#[case::scalar(EntityKind::Scalar)]
#[case::enumeration(EntityKind::Enum)]
#[case::input(EntityKind::Input)]
#[case::interface(EntityKind::Interface)]
fn an_object_is_no_other_kind(#[case] kind: EntityKind) {
    let schemas = expect();
    let schemas = schemas.schemas();
    let document = SchemaDocument::Default;
    let result = match kind {
        EntityKind::Union => schemas.has_union(&document, "Foo"),
        EntityKind::Scalar => schemas.has_scalar(&document, "Foo"),
        EntityKind::Enum => schemas.has_enum(&document, "Foo"),
        EntityKind::Input => schemas.has_input(&document, "Foo"),
        EntityKind::Interface => schemas.has_interface(&document, "Foo"),
        EntityKind::Object | EntityKind::Directive => unreachable!(),
    };
    assert_that!(result).is_err().matches(|err| {
        matches!(
            err,
            SchemaError::KindMismatchOrAbsent { found: Some(EntityKind::Object), expected, .. }
                if *expected == kind
        )
    });
}

#[test]
fn free_functions_accept_parsed_schemas() {
    let sdl = std::fs::read_to_string(format!("{PROJECT_ROOT}/schema.graphql")).unwrap();
    let document = SchemaDocument::from(Schema::parse(sdl, "schema.graphql").unwrap());
    let expect = expect();
    let schemas = expect.schemas();

    assert_that!(schemas.has_directive(&document, "deprecated")).is_ok();
    assert_that!(schemas.has_enum(&document, "FooEnum")).is_ok();
    assert_that!(schemas.has_input(&document, "FooInput")).is_ok();
    assert_that!(schemas.has_interface(&document, "FooInterface")).is_ok();
    assert_that!(schemas.has_scalar(&document, "Date")).is_ok();
    assert_that!(schemas.has_type(&document, "Query")).is_ok();
    assert_that!(schemas.has_union(&document, "BazUnion")).is_ok();
    assert_that!(schemas.has_directive(&document, "nope")).is_err();
}

#[test]
fn namespaced_identifiers_resolve_to_schema_names() {
    expect()
        .default_schema()
        .unwrap()
        .has_type("my_app::graphql::Foo")
        .unwrap()
        .has_enum("App\\Enums\\FooEnum")
        .unwrap();
}

#[test]
fn temporary_schema_files_are_read() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("api.graphql");
    file.write_str(indoc! {r#"
        type Query {
          ping: Boolean
        }
    "#})
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    expect()
        .schema(path)
        .unwrap()
        .is_valid_sdl()
        .unwrap()
        .not()
        .has_type("Mutation")
        .unwrap();
}

#[test]
fn strict_configuration_requires_mutation() {
    let sdl = "type Query { ping: Boolean }";
    expect().schema(sdl).unwrap().is_valid_sdl().unwrap();

    let strict = expect_with(true, Equality::Canonical);
    strict.schema(sdl).unwrap().not().is_valid_sdl().unwrap();
    let err = strict.schema(sdl).unwrap().is_valid_sdl().unwrap_err();
    assert_that!(err).matches(|err| matches!(err, Failure::Schema(err) if err.is_validation()));
    strict.default_schema().unwrap().is_valid_sdl().unwrap();
}

#[test]
fn invalid_schemas_surface_the_library_diagnostic() {
    let err = expect()
        .schema("type Query { foo: Missing }")
        .unwrap()
        .is_valid_sdl()
        .unwrap_err();
    assert_that!(err)
        .matches(|err| matches!(err, Failure::Schema(SchemaError::Validation(message)) if message.contains("Missing")));
}

#[test]
fn unparseable_sdl_fails_before_any_assertion() {
    let result = expect().schema("type Query {");
    assert_that!(result)
        .is_err()
        .matches(|err| matches!(err, Failure::Schema(err) if err.is_parse()));
}

#[test]
fn negation_applies_to_one_assertion() {
    let result = expect()
        .default_schema()
        .unwrap()
        .not()
        .has_union("Foo")
        .unwrap()
        .has_union("Foo");
    assert_that!(result).is_err();
}

#[test]
fn negated_passing_assertion_fails() {
    let result = expect().default_schema().unwrap().not().has_type("Foo");
    assert_that!(result)
        .is_err()
        .matches(|err| matches!(err, Failure::Negated { .. }));
}
