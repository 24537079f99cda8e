use botlift_core::{Error, Params};

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn resolves_space_separated_flags() {
    let params =
        Params::resolve(&tokens(&["--project_id", "acme", "--peo_access_key", "XYZ"])).unwrap();

    assert_eq!(params.project_id, "acme");
    assert_eq!(params.peo_access_key, "XYZ");
}

#[test]
fn resolves_equals_form() {
    let params = Params::resolve(&tokens(&["--project_id=acme", "--peo_access_key=XYZ"])).unwrap();

    assert_eq!(params.project_id, "acme");
    assert_eq!(params.peo_access_key, "XYZ");
}

#[test]
fn resolves_mixed_forms_in_any_order() {
    let params =
        Params::resolve(&tokens(&["--peo_access_key", "XYZ", "--project_id=acme"])).unwrap();

    assert_eq!(params.project_id, "acme");
    assert_eq!(params.peo_access_key, "XYZ");
}

#[test]
fn missing_peo_access_key_is_named_exactly() {
    let result = Params::resolve(&tokens(&["--project_id", "acme"]));

    assert!(matches!(
        result,
        Err(Error::MissingArgument(ref name)) if name == "peo_access_key"
    ));
}

#[test]
fn missing_project_id_is_named_exactly() {
    let result = Params::resolve(&tokens(&["--peo_access_key", "XYZ"]));

    assert!(matches!(
        result,
        Err(Error::MissingArgument(ref name)) if name == "project_id"
    ));
}

#[test]
fn no_tokens_reports_first_missing_flag() {
    let result = Params::resolve(&[]);

    assert!(matches!(
        result,
        Err(Error::MissingArgument(ref name)) if name == "project_id"
    ));
}

#[test]
fn empty_value_counts_as_missing() {
    let result = Params::resolve(&tokens(&["--project_id=", "--peo_access_key", "XYZ"]));

    assert!(matches!(
        result,
        Err(Error::MissingArgument(ref name)) if name == "project_id"
    ));
}

#[test]
fn flag_at_end_without_value_counts_as_missing() {
    let result = Params::resolve(&tokens(&["--project_id", "acme", "--peo_access_key"]));

    assert!(matches!(
        result,
        Err(Error::MissingArgument(ref name)) if name == "peo_access_key"
    ));
}

#[test]
fn flag_followed_by_flag_does_not_consume_it_as_value() {
    let result = Params::resolve(&tokens(&["--project_id", "--peo_access_key", "XYZ"]));

    assert!(matches!(
        result,
        Err(Error::MissingArgument(ref name)) if name == "project_id"
    ));
}

#[test]
fn unknown_flag_is_rejected_verbatim() {
    let result = Params::resolve(&tokens(&[
        "--project_id",
        "acme",
        "--peo_access_key",
        "XYZ",
        "--region=us-east1",
    ]));

    assert!(matches!(
        result,
        Err(Error::UnknownArgument(ref token)) if token == "--region=us-east1"
    ));
}

#[test]
fn positional_token_is_rejected() {
    let result = Params::resolve(&tokens(&[
        "deploy",
        "--project_id",
        "acme",
        "--peo_access_key",
        "XYZ",
    ]));

    assert!(matches!(
        result,
        Err(Error::UnknownArgument(ref token)) if token == "deploy"
    ));
}

#[test]
fn repeated_flag_last_value_wins() {
    let params = Params::resolve(&tokens(&[
        "--project_id",
        "first",
        "--project_id",
        "second",
        "--peo_access_key",
        "XYZ",
    ]))
    .unwrap();

    assert_eq!(params.project_id, "second");
}

#[test]
fn error_message_names_the_flag() {
    let err = Params::resolve(&tokens(&["--project_id", "acme"])).unwrap_err();

    assert_eq!(
        err.to_string(),
        "missing required argument --peo_access_key"
    );
}
