//! Tests for environment variable expansion in configured paths

use outline::domain::expand_env_vars;

#[test]
fn given_path_with_dollar_var_when_expanding_then_substitutes() {
    std::env::set_var("OUTLINE_TEST_ROOT", "/srv/lists");

    let result = expand_env_vars("$OUTLINE_TEST_ROOT/groceries");

    assert_eq!(result, "/srv/lists/groceries");
    std::env::remove_var("OUTLINE_TEST_ROOT");
}

#[test]
fn given_path_with_braced_var_when_expanding_then_substitutes() {
    std::env::set_var("OUTLINE_TEST_BRACED", "/var/outline");

    let result = expand_env_vars("${OUTLINE_TEST_BRACED}/data");

    assert_eq!(result, "/var/outline/data");
    std::env::remove_var("OUTLINE_TEST_BRACED");
}

#[test]
fn given_undefined_var_when_expanding_then_returns_input_unchanged() {
    let input = "$OUTLINE_TEST_SURELY_UNDEFINED/data";
    assert_eq!(expand_env_vars(input), input);
}

#[test]
fn given_plain_path_when_expanding_then_unchanged() {
    assert_eq!(expand_env_vars("/plain/path"), "/plain/path");
}
