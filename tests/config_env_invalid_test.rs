//! Malformed environment overrides, in their own test binary: env vars are process-wide.

use std::env;

use cursorkit::application::ApplicationError;
use cursorkit::config::Settings;

#[test]
fn given_unparsable_env_values_when_load_then_config_error() {
    env::set_var("CURSORKIT_MIN_PRICE", "abc");
    let bad_price = Settings::load_layers(None, None);
    env::remove_var("CURSORKIT_MIN_PRICE");

    env::set_var("CURSORKIT_ARRAY_CAPACITY", "many");
    let bad_capacity = Settings::load_layers(None, None);
    env::remove_var("CURSORKIT_ARRAY_CAPACITY");

    assert!(matches!(bad_price, Err(ApplicationError::Config { .. })));
    assert!(matches!(bad_capacity, Err(ApplicationError::Config { .. })));
}
