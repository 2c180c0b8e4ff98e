//! Dispatch tests through the public facade.

use opsfactory::{
    Action, BASE_ORIGIN, ConfigBundle, ConfigError, Factory, OpsError, RegistryBuilder, Report,
    TypeKey,
    config::{OPS_TYPE, POST_URL, SEND_CONFIG},
    testing::{ECHO, EchoOps, failing_constructor, registered_keys},
};
use std::collections::BTreeSet;

mod common;
use common::{FACTORY, HEARTBEAT_URL, base_bundle, special_bundle};

#[test]
fn test_base_requires_endpoint() {
    let result = FACTORY.create(&ConfigBundle::new().with(OPS_TYPE, TypeKey::BASE));
    assert!(
        matches!(
            result,
            Err(OpsError::Config(ConfigError::MissingField { field: POST_URL }))
        ),
        "Base variant without PostUrl should be a configuration error"
    );
}

#[test]
fn test_base_heartbeat_reports_endpoint() {
    let ops = FACTORY.create(&base_bundle("http://x")).unwrap();

    let report = ops.send_heartbeat().unwrap();
    assert_eq!(
        report,
        Report::new(
            BASE_ORIGIN,
            Action::Heartbeat {
                endpoint: Some("http://x".to_string())
            }
        )
    );
}

#[test]
fn test_default_type_is_base() {
    let ops = FACTORY
        .create(&ConfigBundle::new().with(POST_URL, HEARTBEAT_URL))
        .unwrap();
    assert_eq!(ops.kind(), TypeKey::BASE);
}

#[test]
fn test_special_requires_flag() {
    let result = FACTORY.create(&ConfigBundle::new().with(OPS_TYPE, TypeKey::SPECIAL));
    assert!(matches!(
        result,
        Err(OpsError::Config(ConfigError::MissingField { field: SEND_CONFIG }))
    ));
}

#[test]
fn test_special_uploads_when_enabled() {
    let ops = FACTORY.create(&special_bundle(true)).unwrap();
    assert_eq!(ops.do_config_upload().unwrap().action, Action::ConfigUpload);
}

#[test]
fn test_type_key_as_string() {
    let bundle = ConfigBundle::new()
        .with(OPS_TYPE, "SpecialType")
        .with(SEND_CONFIG, false);
    let ops = FACTORY.create(&bundle).unwrap();
    assert_eq!(ops.kind(), TypeKey::SPECIAL);
}

#[test]
fn test_type_key_as_bool_is_rejected() {
    let result = FACTORY.create(&ConfigBundle::new().with(OPS_TYPE, true));
    assert!(matches!(
        result,
        Err(OpsError::Config(ConfigError::InvalidField { field: OPS_TYPE, .. }))
    ));
}

#[test]
fn test_unknown_type_lists_every_key() {
    let err = FACTORY
        .create(&ConfigBundle::new().with(OPS_TYPE, TypeKey::new("Unknown")))
        .unwrap_err();

    let expected: BTreeSet<String> = FACTORY
        .registry()
        .keys()
        .iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(registered_keys(&err), Some(expected));
    assert_eq!(
        err.to_string(),
        "invalid ops type `Unknown`. Must be one of: BaseType, SpecialType"
    );
}

#[test]
fn test_duplicate_registration_keeps_original() {
    let registry = RegistryBuilder::new()
        .with_builtins()
        .register(TypeKey::BASE, failing_constructor)
        .register(ECHO, EchoOps::construct)
        .register(ECHO, failing_constructor)
        .build();
    let factory = Factory::new(registry);

    assert!(factory.create(&base_bundle(HEARTBEAT_URL)).is_ok());

    let echo = factory
        .create(&ConfigBundle::new().with(OPS_TYPE, ECHO).with("Extra", "value"))
        .unwrap();
    assert_eq!(echo.kind(), ECHO);
}

#[test]
fn test_external_constructor_error_propagates() {
    let key = TypeKey::from_static("Broken");
    let factory = Factory::new(
        RegistryBuilder::new()
            .register(key.clone(), failing_constructor)
            .build(),
    );

    let err = factory
        .create(&ConfigBundle::new().with(OPS_TYPE, key))
        .unwrap_err();
    assert!(matches!(err, OpsError::Custom(_)));
    assert_eq!(err.to_string(), "constructor failed");
}
