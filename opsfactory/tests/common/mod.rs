#![allow(dead_code)]

use lazy_static::lazy_static;
use opsfactory::{
    ConfigBundle, Factory, TypeKey,
    config::{OPS_TYPE, POST_URL, SEND_CONFIG},
};

lazy_static! {
    /// Factory with the built-in variants, shared across tests.
    pub static ref FACTORY: Factory = Factory::with_builtins();
}

pub const HEARTBEAT_URL: &str = "http://ops.cloud.com/send_heartbeat";

pub fn base_bundle(url: &str) -> ConfigBundle {
    ConfigBundle::new()
        .with(OPS_TYPE, TypeKey::BASE)
        .with(POST_URL, url)
}

pub fn special_bundle(send_config: bool) -> ConfigBundle {
    ConfigBundle::new()
        .with(OPS_TYPE, TypeKey::SPECIAL)
        .with(SEND_CONFIG, send_config)
}
