use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;
#[allow(dead_code)]
#[path = "src/validate.rs"]
mod validate;

use constants::{DEFAULT_DEVICE_ID, DEFAULT_MQTT_PORT};

const CONFIG_FILE: &str = "cfg.toml";
const EXAMPLE_CONFIG_FILE: &str = "cfg.toml.example";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    wifi_ssid: String,
    wifi_psk: String,
    mqtt_server: String,
    mqtt_port: Option<u16>,
    mqtt_topic: String,
    mqtt_subscribe_topic: String,
    device_id: Option<String>,
}

impl RawConfig {
    fn validate(&self, device_id: &str, mqtt_port: u16) -> Result<(), validate::Error> {
        validate::ssid(&self.wifi_ssid)?;
        validate::psk(&self.wifi_psk)?;
        validate::broker_address(&self.mqtt_server)?;
        validate::port(mqtt_port)?;
        validate::topic_name("mqtt_topic", &self.mqtt_topic)?;
        validate::topic_filter("mqtt_subscribe_topic", &self.mqtt_subscribe_topic)?;
        validate::client_id(device_id)?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed={EXAMPLE_CONFIG_FILE}");

    let path = if Path::new(CONFIG_FILE).exists() {
        CONFIG_FILE
    } else {
        println!("cargo:warning={CONFIG_FILE} not found, building with {EXAMPLE_CONFIG_FILE}");
        EXAMPLE_CONFIG_FILE
    };

    // Read and parse
    let toml_str = fs::read_to_string(path)?;
    let raw: RawConfig = toml::from_str(&toml_str).map_err(|e| format!("{path}: {e}"))?;

    let device_id = raw.device_id.as_deref().unwrap_or(DEFAULT_DEVICE_ID);
    let mqtt_port = raw.mqtt_port.unwrap_or(DEFAULT_MQTT_PORT);

    raw.validate(device_id, mqtt_port)
        .map_err(|e| format!("{path}: {e}"))?;

    // Generate Rust code
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            device_id: {id:?},
            mqtt_server: {ms:?},
            mqtt_port: {mp},
            mqtt_topic: {mt:?},
            mqtt_subscribe_topic: {mst:?},
            wifi_psk: {psk:?},
            wifi_ssid: {ssid:?},
        }};
    "#,
        id = device_id,
        ms = raw.mqtt_server,
        mp = mqtt_port,
        mt = raw.mqtt_topic,
        mst = raw.mqtt_subscribe_topic,
        psk = raw.wifi_psk,
        ssid = raw.wifi_ssid,
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
