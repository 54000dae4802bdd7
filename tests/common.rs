use figment::{
    providers::{Format, Yaml},
    Figment,
};
use serde_json::{json, Value};
use statsdesc::config::{extract_config, ConfigV1};

/// A config pointing at `base_url`, parsed the same way the binary parses its file.
pub fn config_for(base_url: &str) -> ConfigV1 {
    let yaml = format!(
        r#"
version: "1.0.0"
server:
  base_url: "{}"
  timeout_in_ms: 2000
logging:
  level: "debug"
  format: "json"
"#,
        base_url
    );
    extract_config(Figment::new().merge(Yaml::string(&yaml))).expect("test config should parse")
}

/// A figures list shaped like the one a database server publishes.
pub fn figures() -> Value {
    json!([
        {
            "group": "system",
            "identifier": "userTime",
            "name": "User Time",
            "description": "Amount of time that this process has been scheduled in user mode.",
            "type": "accumulated",
            "units": "seconds"
        },
        {
            "group": "system",
            "identifier": "residentSize",
            "name": "Resident Set Size",
            "description": "The total size of the number of pages the process has in real memory.",
            "type": "current",
            "units": "bytes"
        },
        {
            "group": "client",
            "identifier": "totalTime",
            "name": "Total Time",
            "description": "Total time needed to answer a request.",
            "type": "distribution",
            "units": "seconds",
            "cuts": [0.01, 0.05, 0.1, 0.2, 0.5, 1.0]
        }
    ])
}
