//! Shared fixtures for unit tests.

use crate::services::YamlCapabilityCatalog;

/// Small catalog with three groups. `Acme` sorts first and owns one model of
/// each kind; `Zenith` has only chat; `Solo` has only completion.
pub const SAMPLE_CATALOG: &str = r#"
groups:
  - group: Zenith
    models:
      - name: zenith-chat
        interface: chat
        parameters:
          - { name: temperature, display_name: Temperature, type: number, min_value: 0, max_value: 1 }
          - { name: top_k, display_name: Top K, type: number, min_value: 1 }
  - group: Acme
    models:
      - name: acme-chat
        description: Chat model with every parameter kind.
        interface: chat
        parameters:
          - name: temperature
            display_name: Temperature
            type: number
            default_value: 1
            min_value: 0
            max_value: 2
          - name: top_p
            display_name: Top P
            type: number
            min_value: 0
            max_value: 1
            is_min_value_exclusive: true
          - name: max_tokens
            display_name: Max tokens
            type: number
            default_value: 256
            is_required: true
            min_value: 1
          - { name: stop, display_name: Stop, type: array }
          - { name: user, display_name: User, type: string, max_length: 16 }
          - { name: stream, display_name: Stream, type: boolean }
      - name: acme-text
        interface: completion
        parameters:
          - name: temperature
            display_name: Temperature
            type: number
            default_value: 0.7
            min_value: 0
            max_value: 1
          - name: max_tokens
            display_name: Max tokens
            type: number
            default_value: 16
            is_required: true
            min_value: 1
          - { name: echo, display_name: Echo, type: boolean }
          - { name: suffix, display_name: Suffix, type: string, max_length: 200 }
  - group: Solo
    models:
      - name: solo-text
        interface: completion
        parameters:
          - { name: temperature, display_name: Temperature, type: number }
"#;

pub fn sample_catalog() -> YamlCapabilityCatalog {
    YamlCapabilityCatalog::from_yaml_str(SAMPLE_CATALOG).expect("sample catalog is valid")
}
