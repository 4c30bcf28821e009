// src/data.rs

use crate::error::{QuizError, Result};
use crate::model::ProtocolFact;

/// Carga la tabla de protocolos desde el YAML embebido
pub fn read_protocols_embedded() -> Result<Vec<ProtocolFact>> {
    parse_protocols(include_str!("data/protocols.yaml"))
}

pub fn parse_protocols(yaml: &str) -> Result<Vec<ProtocolFact>> {
    let facts: Vec<ProtocolFact> = serde_yaml::from_str(yaml)?;
    if facts.is_empty() {
        return Err(QuizError::EmptyFactTable);
    }
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use std::collections::HashSet;

    #[test]
    fn embedded_table_has_twenty_unique_protocols() {
        let facts = read_protocols_embedded().expect("tabla embebida");
        assert_eq!(facts.len(), 20);
        let names: HashSet<_> = facts.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names.len(), 20);
        let tcp = facts.iter().find(|f| f.name == "TCP").unwrap();
        assert_eq!(tcp.layer, "Transport");
        assert_eq!(tcp.osi_layer, 4);
        assert!(tcp.reliable);
    }

    #[test]
    fn quoted_ports_stay_strings() {
        let facts = read_protocols_embedded().unwrap();
        let dhcp = facts.iter().find(|f| f.name == "DHCP").unwrap();
        assert_eq!(dhcp.port, "67/68");
        let http = facts.iter().find(|f| f.name == "HTTP").unwrap();
        assert_eq!(http.port, "80");
    }

    #[test]
    fn missing_difficulty_defaults_to_easy() {
        let yaml = r#"
- name: XYZ
  acronym: Example Protocol
  port: "1"
  layer: Application
  osi_layer: 7
  reliable: true
  description: "Example."
"#;
        let facts = parse_protocols(yaml).unwrap();
        assert_eq!(facts[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(parse_protocols("[]"), Err(QuizError::EmptyFactTable)));
    }
}
