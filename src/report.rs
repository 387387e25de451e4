use log::{info, warn};
use num_format::{Locale, ToFormattedString};

/// Something learnt about a river while analysing it.
#[derive(Debug, Clone, PartialEq)]
pub enum Fact<'a> {
    Received { river: &'a str },
    Length { river: &'a str, length_km: f64 },
    InflowCount { river: &'a str, count: usize },
    DistancesFrom { river: &'a str },
    InflowDistance { name: &'a str, distance_km: f64 },
    /// An inflow for which no mouth could be found, so there's no distance for it.
    SkippedInflow { name: &'a str, geometry_type: &'a str },
}

impl std::fmt::Display for Fact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fact::Received { river } => write!(f, "Received event with river=\"{}\"", river),
            Fact::Length { river, length_km } => {
                write!(f, "Length of river=\"{}\" is: {} km", river, length_km)
            }
            Fact::InflowCount { river, count } => write!(
                f,
                "Count of inflows for river=\"{}\": {}",
                river,
                count.to_formatted_string(&Locale::en)
            ),
            Fact::DistancesFrom { river } => {
                write!(f, "Distances from mouth of river=\"{}\":", river)
            }
            Fact::InflowDistance { name, distance_km } => {
                write!(f, "\tFrom \"{}\": distance={} km", name, distance_km)
            }
            Fact::SkippedInflow {
                name,
                geometry_type,
            } => write!(
                f,
                "\tFrom \"{}\": no mouth for geometry type {}, skipping",
                name, geometry_type
            ),
        }
    }
}

pub trait Reporter {
    fn record(&mut self, fact: &Fact);
}

/// Write every fact to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn record(&mut self, fact: &Fact) {
        match fact {
            Fact::SkippedInflow { .. } => warn!("{}", fact),
            _ => info!("{}", fact),
        }
    }
}

/// Keeps the rendered facts in memory.
impl Reporter for Vec<String> {
    fn record(&mut self, fact: &Fact) {
        self.push(fact.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Fact::Received { river: "Обь" }.to_string(),
            "Received event with river=\"Обь\""
        );
        assert_eq!(
            Fact::Length {
                river: "Ob",
                length_km: 12.5
            }
            .to_string(),
            "Length of river=\"Ob\" is: 12.5 km"
        );
        assert_eq!(
            Fact::InflowCount {
                river: "Ob",
                count: 1234
            }
            .to_string(),
            "Count of inflows for river=\"Ob\": 1,234"
        );
        assert_eq!(
            Fact::InflowDistance {
                name: "Tom",
                distance_km: 3.
            }
            .to_string(),
            "\tFrom \"Tom\": distance=3 km"
        );
    }

    #[test]
    fn vec_reporter() {
        let mut r: Vec<String> = Vec::new();
        r.record(&Fact::DistancesFrom { river: "Ob" });
        LogReporter.record(&Fact::DistancesFrom { river: "Ob" });
        assert_eq!(r, vec!["Distances from mouth of river=\"Ob\":".to_string()]);
    }
}
