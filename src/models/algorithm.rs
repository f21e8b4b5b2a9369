//! Scheduling algorithm identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The scheduling discipline that produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come, First-Serve.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in comparison order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::RoundRobin];

    /// Abbreviation (e.g., "FCFS", "RR").
    pub fn short_name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Serve",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether the algorithm may split a burst across several intervals.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.short_name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "rr" | "round-robin" | "round_robin" => Ok(Algorithm::RoundRobin),
            other => Err(Error::Config(format!("unknown algorithm '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("rr".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(
            "Round-Robin".parse::<Algorithm>().unwrap(),
            Algorithm::RoundRobin
        );
        assert!("lottery".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Algorithm::RoundRobin.short_name(), "RR");
        assert_eq!(Algorithm::Fcfs.to_string(), "First-Come, First-Serve (FCFS)");
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::RoundRobin).unwrap();
        assert_eq!(json, r#""round_robin""#);
    }
}
