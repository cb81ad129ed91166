use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all(deserialize = "lowercase"))]
pub enum TimeStep {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeStep::Daily => write!(f, "daily"),
            TimeStep::Weekly => write!(f, "weekly"),
            TimeStep::Monthly => write!(f, "monthly"),
        }
    }
}
