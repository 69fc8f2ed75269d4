use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{TREATMENT_DELIMITER, V_DIAGNOSIS, V_TREATMENT};

///
/// How a tracked SNP is used, parsed from the database's application label.
///
/// Treatment labels encode the medication and the expected response,
/// e.g. `Treatment_Methotrexate_Positive`.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Application {
    Diagnosis,
    Treatment { medication: String, response: String },
    Other(String),
}

impl Application {
    pub fn is_diagnosis(&self) -> bool {
        matches!(self, Application::Diagnosis)
    }

    pub fn medication(&self) -> Option<&str> {
        match self {
            Application::Treatment { medication, .. } => Some(medication),
            _ => None,
        }
    }
}

impl FromStr for Application {
    /// The offending label.
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == V_DIAGNOSIS {
            return Ok(Application::Diagnosis);
        }

        if !s.contains(V_TREATMENT) {
            return Ok(Application::Other(s.to_string()));
        }

        let parts: Vec<&str> = s.split(TREATMENT_DELIMITER).collect();
        match parts.as_slice() {
            [_marker, medication, response] => Ok(Application::Treatment {
                medication: medication.to_string(),
                response: response.to_string(),
            }),
            _ => Err(s.to_string()),
        }
    }
}

impl Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Application::Diagnosis => write!(f, "{}", V_DIAGNOSIS),
            Application::Treatment {
                medication,
                response,
            } => write!(
                f,
                "{}{}{}{}{}",
                V_TREATMENT, TREATMENT_DELIMITER, medication, TREATMENT_DELIMITER, response
            ),
            Application::Other(label) => write!(f, "{}", label),
        }
    }
}
