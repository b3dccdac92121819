// src/report.rs
// =============================================================================
// Machine-readable summary of a run, printed with --json.
//
// One entry per catalog identifier, in catalog order, saying whether it made
// it into the document and why not if it didn't.
// =============================================================================

use crate::error::DocError;
use crate::pipeline::UnitOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Documented,
    FetchFailed,
    NoCommentFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitReport {
    /// `group/member`
    pub identifier: String,
    pub status: UnitStatus,
    /// The @param tags that were rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParamReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamReport {
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: String,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl UnitReport {
    pub fn is_ok(&self) -> bool {
        self.status == UnitStatus::Documented
    }
}

pub fn build(outcomes: &[UnitOutcome]) -> Vec<UnitReport> {
    outcomes
        .iter()
        .map(|outcome| {
            let identifier = outcome.identifier.to_string();
            match &outcome.result {
                Ok(block) => UnitReport {
                    identifier,
                    status: UnitStatus::Documented,
                    params: Some(
                        block
                            .params()
                            .map(|p| ParamReport {
                                name: p.name.clone().unwrap_or_default(),
                                type_expr: p.type_expr.clone().unwrap_or_default(),
                                optional: p.optional,
                                default: p.default.clone(),
                            })
                            .collect(),
                    ),
                    message: None,
                },
                Err(e) => UnitReport {
                    identifier,
                    status: match e {
                        DocError::NoCommentFound { .. } => UnitStatus::NoCommentFound,
                        _ => UnitStatus::FetchFailed,
                    },
                    params: None,
                    message: Some(e.to_string()),
                },
            }
        })
        .collect()
}
