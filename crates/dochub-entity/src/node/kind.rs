//! Node type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of entry a [`super::DocumentNode`] represents.
///
/// Only [`NodeType::Folder`] and [`NodeType::AuditSchedule`] may have
/// children; audit schedules behave as folders for navigation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// A regular folder.
    Folder,
    /// A leaf document.
    File,
    /// An audit-schedule container. Navigates like a folder.
    AuditSchedule,
    /// A reusable form template.
    FormTemplate,
    /// A filled-in form response.
    FormResponse,
}

impl NodeType {
    /// Whether nodes of this type may have children.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Folder | Self::AuditSchedule)
    }

    /// The wire name used by the Document API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::AuditSchedule => "auditSchedule",
            Self::FormTemplate => "formTemplate",
            Self::FormResponse => "formResponse",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = dochub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(Self::Folder),
            "file" => Ok(Self::File),
            "auditSchedule" => Ok(Self::AuditSchedule),
            "formTemplate" => Ok(Self::FormTemplate),
            "formResponse" => Ok(Self::FormResponse),
            _ => Err(dochub_core::AppError::validation(format!(
                "Unknown node type: {s}"
            ))),
        }
    }
}
