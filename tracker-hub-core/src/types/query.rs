//! Query selection and result tables

use serde::{Deserialize, Serialize};
use tracker_hub_backend::{ExecuteResult, TrackerProject, TrackerStatus, TrackerWorkflow, Transition};

use crate::i18n::{TableTexts, t};

/// Which collections a query asks for. All off until the user picks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySelection {
    pub projects: bool,
    pub workflows: bool,
    pub statuses: bool,
}

impl QuerySelection {
    pub fn all() -> Self {
        Self {
            projects: true,
            workflows: true,
            statuses: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.projects || self.workflows || self.statuses)
    }
}

/// One rendered table. Cells may span several lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Tables built from a query payload.
///
/// Only collections present in the payload produce a table, in the order
/// statuses, projects, workflows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTables {
    pub tables: Vec<Table>,
}

impl ResultTables {
    /// Renders with the current language.
    pub fn from_result(result: &ExecuteResult) -> Self {
        Self::localized(result, &t().tables)
    }

    pub fn localized(result: &ExecuteResult, texts: &TableTexts) -> Self {
        let mut tables = Vec::with_capacity(3);
        if let Some(statuses) = &result.statuses {
            tables.push(statuses_table(statuses, texts));
        }
        if let Some(projects) = &result.projects {
            tables.push(projects_table(projects, texts));
        }
        if let Some(workflows) = &result.workflows {
            tables.push(workflows_table(workflows, texts));
        }
        Self { tables }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn statuses_table(statuses: &[TrackerStatus], texts: &TableTexts) -> Table {
    Table {
        title: texts.statuses.to_string(),
        headers: headers(&[texts.id, texts.name, texts.description]),
        rows: statuses
            .iter()
            .map(|s| {
                vec![
                    s.id.clone(),
                    s.name.clone(),
                    s.description.clone().unwrap_or_default(),
                ]
            })
            .collect(),
    }
}

fn projects_table(projects: &[TrackerProject], texts: &TableTexts) -> Table {
    Table {
        title: texts.projects.to_string(),
        headers: headers(&[texts.key, texts.name]),
        rows: projects
            .iter()
            .map(|p| vec![p.key.clone(), p.name.clone()])
            .collect(),
    }
}

fn workflows_table(workflows: &[TrackerWorkflow], texts: &TableTexts) -> Table {
    Table {
        title: texts.workflows.to_string(),
        headers: headers(&[texts.workflow, texts.transitions]),
        rows: workflows
            .iter()
            .map(|w| {
                let transitions = w
                    .transitions
                    .iter()
                    .map(|tr| describe_transition(tr, texts))
                    .collect::<Vec<_>>()
                    .join("\n");
                vec![w.id.name.clone(), transitions]
            })
            .collect(),
    }
}

/// `From: a, b → To: c`; an empty origin reads as the start state.
fn describe_transition(transition: &Transition, texts: &TableTexts) -> String {
    let from = if transition.from.is_empty() {
        texts.start.to_string()
    } else {
        transition.from.join(", ")
    };
    format!("{}: {from} → {}: {}", texts.from, texts.to, transition.to)
}
