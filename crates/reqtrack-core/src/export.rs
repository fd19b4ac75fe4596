//! CSV export of the currently visible requirement set.
//!
//! The document layout is fixed: a two-row metadata header, a blank row, a
//! column header, one row per requirement in supplied order, a blank row,
//! and trailing totals. Only the free-text requirement field is quoted
//! (standard CSV escaping, inner quotes doubled); every other field is
//! emitted raw.

use crate::cost::{aggregate_cost, cost_of};
use crate::model::{Project, Requirement};

/// Column header for the per-requirement rows.
const COLUMNS: &str = "ID,Requirement,Status,Priority,Complexity,Author,Date,Hours,Cost,Cost/Hour";

/// Quote a free-text field, doubling embedded double-quotes.
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Dollar figure with two decimals.
fn money(value: f64) -> String {
    format!("${value:.2}")
}

/// Render the export document for a project's visible requirement set.
///
/// Returns `None` when the requirement set is empty — exporting nothing is
/// a no-op, not an error. Rows are newline-joined, fields comma-joined.
pub fn render_csv(project: &Project, requirements: &[Requirement]) -> Option<String> {
    if requirements.is_empty() {
        return None;
    }

    let rate = project.hourly_rate;
    let mut rows = Vec::with_capacity(requirements.len() + 7);
    rows.push(format!("Project Name,{}", project.name));
    rows.push(format!("Hourly Rate,{}", money(rate)));
    rows.push(String::new());
    rows.push(COLUMNS.to_string());

    for req in requirements {
        rows.push(
            [
                req.id.clone(),
                quote(&req.text),
                req.status.to_string(),
                req.priority.to_string(),
                req.complexity.to_string(),
                req.author.clone(),
                req.date.format("%Y-%m-%d").to_string(),
                req.estimated_hours.to_string(),
                money(cost_of(req.estimated_hours, rate)),
                money(rate),
            ]
            .join(","),
        );
    }

    let totals = aggregate_cost(requirements, rate);
    rows.push(String::new());
    rows.push(format!("Total Hours,{}", totals.total_hours));
    rows.push(format!("Total Cost,{}", money(totals.total_cost)));

    Some(rows.join("\n"))
}

/// Derive the download filename from the project name: every
/// non-alphanumeric character becomes `_`.
pub fn export_filename(project_name: &str) -> String {
    let sanitized: String = project_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("requirements_{sanitized}_export.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Complexity, Priority, ProjectId, ReqType, Status};
    use chrono::TimeZone;

    fn acme() -> Project {
        Project {
            id: ProjectId::new(1).unwrap(),
            name: "Acme Co".into(),
            hourly_rate: 50.0,
        }
    }

    fn sample() -> Requirement {
        Requirement {
            id: "abc123".into(),
            text: "He said \"hi\"".into(),
            status: Status::Approved,
            priority: Priority::High,
            complexity: Complexity::Low,
            req_type: ReqType::Functional,
            author: "Jo".into(),
            date: chrono::Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
            estimated_hours: 2.0,
        }
    }

    #[test]
    fn empty_requirement_set_is_a_no_op() {
        assert!(render_csv(&acme(), &[]).is_none());
    }

    #[test]
    fn project_name_is_emitted_raw_even_with_commas() {
        let mut project = acme();
        project.name = "Acme, Inc".into();
        let doc = render_csv(&project, &[sample()]).unwrap();
        let rows: Vec<&str> = doc.lines().collect();
        assert_eq!(rows[0], "Project Name,Acme, Inc");
    }

    #[test]
    fn requirement_row_matches_reference_vector() {
        let doc = render_csv(&acme(), &[sample()]).unwrap();
        let rows: Vec<&str> = doc.lines().collect();
        assert_eq!(
            rows[4],
            "abc123,\"He said \"\"hi\"\"\",Approved,High,Low,Jo,2024-01-05,2,$100.00,$50.00"
        );
    }

    #[test]
    fn document_structure_and_totals() {
        let doc = render_csv(&acme(), &[sample()]).unwrap();
        let rows: Vec<&str> = doc.lines().collect();
        assert_eq!(rows[0], "Project Name,Acme Co");
        assert_eq!(rows[1], "Hourly Rate,$50.00");
        assert_eq!(rows[2], "");
        assert_eq!(
            rows[3],
            "ID,Requirement,Status,Priority,Complexity,Author,Date,Hours,Cost,Cost/Hour"
        );
        assert_eq!(rows[5], "");
        assert_eq!(rows[6], "Total Hours,2");
        assert_eq!(rows[7], "Total Cost,$100.00");
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn rows_keep_supplied_order() {
        let mut second = sample();
        second.id = "def456".into();
        second.estimated_hours = 1.5;
        let doc = render_csv(&acme(), &[sample(), second]).unwrap();
        let rows: Vec<&str> = doc.lines().collect();
        assert!(rows[4].starts_with("abc123,"));
        assert!(rows[5].starts_with("def456,"));
        assert_eq!(rows[7], "Total Hours,3.5");
        assert_eq!(rows[8], "Total Cost,$175.00");
    }

    #[test]
    fn filename_replaces_non_alphanumerics() {
        assert_eq!(
            export_filename("Acme Co"),
            "requirements_Acme_Co_export.csv"
        );
        assert_eq!(
            export_filename("v2.0 (beta)"),
            "requirements_v2_0__beta__export.csv"
        );
    }

    #[test]
    fn fractional_hours_render_raw() {
        let mut req = sample();
        req.estimated_hours = 2.5;
        let doc = render_csv(&acme(), &[req]).unwrap();
        let rows: Vec<&str> = doc.lines().collect();
        assert!(rows[4].contains(",2.5,$125.00,$50.00"));
        assert_eq!(rows[6], "Total Hours,2.5");
    }
}
