//! Report formatting for the tag synchronizer.
//!
//! Formatting is kept in pure functions returning strings, with thin print
//! wrappers on top, so the line layout can be tested directly. The per-branch
//! block and the summary line use stable field labels with values aligned to
//! a single column.

use crate::sync::{BranchReport, SyncReport, TagOutcome};

/// Format the report block for one branch, including the trailing separator.
pub fn format_branch_report(report: &BranchReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Branch:         {}\n", report.refname));
    out.push_str(&format!("Branch id:      {}\n", report.commit_id));
    out.push_str(&format!("Branch message: {}\n", report.summary));
    out.push_str(&format!("Tag name:       {}\n", report.tag_name));

    match &report.outcome {
        TagOutcome::AlreadyTagged => {}
        TagOutcome::Created { parent, tag_ref } => {
            out.push_str(&format!("Parent id:      {}\n", parent.id));
            out.push_str(&format!("Parent message: {}\n", parent.summary));
            out.push_str(&format!("Tag created:    {}\n", tag_ref));
        }
        TagOutcome::Failed { parent, reason } => {
            if let Some(parent) = parent {
                out.push_str(&format!("Parent id:      {}\n", parent.id));
                out.push_str(&format!("Parent message: {}\n", parent.summary));
            }
            out.push_str(&format!("{}\n", reason));
        }
    }

    out.push_str("---\n");
    out
}

/// Format the final summary line for the created-tags log.
pub fn format_summary(created: &[String]) -> String {
    if created.is_empty() {
        "No tags created.".to_string()
    } else {
        format!("Created tags:   {}", created.join(" "))
    }
}

/// Print the full scan report followed by the summary line.
pub fn display_report(report: &SyncReport) {
    for branch in &report.branches {
        print!("{}", format_branch_report(branch));
    }
    println!("{}", format_summary(&report.created));
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}
