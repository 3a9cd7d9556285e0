/*!
 * Integration tests for the full check workflow: DOCX in, HTML report out
 */

use anyhow::Result;
use linecheck::app_config::Config;
use linecheck::app_controller::Controller;
use crate::common;

/// Test the whole pipeline with a mix of passing and failing segments
#[test]
fn test_check_workflow_withViolations_shouldWriteHighlightedReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let rows = common::memoq_rows(&[
        ("1 a0", "Short source", "Kurzer Text"),
        ("2 b1", "Long source", "A very very very very very very long first line<br>Short"),
        ("3 c2", "Tags", "{1}Eine Zeile{2}<br>noch eine Zeile"),
    ]);
    let input = common::create_test_docx(temp_dir.path(), "project_de.docx", &rows)?;

    let controller = Controller::with_config(Config::default())?;
    let outcome = controller.run_with_limit(&input, None, 40)?;

    assert_eq!(outcome.segments_checked, 3);
    assert_eq!(outcome.violations, 1);
    assert_eq!(outcome.report_path, temp_dir.path().join("project_de_length_report_40.html"));

    let html = std::fs::read_to_string(&outcome.report_path)?;
    assert!(html.contains("Found 1 segments with at least one line longer than 40 characters."));
    assert!(html.contains("A very very very very very very long fir<span class=\"overflow\">st line</span><br>Short<br>"));
    assert!(html.contains("project_de.docx"));
    assert!(!html.contains("Kurzer Text"));

    Ok(())
}

/// Test that a report is written when nothing exceeds the limit
#[test]
fn test_check_workflow_withNoViolations_shouldStillWriteReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let rows = common::memoq_rows(&[("1", "Hi", "Hallo"), ("2", "Bye", "Tschüss")]);
    let input = common::create_test_docx(temp_dir.path(), "clean.docx", &rows)?;

    let controller = Controller::with_config(Config::default())?;
    let outcome = controller.run_with_limit(&input, None, 40)?;

    assert_eq!(outcome.violations, 0);
    let html = std::fs::read_to_string(&outcome.report_path)?;
    assert!(html.contains("NO SEGMENTS EXCEED THE LIMIT OF 40 CHARACTERS PER LINE."));

    Ok(())
}

/// Test that the report can be sent to a separate folder
#[test]
fn test_check_workflow_withOutputDir_shouldWriteThere() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let rows = common::memoq_rows(&[("1", "a", "b")]);
    let input = common::create_test_docx(temp_dir.path(), "export.docx", &rows)?;
    let out_dir = temp_dir.path().join("reports");

    let controller = Controller::with_config(Config::default())?;
    let outcome = controller.run_with_limit(&input, Some(out_dir.as_path()), 12)?;

    assert_eq!(outcome.report_path, out_dir.join("export_length_report_12.html"));
    assert!(outcome.report_path.exists());

    Ok(())
}

/// Test that include_passing lists every segment
#[test]
fn test_check_workflow_withIncludePassing_shouldListAllSegments() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let rows = common::memoq_rows(&[("1", "a", "fits"), ("2", "b", "this line does not fit")]);
    let input = common::create_test_docx(temp_dir.path(), "all.docx", &rows)?;

    let mut config = Config::default();
    config.report.include_passing = true;
    let controller = Controller::with_config(config)?;
    let outcome = controller.run_with_limit(&input, None, 10)?;

    let html = std::fs::read_to_string(&outcome.report_path)?;
    assert_eq!(html.matches("<tr class=\"row-ok\">").count(), 1);
    assert_eq!(html.matches("<tr class=\"row-overflow\">").count(), 1);

    Ok(())
}

/// Test input discovery followed by the check
#[test]
fn test_check_workflow_withDiscoveredInput_shouldUseDocx() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let rows = common::memoq_rows(&[("1", "a", "b")]);
    common::create_test_docx(temp_dir.path(), "found.docx", &rows)?;

    let controller = Controller::with_config(Config::default())?;
    let input = controller.resolve_input(None, temp_dir.path())?;

    assert_eq!(input.file_name().unwrap(), "found.docx");
    let outcome = controller.run_with_limit(&input, None, 5)?;
    assert!(outcome.report_path.exists());

    Ok(())
}

/// Test that legacy exports are rejected before any check runs
#[test]
fn test_check_workflow_withRtfOnly_shouldRejectInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "export.rtf", "{\\rtf1 hello}")?;

    let controller = Controller::with_config(Config::default())?;
    let result = controller.resolve_input(None, temp_dir.path());

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("bilingual DOCX"));

    Ok(())
}

/// Test that a document without a bilingual table aborts without a report
#[test]
fn test_check_workflow_withoutTable_shouldFailWithoutReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let rows = vec![vec!["Name", "Value", "Other"], vec!["a", "b", "c"]];
    let input = common::create_test_docx(temp_dir.path(), "wrong.docx", &rows)?;

    let controller = Controller::with_config(Config::default())?;
    let result = controller.run_with_limit(&input, None, 40);

    assert!(result.is_err());
    assert!(!temp_dir.path().join("wrong_length_report_40.html").exists());

    Ok(())
}
