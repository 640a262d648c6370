use hbml::config::Config;
use hbml::{Level, Logger, PlainLogMessageGenerator};
use std::fs;
use std::thread;
use tempfile::TempDir;

const TAB: &str = "    ";

fn single_file(dir: &std::path::Path) -> String {
    let mut entries: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(entries.len(), 1);
    fs::read_to_string(entries.pop().unwrap()).unwrap()
}

#[test]
fn file_output_writes_hbml_entry() {
    let tmp_dir = TempDir::new().unwrap();

    let logger = Logger::builder()
        .timestamp_format("2019-06-17 00:00:00")
        .file()
        .base_dir(tmp_dir.path().to_string_lossy())
        .app_name("app")
        .filename_format("today")
        .done()
        .build();

    thread::Builder::new()
        .name("TestThread".to_string())
        .spawn(move || logger.info("TestMethod", "Test Message"))
        .unwrap()
        .join()
        .unwrap();

    let path = tmp_dir.path().join("app").join("today.hbml");
    let content = fs::read_to_string(path).unwrap();

    assert_eq!(
        content,
        format!(
            "<LogEntry>\n{TAB}<Date>2019-06-17 00:00:00</Date>\n{TAB}<Type>INFO</Type>\n{TAB}<Thread>TestThread</Thread>\n{TAB}<Method>TestMethod</Method>\n{TAB}<Message>Test Message</Message>\n</LogEntry>\n"
        )
    );
}

#[test]
fn file_output_appends_entries() {
    let tmp_dir = TempDir::new().unwrap();

    let logger = Logger::builder()
        .file()
        .base_dir(tmp_dir.path().to_string_lossy())
        .app_name("app")
        .done()
        .build();

    logger.info("M", "one");
    logger.error("M", "two");

    let content = single_file(&tmp_dir.path().join("app"));
    assert_eq!(content.matches("<LogEntry>").count(), 2);
    let one = content.find("<Message>one</Message>").unwrap();
    let two = content.find("<Message>two</Message>").unwrap();
    assert!(one < two);
}

#[test]
fn file_output_honours_extension_and_generator() {
    let tmp_dir = TempDir::new().unwrap();

    let logger = Logger::builder()
        .timestamp_format("T")
        .file()
        .base_dir(tmp_dir.path().to_string_lossy())
        .app_name("plain")
        .filename_format("out")
        .extension(".log")
        .generator(PlainLogMessageGenerator)
        .done()
        .build();

    logger.log_with_label(Level::Warn, "Check", "disk low", "ALERT");

    let content = fs::read_to_string(tmp_dir.path().join("plain").join("out.log")).unwrap();
    assert!(content.starts_with("T [ALERT] "));
    assert!(content.trim_end().ends_with("Check: disk low"));
}

#[test]
fn file_output_uses_record_app_override() {
    let tmp_dir = TempDir::new().unwrap();

    let logger = Logger::builder()
        .file()
        .base_dir(tmp_dir.path().to_string_lossy())
        .filename_format("override")
        .done()
        .build();

    logger.log_full(Level::Info, "M", "x", None, Some("appx"));

    assert!(tmp_dir.path().join("appx").join("override.hbml").exists());
}

#[test]
fn logger_from_config_writes_under_app_dir() {
    let tmp_dir = TempDir::new().unwrap();

    let mut config = Config::default();
    config.terminal.enabled = false;
    config.file.enabled = true;
    config.file.base_dir = tmp_dir.path().to_string_lossy().into_owned();
    config.file.filename_format = "fixed".to_string();

    let logger = Logger::from_config_with(&config, "svc");
    assert_eq!(logger.output_count(), 1);
    logger.info("Start", "up");

    let content = fs::read_to_string(tmp_dir.path().join("svc").join("fixed.hbml")).unwrap();
    assert!(content.contains("<Method>Start</Method>"));
}
