//! Tests for log message generators.

use hbml::message::{
    DATE_LABEL, LOG_ENTRY_LABEL, MESSAGE_LABEL, METHOD_LABEL, THREAD_LABEL, TYPE_LABEL,
};
use hbml::{Element, HbmlLogMessageGenerator, LogMessageGenerator, PlainLogMessageGenerator};

const TEST_TIMESTAMP: &str = "2019-06-17 00:00:00";
const TEST_THREAD_NAME: &str = "TestThread";
const TEST_METHOD_NAME: &str = "TestMethod";
const TEST_TYPE: &str = "TestType";
const TEST_MESSAGE: &str = "Test Message";
const TAB: &str = "    ";

#[test]
fn generate_log_message_format() {
    let expected = format!(
        "<LogEntry>\n{TAB}<Date>{TEST_TIMESTAMP}</Date>\n{TAB}<Type>{TEST_TYPE}</Type>\n{TAB}<Thread>{TEST_THREAD_NAME}</Thread>\n{TAB}<Method>{TEST_METHOD_NAME}</Method>\n{TAB}<Message>{TEST_MESSAGE}</Message>\n</LogEntry>"
    );
    let actual = HbmlLogMessageGenerator.generate_log_message(
        TEST_TIMESTAMP,
        TEST_THREAD_NAME,
        TEST_METHOD_NAME,
        TEST_TYPE,
        TEST_MESSAGE,
    );
    assert_eq!(actual, expected);
}

#[test]
fn entry_children_are_in_schema_order() {
    let entry = HbmlLogMessageGenerator::build_entry("d", "t", "m", "y", "msg");
    assert_eq!(entry.label(), LOG_ENTRY_LABEL);

    let labels: Vec<&str> = entry.children().map(Element::label).collect();
    assert_eq!(
        labels,
        vec![DATE_LABEL, TYPE_LABEL, THREAD_LABEL, METHOD_LABEL, MESSAGE_LABEL]
    );
    assert_eq!(entry.child_element_value(TYPE_LABEL), Some("y"));
    assert_eq!(entry.child_element_value(THREAD_LABEL), Some("t"));
}

#[test]
fn message_text_is_written_verbatim() {
    let message = "a <b> & \"c\"";
    let rendered = HbmlLogMessageGenerator.generate_log_message("d", "t", "m", "y", message);
    assert!(rendered.contains(&format!("<Message>{message}</Message>")));
}

#[test]
fn empty_fields_render_as_empty_leaves() {
    let rendered = HbmlLogMessageGenerator.generate_log_message("", "", "", "", "");
    assert_eq!(
        rendered,
        format!(
            "<LogEntry>\n{TAB}<Date></Date>\n{TAB}<Type></Type>\n{TAB}<Thread></Thread>\n{TAB}<Method></Method>\n{TAB}<Message></Message>\n</LogEntry>"
        )
    );
}

#[test]
fn plain_generator_is_single_line() {
    let line = PlainLogMessageGenerator.generate_log_message(
        TEST_TIMESTAMP,
        TEST_THREAD_NAME,
        TEST_METHOD_NAME,
        TEST_TYPE,
        TEST_MESSAGE,
    );
    assert_eq!(
        line,
        "2019-06-17 00:00:00 [TestType] TestThread TestMethod: Test Message"
    );
}
