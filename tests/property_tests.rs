//! Property-based tests for the logging facade using proptest

use proptest::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use unilog::prelude::*;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("valid utf8 output")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Trace),
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
    ]
}

proptest! {
    /// Severity names roundtrip through FromStr
    #[test]
    fn test_severity_str_roundtrip(severity in prop_oneof![
        Just(Severity::Trace),
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
        Just(Severity::Fatal),
    ]) {
        let parsed: Severity = severity.to_str().parse().unwrap();
        prop_assert_eq!(severity, parsed);
    }

    /// Severity ordering is consistent with the numeric discriminants
    #[test]
    fn test_severity_ordering(
        level1 in any_severity(),
        level2 in any_severity(),
    ) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Any message, including ones with embedded line breaks, occupies
    /// exactly one output line
    #[test]
    fn test_arbitrary_message_stays_on_one_line(message in "[a-zA-Z0-9 \n\r\t{}\"=/\\\\-]{0,64}") {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .min_level(Severity::Trace)
            .writer(buf.clone())
            .build();

        logger.info(message);

        let content = buf.contents();
        prop_assert!(content.ends_with('\n'));
        prop_assert_eq!(content.lines().count(), 1);
    }

    /// JSON output always parses as a single well-formed object carrying
    /// the fixed keys, whatever the message and field contents
    #[test]
    fn test_json_records_always_parse(
        severity in any_severity(),
        message in ".*",
        key in "[a-zA-Z_.]{1,12}",
        value in ".*",
    ) {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .min_level(Severity::Trace)
            .format(OutputFormat::Json)
            .writer(buf.clone())
            .build();

        logger.log_with_fields(severity, message, &[field(key, value)]);

        let content = buf.contents();
        prop_assert_eq!(content.lines().count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(content.trim_end())
            .expect("emitted record must be parseable");
        prop_assert!(parsed.is_object());
        prop_assert_eq!(parsed["level"].as_str().unwrap(), severity.to_str());
        prop_assert!(parsed["time"].is_string());
        prop_assert!(parsed["msg"].is_string());
    }

    /// Derivation is persistent: whatever fields are overlaid on a child,
    /// the parent's bound set is unchanged
    #[test]
    fn test_derivation_never_mutates_parent(
        keys in proptest::collection::vec("[a-z]{1,6}", 1..8),
    ) {
        let logger = Logger::builder().writer(std::io::sink()).build();
        let parent = logger.with_fields([field("root", 1)]);

        let before = parent.bound_fields().clone();
        let _child = parent.with_fields(keys.iter().map(|k| field(k.clone(), 7)));

        prop_assert_eq!(parent.bound_fields(), &before);
    }
}
