//! Property-based tests for taglog using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use std::io::Write;
use std::sync::Arc;
use taglog::{Level, Logger, WriterEmitter};

fn active_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Panic),
        Just(Level::Fatal),
    ]
}

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![active_level(), Just(Level::None)]
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

proptest! {
    /// Tag conversions roundtrip for exactly the six active levels.
    #[test]
    fn test_tag_roundtrip(level in active_level()) {
        prop_assert_eq!(Level::from_tag(level.as_tag()), level);
        prop_assert_eq!(level.as_tag().len(), 4);
    }

    /// Any string that is not a canonical tag parses to the sentinel.
    #[test]
    fn test_unknown_tags_parse_to_none(tag in "\\PC*") {
        let canonical = ["DEBU", "INFO", "WARN", "ERRO", "PANI", "FATA"];
        prop_assume!(!canonical.contains(&tag.as_str()));
        prop_assert_eq!(Level::from_tag(&tag), Level::None);
    }

    /// Lowercased canonical tags are rejected (the lookup is case-sensitive).
    #[test]
    fn test_parse_is_case_sensitive(level in active_level()) {
        prop_assert_eq!(Level::from_tag(&level.as_tag().to_lowercase()), Level::None);
    }

    /// Level ordering is consistent with the numeric encoding.
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// A call at level L is emitted iff L >= threshold.
    ///
    /// Effect levels are exercised through the filter predicate only; the
    /// write-path check uses the non-effect levels.
    #[test]
    fn test_emitted_iff_at_or_above_threshold(
        threshold in any_level(),
        level in active_level(),
        message in "[^\\r\\n]{0,40}",
    ) {
        let buf = SharedBuf::default();
        let logger = Logger::new(WriterEmitter::new(buf.clone()));
        logger.set_level(threshold);

        prop_assert_eq!(logger.enabled(level), level >= threshold);

        if !matches!(level, Level::Panic | Level::Fatal) {
            logger.log(level, message.clone());
            let out = String::from_utf8(buf.0.lock().clone()).expect("utf8");
            if level >= threshold {
                prop_assert_eq!(out, format!("{} {}\n", level.as_tag(), message));
            } else {
                prop_assert_eq!(out, "");
            }
        }
    }

    /// Formatted and unformatted variants render identical lines.
    #[test]
    fn test_formatted_matches_unformatted(message in "[^\\r\\n]{0,40}") {
        let buf1 = SharedBuf::default();
        let logger1 = Logger::new(WriterEmitter::new(buf1.clone()));
        logger1.info(message.clone());

        let buf2 = SharedBuf::default();
        let logger2 = Logger::new(WriterEmitter::new(buf2.clone()));
        logger2.infof(format_args!("{}", message));

        prop_assert_eq!(&*buf1.0.lock(), &*buf2.0.lock());
    }
}
