use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use droid_logging::{
    Config, LogLevel, LogRecord, LogSink, LoggingContext, LoggingError, Subscribe,
    TagLevelFilter, Tagged, FALLBACK_TAG,
};

#[derive(Debug, Clone, PartialEq)]
struct Line {
    tag: String,
    level: LogLevel,
    message: String,
    stack_trace: Option<String>,
}

/// Sink recording every line; optionally failing for one message.
#[derive(Default)]
struct RecordingSink {
    lines: Mutex<Vec<Line>>,
    fail_on: Option<&'static str>,
}

impl RecordingSink {
    fn failing_on(message: &'static str) -> Self {
        Self {
            lines: Mutex::default(),
            fail_on: Some(message),
        }
    }

    fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for RecordingSink {
    fn write(
        &self,
        tag: &str,
        level: LogLevel,
        message: &str,
        stack_trace: Option<&str>,
    ) -> Result<(), LoggingError> {
        if self.fail_on == Some(message) {
            return Err(LoggingError::sink("device busy"));
        }
        self.lines.lock().unwrap().push(Line {
            tag: tag.to_string(),
            level,
            message: message.to_string(),
            stack_trace: stack_trace.map(str::to_string),
        });
        Ok(())
    }
}

struct Harness {
    ctx: LoggingContext,
    sink: Arc<RecordingSink>,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl Harness {
    fn new(filter: TagLevelFilter, sink: RecordingSink) -> Self {
        let sink = Arc::new(sink);
        let ctx = LoggingContext::builder(Config::default())
            .with_filter(filter)
            .with_sink_arc(sink.clone())
            .build();
        Self {
            ctx,
            sink,
            records: Arc::default(),
        }
    }

    fn observe(&self) {
        let store = Arc::clone(&self.records);
        let _ = self
            .ctx
            .subscribe(move |rec| store.lock().unwrap().push(rec.clone()));
    }

    fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[derive(Debug)]
struct Timeout;
impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out")
    }
}
impl Error for Timeout {}

#[test]
fn test_loggable_line_is_emitted_then_written() {
    let h = Harness::new(TagLevelFilter::new(LogLevel::Debug), RecordingSink::default());
    h.observe();
    let log = h.ctx.logger_named("Net").unwrap();

    log.debug("connected");

    let records = h.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Debug);
    assert_eq!(records[0].tag.as_ref(), "Net");
    assert_eq!(records[0].message.as_ref(), "connected");
    assert_eq!(
        h.sink.lines(),
        vec![Line {
            tag: "Net".into(),
            level: LogLevel::Debug,
            message: "connected".into(),
            stack_trace: None,
        }]
    );
}

#[test]
fn test_suppressed_low_levels_are_neither_emitted_nor_written() {
    let h = Harness::new(TagLevelFilter::default(), RecordingSink::default());
    h.observe();
    let log = h.ctx.logger_named("Net").unwrap();

    log.verbose("noise");
    log.debug("noise");

    assert!(h.records().is_empty());
    assert!(h.sink.lines().is_empty());
}

#[test]
fn test_info_and_above_reach_observers_even_when_suppressed() {
    let h = Harness::new(TagLevelFilter::default().suppress("Quiet"), RecordingSink::default());
    h.observe();
    let log = h.ctx.logger_named("Quiet").unwrap();

    log.info("i");
    log.warn("w");
    log.error("e");

    let levels: Vec<LogLevel> = h.records().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![LogLevel::Info, LogLevel::Warn, LogLevel::Error]);
    assert!(h.sink.lines().is_empty());
}

#[test]
fn test_lazy_message_not_built_when_suppressed_and_unobserved() {
    let h = Harness::new(TagLevelFilter::default().suppress("Quiet"), RecordingSink::default());
    let log = h.ctx.logger_named("Quiet").unwrap();
    let built = AtomicUsize::new(0);

    log.debug_with(|| {
        built.fetch_add(1, Ordering::SeqCst);
        "debug"
    });
    log.warn_with(|| {
        built.fetch_add(1, Ordering::SeqCst);
        "warn"
    });
    assert_eq!(built.load(Ordering::SeqCst), 0);

    // With an observer, warn is worth building; debug still is not.
    h.observe();
    log.debug_with(|| {
        built.fetch_add(1, Ordering::SeqCst);
        "debug"
    });
    log.warn_with(|| {
        built.fetch_add(1, Ordering::SeqCst);
        "warn"
    });
    assert_eq!(built.load(Ordering::SeqCst), 1);
    assert_eq!(h.records()[0].message.as_ref(), "warn");
    assert!(h.sink.lines().is_empty());
}

#[test]
fn test_lazy_message_built_once_when_loggable() {
    let h = Harness::new(TagLevelFilter::new(LogLevel::Verbose), RecordingSink::default());
    h.observe();
    let log = h.ctx.logger_named("Net").unwrap();
    let built = AtomicUsize::new(0);

    log.verbose_with(|| {
        built.fetch_add(1, Ordering::SeqCst);
        format!("payload {}", 42)
    });

    assert_eq!(built.load(Ordering::SeqCst), 1);
    assert_eq!(h.records()[0].message.as_ref(), "payload 42");
    assert_eq!(h.sink.lines()[0].message, "payload 42");
}

#[test]
fn test_error_chain_becomes_stack_trace() {
    let h = Harness::new(TagLevelFilter::default(), RecordingSink::default());
    h.observe();
    let log = h.ctx.logger_named("Net").unwrap();

    log.error_err("request failed", &Timeout);

    assert_eq!(h.records()[0].stack_trace.as_deref(), Some("timed out"));
    assert_eq!(h.sink.lines()[0].stack_trace.as_deref(), Some("timed out"));
}

#[test]
fn test_wtf_ignores_filter() {
    let h = Harness::new(TagLevelFilter::default().suppress("Quiet"), RecordingSink::default());
    h.observe();
    let log = h.ctx.logger_named("Quiet").unwrap();

    log.wtf("impossible");
    log.wtf_err("impossible again", &Timeout);

    assert_eq!(h.records().len(), 2);
    let lines = h.sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.level == LogLevel::Assert));
    assert_eq!(lines[1].stack_trace.as_deref(), Some("timed out"));
}

#[test]
fn test_panicking_subscriber_does_not_block_platform_write() {
    let h = Harness::new(TagLevelFilter::default(), RecordingSink::default());
    let _ = h.ctx.subscribe(|_| panic!("observer broke"));
    let log = h.ctx.logger_named("Net").unwrap();

    log.info("still written");

    let lines = h.sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].tag, FALLBACK_TAG);
    assert_eq!(lines[0].level, LogLevel::Error);
    assert_eq!(lines[0].message, "Emit log record failed");
    assert_eq!(lines[0].stack_trace.as_deref(), Some("observer broke"));
    assert_eq!(lines[1].message, "still written");
}

#[test]
fn test_sink_failure_is_reported_once() {
    let h = Harness::new(TagLevelFilter::default(), RecordingSink::failing_on("flaky"));
    h.observe();
    let log = h.ctx.logger_named("Net").unwrap();

    log.warn("flaky");

    assert_eq!(h.records().len(), 1, "emission happens before the write");
    let lines = h.sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].tag, "Net");
    assert_eq!(lines[0].message, "Regular logging failed");
    assert_eq!(lines[0].stack_trace.as_deref(), Some("sink write failed: device busy"));
}

#[test]
fn test_failing_report_is_dropped_without_retry() {
    struct BrokenSink(AtomicUsize);
    impl LogSink for BrokenSink {
        fn write(&self, _: &str, _: LogLevel, _: &str, _: Option<&str>) -> Result<(), LoggingError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(LoggingError::sink("offline"))
        }
    }

    let sink = Arc::new(BrokenSink(AtomicUsize::new(0)));
    let ctx = LoggingContext::builder(Config::default())
        .with_sink_arc(sink.clone())
        .build();
    let received = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&received);
    let _ = ctx.subscribe(move |_| {
        r.fetch_add(1, Ordering::SeqCst);
    });

    ctx.logger_named("Net").unwrap().error("lost");

    assert_eq!(received.load(Ordering::SeqCst), 1);
    assert_eq!(sink.0.load(Ordering::SeqCst), 2, "original write plus one report");
}

#[test]
fn test_closure_filter_and_format_args() {
    let sink = Arc::new(RecordingSink::default());
    let ctx = LoggingContext::builder(Config::default())
        .with_filter(|tag: &str, level: LogLevel| tag == "Net" || level >= LogLevel::Error)
        .with_sink_arc(sink.clone())
        .build();

    let net = ctx.logger_named("Net").unwrap();
    let db = ctx.logger_named("Db").unwrap();
    net.verbose(format_args!("{}-{}", "a", 1));
    db.warn("dropped");
    db.error("kept");

    let messages: Vec<String> = sink.lines().into_iter().map(|l| l.message).collect();
    assert_eq!(messages, vec!["a-1".to_string(), "kept".to_string()]);
    assert!(net.is_loggable(LogLevel::Verbose));
    assert!(!db.is_loggable(LogLevel::Warn));
}

#[test]
fn test_tags_from_types_and_tagged_values() {
    struct ImageCacheEvictionCoordinator;
    struct Player;
    impl Tagged for Player {}

    let ctx = LoggingContext::new(Config::default());

    assert_eq!(ctx.logger::<ImageCacheEvictionCoordinator>().tag(), "ImageCacheEvictionCoord");
    assert_eq!(ctx.logger_for(&Player).tag(), "Player");
    assert!(matches!(
        ctx.logger_named(""),
        Err(LoggingError::EmptyTag)
    ));

    let unlimited = LoggingContext::new(Config {
        max_tag_len: 0,
        ..Config::default()
    });
    assert_eq!(
        unlimited.logger::<ImageCacheEvictionCoordinator>().tag(),
        "ImageCacheEvictionCoordinator"
    );
}

#[test]
fn test_tagged_loggers_follow_context_tag_rules() {
    struct ImageCacheEvictionCoordinator;
    impl Tagged for ImageCacheEvictionCoordinator {}

    struct Anonymous;
    impl Tagged for Anonymous {
        fn logger_tag(&self) -> std::borrow::Cow<'static, str> {
            "".into()
        }
    }

    let bounded = LoggingContext::new(Config::default());
    assert_eq!(
        bounded.logger_for(&ImageCacheEvictionCoordinator).tag(),
        "ImageCacheEvictionCoord"
    );

    let unlimited = LoggingContext::new(Config {
        max_tag_len: 0,
        ..Config::default()
    });
    assert_eq!(
        unlimited.logger_for(&ImageCacheEvictionCoordinator).tag(),
        unlimited.logger::<ImageCacheEvictionCoordinator>().tag()
    );
    assert_eq!(
        unlimited.logger_for(&ImageCacheEvictionCoordinator).tag(),
        "ImageCacheEvictionCoordinator"
    );

    // An empty tag never reaches a logger.
    assert_eq!(bounded.logger_for(&Anonymous).tag(), "Anonymous");
    assert!(bounded.logger_named("").is_err());
}

#[test]
fn test_initial_subscribers_and_unsubscribe() {
    #[derive(Default)]
    struct Flag(AtomicBool);
    impl Subscribe<LogRecord> for Flag {
        fn on_event(&self, _rec: &LogRecord) {
            self.0.store(true, Ordering::SeqCst);
        }
        fn name(&self) -> &'static str {
            "flag"
        }
    }

    let flag = Arc::new(Flag::default());
    let ctx = LoggingContext::builder(Config::default())
        .with_subscribers(vec![flag.clone() as Arc<dyn Subscribe<LogRecord>>])
        .with_sink(droid_logging::NullSink)
        .build();
    assert_eq!(ctx.bus().subscriber_names(), vec!["flag"]);

    let extra = ctx.subscribe(|_| {});
    assert!(ctx.unsubscribe(extra));
    assert!(!ctx.unsubscribe(extra));

    ctx.logger_named("Net").unwrap().info("hello");
    assert!(flag.0.load(Ordering::SeqCst));
}

#[test]
fn test_emit_record_bypasses_filter() {
    let h = Harness::new(TagLevelFilter::default().suppress("Any"), RecordingSink::default());
    h.observe();

    h.ctx.emit_record(LogLevel::Verbose, "Any", "raw", Some("trace"));

    let records = h.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stack_trace.as_deref(), Some("trace"));
    assert!(h.sink.lines().is_empty());
}

#[cfg(feature = "broadcast")]
#[tokio::test]
async fn test_broadcast_bridge_observes_log_calls() {
    let ctx = LoggingContext::builder(Config::default())
        .with_sink(droid_logging::NullSink)
        .build();
    let (bridge, id) = ctx.attach_broadcast();
    let mut rx = bridge.receiver();

    let log = ctx.logger_named("Net").unwrap();
    log.error("boom");

    let rec = rx.recv().await.unwrap();
    assert_eq!(rec.level, LogLevel::Error);
    assert_eq!(rec.message.as_ref(), "boom");
    assert!(ctx.unsubscribe(id));
}
