#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use std::io::{self, BufReader, Cursor, Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use loosexml::{
    parse_file,
    utils::{read_file, write_file},
    Element, ErrorKind, FormatConfig, Parser, ParserConfig, ReaderChunks,
};
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook_count = Arc::clone(&count);
    (count, move || {
        hook_count.fetch_add(1, Ordering::SeqCst);
    })
}

/// Serves `data`, then fails every read
struct FailingRead {
    data: Vec<u8>,
    pos: usize,
}

impl Read for FailingRead {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        if rest.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream cut"));
        }
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Never ends and never yields a `<`
struct Endless {
    served: Arc<AtomicUsize>,
}

impl Read for Endless {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        buf.fill(b'x');
        self.served.fetch_add(buf.len(), Ordering::SeqCst);
        Ok(buf.len())
    }
}

/// Log sink shared with the subscriber
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_parse_file() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "<?xml version=\"1.0\"?>\n<config>\n  <name>demo</name>\n  <port>8080</port>\n</config>\n"
    )
    .unwrap();

    let doc = parse_file(file.path()).unwrap();
    assert_eq!(doc.root.tag, "config");
    assert_eq!(doc.root.find("port").and_then(Element::text), Some("8080"));
}

#[test]
fn test_parse_missing_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(dir.path().join("absent.xml")).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io(_)));
}

#[test]
fn test_write_then_read_back() {
    init_tracing();
    let doc = loosexml::from_str("<a x=\"1\"><b>hi</b><!-- c --></a>").unwrap();
    let file = NamedTempFile::new().unwrap();

    write_file(file.path(), &doc, &FormatConfig::with_indent("  ")).unwrap();
    let text = read_file(file.path()).unwrap();
    assert_eq!(text, "<a x=\"1\">\n  <b>hi</b>\n  <!-- c -->\n</a>\n");
    assert_eq!(parse_file(file.path()).unwrap(), doc);
}

#[test]
fn test_open_file_chunks() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<r><s/></r>").unwrap();

    let (count, hook) = counter();
    let chunks = ReaderChunks::open(file.path()).unwrap().on_release(hook);
    let collected: Vec<String> = chunks.collect::<Result<_, _>>().unwrap();

    assert_eq!(collected, ["", "r>", "s/>", "/r>"]);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_read_error_propagates_and_releases() {
    init_tracing();
    let (count, hook) = counter();
    let reader = BufReader::new(FailingRead {
        data: b"<root><a>one</a><b>".to_vec(),
        pos: 0,
    });
    let chunks = ReaderChunks::new(reader).on_release(hook);

    let err = Parser::new().parse_chunks(chunks).unwrap_err();
    match err.kind() {
        ErrorKind::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_abandoned_stream_releases() {
    init_tracing();
    let (count, hook) = counter();
    let parser = Parser::with_config(ParserConfig {
        max_depth: 2,
        ..ParserConfig::default()
    });
    let chunks = ReaderChunks::new("<a><b><c><d/></c></b></a>".as_bytes()).on_release(hook);

    let err = parser.parse_chunks(chunks).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MaxDepthExceeded { max: 2 }));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_successful_parse_releases_once() {
    let (count, hook) = counter();
    let chunks = ReaderChunks::new("<a><b/></a>".as_bytes()).on_release(hook);
    let doc = Parser::new().parse_chunks(chunks).unwrap();
    assert_eq!(doc.root.child_elements().count(), 1);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_sample_fixture_round_trips() {
    init_tracing();
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/input/sample.xml");
    let doc = parse_file(&path).unwrap();

    assert_eq!(doc.prolog.len(), 3);
    assert_eq!(doc.root.attribute("city"), Some("Lyon"));
    let reference = doc.root.child_elements().nth(1).unwrap();
    let notes = reference
        .find("book")
        .and_then(|book| book.find("notes"))
        .and_then(Element::text);
    assert_eq!(notes, Some("Two volumes,\n        kept behind the desk."));

    // canonical apart from the declaration and the doctype's bare name
    let printed = loosexml::to_string_with_config(&doc, &FormatConfig::with_indent("  "));
    let original = read_file(&path).unwrap();
    assert_eq!(
        printed.lines().skip(2).collect::<Vec<_>>(),
        original.lines().skip(2).collect::<Vec<_>>()
    );
}

#[test]
fn test_size_limit_bounds_endless_stream() {
    init_tracing();
    let served = Arc::new(AtomicUsize::new(0));
    let reader = BufReader::new(Cursor::new(b"<a>".to_vec()).chain(Endless {
        served: Arc::clone(&served),
    }));
    let parser = Parser::with_config(ParserConfig {
        max_size: 1024,
        ..ParserConfig::default()
    });

    let err = parser.parse_reader(reader).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MaxSizeExceeded { max: 1024 }));
    assert_eq!(err.chunk(), Some(1));
    // at most one buffer fill past the limit
    assert!(served.load(Ordering::SeqCst) <= 1024 + 8 * 1024);
}

#[test]
fn test_early_drop_release_is_logged() {
    let captured = Captured::default();
    let sink = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("loosexml=debug"))
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut chunks = ReaderChunks::new("<a><b/></a>".as_bytes());
        assert!(chunks.next().is_some());
        drop(chunks);
    });

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("chunk source released"), "logs: {logs}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_write_is_logged() {
    let captured = Captured::default();
    let sink = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("loosexml=error"))
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();
    let doc = loosexml::from_str("<a><b>payload</b></a>").unwrap();

    let err = tracing::subscriber::with_default(subscriber, || {
        write_file("/dev/full", &doc, &FormatConfig::default()).unwrap_err()
    });

    assert!(matches!(err.kind(), ErrorKind::Io(_)));
    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("Cannot write to file /dev/full"), "logs: {logs}");
}
