//! What the manager writes to a tracing subscriber: tokens stay out of
//! info/warn output, and each operation is traced under its own span.

use std::io;
use std::sync::{Arc, Mutex};

use spelling_learned::LearnedWordsManager;
use test_fixtures::RecordingStore;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

const TOKEN: &str = "session-3f9a77c0";

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn subscriber(out: &CapturedOutput, level: Level) -> impl tracing::Subscriber + Send + Sync {
    let out = out.clone();
    tracing_subscriber::fmt()
        .with_writer(move || out.clone())
        .with_max_level(level)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .finish()
}

#[test]
fn info_and_warn_events_omit_the_token() {
    let out = CapturedOutput::default();
    let manager = LearnedWordsManager::new(
        RecordingStore::new().with_record(TOKEN, &["apples", "pears", "apples"]),
    );

    tracing::subscriber::with_default(subscriber(&out, Level::INFO), || {
        assert_eq!(manager.get_learned_words(TOKEN).unwrap(), vec!["apples", "pears"]);
        manager.delete_users_learned_words(TOKEN).unwrap();
        manager.store().fail_with("connection reset");
        assert!(manager.learn_word(TOKEN, "apples").is_err());
    });

    let text = out.text();
    assert!(text.contains("duplicates_collapsed"), "{text}");
    assert!(text.contains("learned_words_deleted"), "{text}");
    assert!(text.contains("storage_failed"), "{text}");
    assert!(!text.contains(TOKEN), "{text}");
}

#[test]
fn learned_words_size_has_its_own_span() {
    let out = CapturedOutput::default();
    let manager =
        LearnedWordsManager::new(RecordingStore::new().with_record(TOKEN, &["apples"]));

    tracing::subscriber::with_default(subscriber(&out, Level::DEBUG), || {
        assert_eq!(manager.get_learned_words_size(TOKEN).unwrap(), 6);
    });

    let text = out.text();
    assert!(text.contains("spelling.get_learned_words_size"), "{text}");
    assert!(!text.contains("spelling.get_learned_words{"), "{text}");
}
