use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use rps_bot::{OpponentKind, PredictorConfig};
use rps_core::Move;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Clone, Default)]
struct CapturedLines(Arc<Mutex<Vec<u8>>>);

impl CapturedLines {
    fn text(&self) -> String {
        let bytes = self.0.lock().expect("buffer lock").clone();
        String::from_utf8(bytes).expect("utf8 log output")
    }
}

impl Write for CapturedLines {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_with_filter(directives: &str) -> String {
    let captured = CapturedLines::default();
    let writer = captured.clone();
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::new(directives))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut policy = OpponentKind::Adaptive.spawn_policy(PredictorConfig::default(), 3);
        let _ = policy.choose();
        policy.observe(Move::Rock);
        let _ = policy.choose();
    });

    captured.text()
}

#[test]
fn predict_target_directive_enables_decision_events() {
    let output = capture_with_filter("warn,rps_bot::predict=debug");
    assert!(output.contains("rps_bot::predict"), "output: {output}");
    assert!(output.contains("cold_start"), "output: {output}");
    assert!(output.contains("expected=rock"), "output: {output}");
    assert!(output.contains("choice=paper"), "output: {output}");
}

#[test]
fn warn_level_keeps_decision_events_quiet() {
    let output = capture_with_filter("warn");
    assert!(!output.contains("rps_bot::predict"), "output: {output}");
}
