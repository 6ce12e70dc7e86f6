//! Integration tests for the submission exchange.
//!
//! The prediction service is stood in for by a minimal in-process TCP
//! server that serves one scripted response per connection and reports
//! every request it saw, so the wire contract can be asserted end to end.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use cardio_client::{PredictionClient, PredictionFormController};
use cardio_model::{Field, PredictionOutcome, RiskLabel};

/// One request as seen by the stub collaborator.
struct SeenRequest {
    content_type: String,
    body: String,
}

/// Spawn the stub collaborator. Each scripted `(status, body)` pair answers
/// one connection, in order.
fn spawn_stub(responses: Vec<(u16, &'static str)>) -> (String, Receiver<SeenRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            serve_one(stream, status, body, &tx);
        }
    });

    (url, rx)
}

fn serve_one(stream: TcpStream, status: u16, body: &str, tx: &Sender<SeenRequest>) {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0usize;
    let mut content_type = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let line = line.trim_end().to_ascii_lowercase();
        if line.is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
        if let Some(value) = line.strip_prefix("content-type:") {
            content_type = value.trim().to_string();
        }
    }

    let mut request_body = vec![0u8; content_length];
    reader.read_exact(&mut request_body).unwrap();
    let _ = tx.send(SeenRequest {
        content_type,
        body: String::from_utf8_lossy(&request_body).into_owned(),
    });

    let reason = match status {
        200 => "OK",
        500 => "Internal Server Error",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn controller_for(url: &str) -> PredictionFormController {
    PredictionFormController::new(PredictionClient::new(url).unwrap())
}

#[test]
fn test_positive_prediction_resolves() {
    let (url, requests) = spawn_stub(vec![(200, r#"{"prediction":"1"}"#)]);
    let mut controller = controller_for(&url);

    let outcome = controller.submit().clone();

    assert_eq!(outcome, PredictionOutcome::Resolved(RiskLabel::Positive));
    assert!(outcome.label().unwrap().is_positive());

    let seen = requests.recv().unwrap();
    assert!(seen.content_type.starts_with("application/json"));
}

#[test]
fn test_negative_prediction_resolves() {
    let (url, _requests) = spawn_stub(vec![(200, r#"{"prediction":"0"}"#)]);
    let mut controller = controller_for(&url);

    let outcome = controller.submit().clone();

    assert_eq!(outcome, PredictionOutcome::Resolved(RiskLabel::Negative));
}

#[test]
fn test_request_body_round_trips_to_submitted_record() {
    let (url, requests) = spawn_stub(vec![(200, r#"{"prediction":"0"}"#)]);
    let mut controller = controller_for(&url);
    controller.update_field(Field::Age, "61").unwrap();
    controller.update_field(Field::Sex, "male").unwrap();
    controller.update_field(Field::Oldpeak, "2.3").unwrap();

    controller.submit();

    let seen = requests.recv().unwrap();
    let sent: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    let expected = serde_json::to_value(controller.record()).unwrap();
    assert_eq!(sent, expected);
    assert_eq!(sent.as_object().unwrap().len(), 11);
    assert_eq!(sent["Age"], 61);
    assert_eq!(sent["Sex"], 1);
    assert_eq!(sent["Oldpeak"], 2.3);
}

#[test]
fn test_server_error_fails_with_status_in_message() {
    let (url, _requests) = spawn_stub(vec![(500, r#"{"detail":"boom"}"#)]);
    let mut controller = controller_for(&url);

    let outcome = controller.submit().clone();

    match outcome {
        PredictionOutcome::Failed { message } => assert!(message.contains("500")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn test_connection_refused_fails_with_message() {
    // Grab a port that nothing listens on.
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let mut controller = controller_for(&url);

    let outcome = controller.submit().clone();

    match outcome {
        PredictionOutcome::Failed { message } => assert!(!message.is_empty()),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn test_sequential_resubmission_sends_identical_bodies() {
    let (url, requests) = spawn_stub(vec![
        (200, r#"{"prediction":"1"}"#),
        (200, r#"{"prediction":"1"}"#),
    ]);
    let mut controller = controller_for(&url);
    controller.update_field(Field::MaxHr, "178").unwrap();

    let first = controller.submit().clone();
    let second = controller.submit().clone();

    assert_eq!(first, PredictionOutcome::Resolved(RiskLabel::Positive));
    assert_eq!(first, second);

    let body_one = requests.recv().unwrap().body;
    let body_two = requests.recv().unwrap().body;
    assert_eq!(body_one, body_two);
}

#[test]
fn test_missing_prediction_field_is_an_error() {
    let (url, _requests) = spawn_stub(vec![(200, "{}")]);
    let mut controller = controller_for(&url);

    let outcome = controller.submit().clone();

    match outcome {
        PredictionOutcome::Failed { message } => assert!(message.contains("prediction")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn test_unrecognized_label_is_an_error() {
    let (url, _requests) = spawn_stub(vec![(200, r#"{"prediction":"maybe"}"#)]);
    let mut controller = controller_for(&url);

    let outcome = controller.submit().clone();

    match outcome {
        PredictionOutcome::Failed { message } => assert!(message.contains("maybe")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn test_extra_response_fields_are_ignored() {
    let (url, _requests) = spawn_stub(vec![(
        200,
        r#"{"prediction":"0","confidence":0.93,"model":"hd-v2"}"#,
    )]);
    let mut controller = controller_for(&url);

    let outcome = controller.submit().clone();

    assert_eq!(outcome, PredictionOutcome::Resolved(RiskLabel::Negative));
}

#[test]
fn test_invalid_record_never_reaches_the_wire() {
    let (url, requests) = spawn_stub(vec![(200, r#"{"prediction":"0"}"#)]);
    let mut controller = controller_for(&url);
    controller.update_field(Field::RestingBp, "999").unwrap();

    let outcome = controller.submit().clone();

    assert!(outcome.is_failed());
    assert_eq!(requests.try_recv().err(), Some(TryRecvError::Empty));
}
