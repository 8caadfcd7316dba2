//! End-to-end scenarios driving the gumball machine through a service.

use gumball::service::{BufferedNotifier, ServiceStatus};
use gumball::vending::{self, GumballEvent, GumballState};
use gumball::ServiceError;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn demonstration_sequence() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);

    let mut service = vending::service(BufferedNotifier::new())
        .unwrap()
        .on_transition(move |state, context| {
            sink.lock()
                .unwrap()
                .push(gumball::Snapshot::new(*state, *context).to_string());
        });
    service.start();

    for event in [
        GumballEvent::Dispense,
        GumballEvent::Insert,
        GumballEvent::TurnCrank,
        GumballEvent::Dispense,
    ] {
        service.send(event).unwrap();
    }

    assert_eq!(
        service.notifier().messages(),
        &[
            "Please insert a quarter.",
            "You inserted a quarter.",
            "You turned the crank.",
            "A gumball comes rolling out the slot.",
        ]
    );
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            r#"noQuarterState {"count":0}"#,
            r#"noQuarterState {"count":0}"#,
            r#"hasQuarterState {"count":1}"#,
            r#"soldState {"count":1}"#,
            r#"noQuarterState {"count":0}"#,
        ]
    );
}

#[test]
fn second_quarter_is_refused() {
    let mut service = vending::service(BufferedNotifier::new()).unwrap();
    service.start();

    service.send(GumballEvent::Insert).unwrap();
    let (state, context) = service.send(GumballEvent::Insert).unwrap();

    assert_eq!(state, &GumballState::HasQuarter);
    assert_eq!(context.count, 1);
    assert_eq!(
        service.notifier().messages().last().map(String::as_str),
        Some("You can only insert one quarter.")
    );
}

#[test]
fn eject_returns_the_quarter() {
    let mut service = vending::service(BufferedNotifier::new()).unwrap();
    service.start();

    service.send(GumballEvent::Insert).unwrap();
    let (state, context) = service.send(GumballEvent::Eject).unwrap();

    assert_eq!(state, &GumballState::NoQuarter);
    assert_eq!(context.count, 0);
}

#[test]
fn events_parsed_from_names_drive_the_machine() {
    let mut service = vending::service(BufferedNotifier::new()).unwrap();
    service.start();

    for name in ["INSERT", "TURN_CRANK", "DISPENSE"] {
        let event: GumballEvent = name.parse().unwrap();
        service.send(event).unwrap();
    }

    let path: Vec<GumballState> = service.history().get_path().into_iter().copied().collect();
    assert_eq!(
        path,
        vec![
            GumballState::NoQuarter,
            GumballState::HasQuarter,
            GumballState::Sold,
            GumballState::NoQuarter,
        ]
    );
    assert!("KICK".parse::<GumballEvent>().is_err());
}

#[test]
fn stopped_machine_ignores_customers() {
    let mut service = vending::service(BufferedNotifier::new()).unwrap();
    service.start();
    service.stop();

    let result = service.send(GumballEvent::Insert).map(|_| ());

    assert_eq!(
        result,
        Err(ServiceError::NotRunning {
            machine: vending::MACHINE_ID.to_string(),
            status: ServiceStatus::Stopped,
        })
    );
    assert!(service.notifier().messages().is_empty());
}

#[test]
fn turning_the_crank_while_sold_repeats_the_dispense_message() {
    let mut service = vending::service(BufferedNotifier::new()).unwrap();
    service.start();

    service.send(GumballEvent::Insert).unwrap();
    service.send(GumballEvent::TurnCrank).unwrap();
    service.send(GumballEvent::TurnCrank).unwrap();
    service.send(GumballEvent::Dispense).unwrap();

    let messages = service.notifier().messages();
    assert_eq!(messages[2], "A gumball comes rolling out the slot.");
    assert_eq!(messages[2], messages[3]);
}

#[test]
fn logs_go_to_the_subscriber_writer_not_the_notifier() {
    let logs = SharedBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let mut service = vending::service(BufferedNotifier::new()).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        service.start();
        service.send(GumballEvent::Insert).unwrap();
    });

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("Service started"));
    assert!(output.contains("INSERT"));
    assert_eq!(service.notifier().messages(), &["You inserted a quarter."]);
}
