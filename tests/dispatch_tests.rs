use std::sync::Arc;

use exchange_robot::application::{Dispatcher, RecipientRegistry, SnapshotStore};
use exchange_robot::domain::{RecipientId, StateSnapshot};
use exchange_robot::error::{DeliveryError, FetchError};
use exchange_robot::testkit::domain::SnapshotBuilder;
use exchange_robot::testkit::messenger::RecordingMessenger;
use exchange_robot::testkit::provider::ScriptedProvider;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const A: RecipientId = RecipientId::new(101);
const B: RecipientId = RecipientId::new(-202);
const C: RecipientId = RecipientId::new(303);

struct Fixture {
    provider: ScriptedProvider,
    messenger: RecordingMessenger,
    recipients: Arc<RecipientRegistry>,
    snapshots: Arc<SnapshotStore>,
    dispatcher: Dispatcher,
}

fn fixture(members: &[RecipientId]) -> Fixture {
    let provider = ScriptedProvider::new();
    let messenger = RecordingMessenger::new();
    let recipients = Arc::new(members.iter().copied().collect::<RecipientRegistry>());
    let snapshots = Arc::new(SnapshotStore::new());
    let dispatcher = Dispatcher::new(
        Arc::new(provider.clone()),
        Arc::new(messenger.clone()),
        Arc::clone(&recipients),
        Arc::clone(&snapshots),
    );

    Fixture {
        provider,
        messenger,
        recipients,
        snapshots,
        dispatcher,
    }
}

fn usd_at(rate: Decimal) -> StateSnapshot {
    SnapshotBuilder::new().currency("USD", rate).build()
}

#[tokio::test]
async fn invalid_recipient_is_pruned_and_others_still_receive() {
    let f = fixture(&[A, B, C]);
    f.provider.push(usd_at(dec!(1.05)));
    f.messenger
        .fail_for(B, DeliveryError::InvalidRecipient("bot was blocked".into()));

    let report = f.dispatcher.send_rates().await.expect("dispatch");

    assert_eq!(report.pruned, vec![B]);
    assert_eq!(f.recipients.snapshot(), vec![A, C]);
    assert_eq!(f.messenger.sent_to(A), vec!["- USD: 105\n".to_string()]);
    assert_eq!(f.messenger.sent_to(C), vec!["- USD: 105\n".to_string()]);
}

#[tokio::test]
async fn transient_failure_keeps_recipient() {
    let f = fixture(&[A, B]);
    f.provider.push(usd_at(dec!(1)));
    f.messenger
        .fail_for(B, DeliveryError::Other("Too Many Requests".into()));

    let report = f.dispatcher.send_rates().await.expect("dispatch");

    assert_eq!(report.failed, vec![B]);
    assert!(report.pruned.is_empty());
    assert_eq!(f.recipients.len(), 2);
    assert_eq!(f.messenger.len(), 1);
}

#[tokio::test]
async fn arrows_compare_against_previous_snapshot() {
    let f = fixture(&[A]);
    f.snapshots.set_current(usd_at(dec!(1)));
    f.snapshots.demote_current();
    f.provider.push(usd_at(dec!(1.05)));

    f.dispatcher.send_rates().await.expect("dispatch");

    assert_eq!(f.messenger.sent_to(A), vec!["↑ USD: 105\n".to_string()]);
}

#[tokio::test]
async fn empty_board_sends_nothing() {
    let f = fixture(&[A]);
    f.provider.push(SnapshotBuilder::new().build());

    let report = f.dispatcher.send_rates().await.expect("dispatch");

    assert!(report.skipped_empty);
    assert!(f.messenger.is_empty());
}

#[tokio::test]
async fn fetch_failure_sends_nothing() {
    let f = fixture(&[A]);
    f.provider.push_error(FetchError::Status { status: 503 });

    let result = f.dispatcher.send_rates().await;

    assert!(matches!(result, Err(FetchError::Status { status: 503 })));
    assert!(f.messenger.is_empty());
    assert_eq!(f.recipients.len(), 1);
}

#[tokio::test]
async fn no_recipients_is_not_an_error() {
    let f = fixture(&[]);
    f.provider.push(usd_at(dec!(1)));

    let report = f.dispatcher.send_rates().await.expect("dispatch");

    assert!(report.delivered.is_empty());
    assert_eq!(f.provider.fetch_count(), 1);
}
