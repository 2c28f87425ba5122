//! Integration tests for the share fallback chain

use async_trait::async_trait;
use horoskops::api::decode_generate;
use horoskops::controller::Picker;
use horoskops::locale;
use horoskops::share::{ShareError, ShareOutcome, SharePayload, ShareTarget, share_with};
use horoskops::types::SignButton;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Behaviour {
    Unavailable,
    Unsupported,
    Cancel,
    Fail,
    Succeed(fn() -> ShareOutcome),
}

struct FakeTarget {
    name: &'static str,
    behaviour: Behaviour,
    received: Rc<RefCell<Vec<String>>>,
}

impl FakeTarget {
    fn boxed(
        name: &'static str,
        behaviour: Behaviour,
        received: &Rc<RefCell<Vec<String>>>,
    ) -> Box<dyn ShareTarget> {
        Box::new(Self {
            name,
            behaviour,
            received: Rc::clone(received),
        })
    }
}

#[async_trait(?Send)]
impl ShareTarget for FakeTarget {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        !matches!(self.behaviour, Behaviour::Unavailable)
    }

    async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        self.received
            .borrow_mut()
            .push(format!("{}|{}", self.name, payload.text));
        match self.behaviour {
            Behaviour::Unavailable | Behaviour::Unsupported => Err(ShareError::Unsupported),
            Behaviour::Cancel => Err(ShareError::Cancelled),
            Behaviour::Fail => Err(ShareError::Failed("boom".into())),
            Behaviour::Succeed(outcome) => Ok(outcome()),
        }
    }
}

fn leo_payload() -> SharePayload {
    let mut picker = Picker::default();
    let ticket = picker.select_sign(&SignButton::new("Leo", "♌"));
    picker.resolve(
        ticket.seq,
        decode_generate(r#"{"ok":true,"sign":"Leo","text":"You will trip on air.","sarcasm":77}"#),
    );
    picker.share_payload().expect("result to share")
}

#[test]
fn payload_text_and_title() {
    let payload = leo_payload();
    assert_eq!(payload.title, "Horoskops Leo");
    assert_eq!(payload.text, "Leo: You will trip on air. (Sarkasms 77/100)");
}

#[test]
fn nothing_to_share_before_a_result() {
    assert!(Picker::default().share_payload().is_none());
}

#[tokio::test]
async fn clipboard_used_when_native_share_unsupported() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let targets = vec![
        FakeTarget::boxed("native", Behaviour::Unsupported, &received),
        FakeTarget::boxed("clipboard", Behaviour::Succeed(|| ShareOutcome::Copied), &received),
    ];

    let outcome = share_with(&targets, &leo_payload()).await;
    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(outcome.notice(), Some(locale::COPIED));
    assert_eq!(
        received.borrow().last().map(String::as_str),
        Some("clipboard|Leo: You will trip on air. (Sarkasms 77/100)")
    );
}

#[tokio::test]
async fn unavailable_targets_are_skipped() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let targets = vec![
        FakeTarget::boxed("native", Behaviour::Unavailable, &received),
        FakeTarget::boxed("clipboard", Behaviour::Succeed(|| ShareOutcome::Copied), &received),
    ];

    assert_eq!(share_with(&targets, &leo_payload()).await, ShareOutcome::Copied);
    assert_eq!(received.borrow().len(), 1);
}

#[tokio::test]
async fn cancelled_native_share_is_swallowed() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let targets = vec![
        FakeTarget::boxed("native", Behaviour::Cancel, &received),
        FakeTarget::boxed("clipboard", Behaviour::Succeed(|| ShareOutcome::Copied), &received),
    ];

    let outcome = share_with(&targets, &leo_payload()).await;
    assert_eq!(outcome, ShareOutcome::Dismissed);
    assert_eq!(outcome.notice(), None);
    assert!(received.borrow().iter().all(|r| r.starts_with("native|")));
}

#[tokio::test]
async fn native_share_success_stops_the_chain() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let targets = vec![
        FakeTarget::boxed("native", Behaviour::Succeed(|| ShareOutcome::Shared), &received),
        FakeTarget::boxed("clipboard", Behaviour::Succeed(|| ShareOutcome::Copied), &received),
    ];

    assert_eq!(share_with(&targets, &leo_payload()).await, ShareOutcome::Shared);
    assert_eq!(received.borrow().len(), 1);
}

#[tokio::test]
async fn prompt_when_every_target_fails() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let targets = vec![
        FakeTarget::boxed("native", Behaviour::Fail, &received),
        FakeTarget::boxed("clipboard", Behaviour::Unavailable, &received),
    ];

    let payload = leo_payload();
    assert_eq!(
        share_with(&targets, &payload).await,
        ShareOutcome::Prompt(payload.text.clone())
    );
}
