use super::*;

#[test]
fn expiring_an_older_toast_keeps_the_newer_one() {
    let mut toast = ToastState::default();
    let first = toast.show("Added to favorites".to_owned());
    let second = toast.show("Removed from favorites".to_owned());

    assert!(!toast.expire(first));
    assert_eq!(toast.message.as_deref(), Some("Removed from favorites"));

    assert!(toast.expire(second));
    assert_eq!(toast.message, None);
}

#[test]
fn expiring_after_dismiss_is_a_no_op() {
    let mut toast = ToastState::default();
    let shown = toast.show("Saved".to_owned());
    toast.dismiss();

    assert!(!toast.expire(shown));
    assert_eq!(toast, ToastState { message: None, generation: shown });
}
