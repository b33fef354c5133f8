use super::*;

#[test]
fn logout_leaves_guarded_pages_before_signing_out() {
    assert_eq!(logout_step("/profile"), LogoutStep::Navigate);
    assert_eq!(logout_step("/ad/7/edit"), LogoutStep::Navigate);
    assert_eq!(logout_step("/"), LogoutStep::SignOut);
}
