use super::*;

#[test]
fn page_paths() {
    assert_eq!(Page::Login.path(), "/login");
    assert_eq!(Page::Register.path(), "/register");
    assert_eq!(Page::Chat.path(), "/chat");
}
