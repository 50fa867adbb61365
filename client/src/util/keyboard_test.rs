use super::*;

#[test]
fn ctrl_or_cmd_s_saves() {
    assert!(is_save_shortcut("s", true, false));
    assert!(is_save_shortcut("s", false, true));
    assert!(is_save_shortcut("S", true, false));
}

#[test]
fn plain_or_other_keys_do_not_save() {
    assert!(!is_save_shortcut("s", false, false));
    assert!(!is_save_shortcut("d", true, false));
    assert!(!is_save_shortcut("Enter", false, true));
}
