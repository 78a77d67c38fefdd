/// Системный диалог подтверждения. Без `window` считается отказом.
pub fn confirm(message: &str) -> bool {
    if let Some(win) = web_sys::window() {
        win.confirm_with_message(message).unwrap_or(false)
    } else {
        false
    }
}
