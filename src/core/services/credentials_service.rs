use crate::core::models::credentials::AuthenticationInfo;
use crate::core::traits::interactive::InteractiveUserInfo;

/// Ask for the secrets the configured credentials still lack.
///
/// A configured private key needs a passphrase; a username without a key
/// needs a password. Returns how many secrets were filled in. An empty or
/// missing answer leaves the field unset.
pub fn complete_credentials<U: InteractiveUserInfo>(
    info: &mut AuthenticationInfo,
    user_info: &mut U,
) -> usize {
    let mut filled = 0;

    if let Some(key) = info.private_key().map(str::to_string) {
        if info.passphrase().is_none() {
            let answer = user_info.prompt_passphrase(&format!("Passphrase for key '{key}':"));
            if let Some(passphrase) = answer.filter(|p| !p.is_empty()) {
                info.set_passphrase(passphrase);
                filled += 1;
            }
        }
    } else if let Some(user) = info.username().map(str::to_string) {
        if info.password().is_none() {
            let answer = user_info.prompt_password(&format!("Password for {user}:"));
            if let Some(password) = answer.filter(|p| !p.is_empty()) {
                info.set_password(password);
                filled += 1;
            }
        }
    }

    log::debug!("filled {filled} missing credential(s) interactively");
    filled
}
