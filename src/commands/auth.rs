//! Login and logout commands.

use color_eyre::eyre::Result;
use dialoguer::{Input, Password};
use tracing::info;

use super::{confirmer, AppContext};
use crate::console::captcha::Captcha;
use crate::console::login::{clear_session, validate_login, write_session, LoginDenied};
use crate::console::{confirm_then, notify, NotifyKind};
use crate::i18n::{text, Label};

pub fn login(ctx: &AppContext) -> Result<()> {
    let captcha = Captcha::generate(&mut rand::thread_rng());

    let username: String = Input::new()
        .with_prompt(text(ctx.locale, Label::UsernameLabel))
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt(text(ctx.locale, Label::PasswordLabel))
        .allow_empty_password(true)
        .interact()?;
    let answer: String = Input::new()
        .with_prompt(format!(
            "{} {}",
            text(ctx.locale, Label::CaptchaLabel),
            captcha.prompt()
        ))
        .allow_empty(true)
        .interact_text()?;

    match validate_login(&username, &password, &captcha, &answer) {
        Ok(()) => {
            let session = write_session(&ctx.data_dir, &username)?;
            info!(username = %session.username, "login recorded");
            notify(NotifyKind::Success, text(ctx.locale, Label::LoginSuccess));
        }
        Err(LoginDenied::EmptyCredentials) => {
            notify(NotifyKind::Error, text(ctx.locale, Label::LoginFailed));
        }
        Err(LoginDenied::BadCaptcha) => {
            notify(NotifyKind::Error, text(ctx.locale, Label::CaptchaError));
        }
    }
    Ok(())
}

pub fn logout(ctx: &AppContext, assume_yes: bool) -> Result<()> {
    let executed = confirm_then(
        confirmer(assume_yes).as_ref(),
        text(ctx.locale, Label::LogoutTitle),
        text(ctx.locale, Label::LogoutConfirm),
        || clear_session(&ctx.data_dir).map_err(Into::into),
    )?;
    if executed {
        info!("session cleared");
        notify(NotifyKind::Success, text(ctx.locale, Label::LogoutSuccess));
    }
    Ok(())
}
