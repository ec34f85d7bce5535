//! Bilingual display support.
//!
//! Two locales, a typed label catalog for every string the console
//! surfaces, and the fixed language names used in tables and search.
//! Labels are looked up by enum variant rather than string key so a
//! missing translation is a compile error, not a visible gap.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese (the default, as in the original console).
    #[default]
    Zh,
    /// English.
    En,
}

impl Locale {
    /// The short locale code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" => Ok(Locale::Zh),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Fixed display name of a record's language tag. Independent of the
/// active display locale, matching the original console tables.
#[must_use]
pub fn language_name(tag: &str) -> &str {
    match tag {
        "zh" => "简体中文",
        "en" => "English",
        other => other,
    }
}

/// A value carried in both locales (package descriptions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub zh: String,
    pub en: String,
}

impl LocalizedText {
    #[must_use]
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        LocalizedText {
            zh: zh.into(),
            en: en.into(),
        }
    }

    /// Text for `locale`, falling back to zh, then `-`.
    #[must_use]
    pub fn display(&self, locale: Locale) -> &str {
        let preferred = match locale {
            Locale::Zh => &self.zh,
            Locale::En => &self.en,
        };
        if !preferred.is_empty() {
            preferred
        } else if !self.zh.is_empty() {
            &self.zh
        } else {
            "-"
        }
    }
}

/// Every display string the console surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Edit,
    Delete,
    Download,
    Cancel,
    Confirm,
    NoData,
    AddSuccess,
    EditSuccess,
    DeleteSuccess,
    DownloadSuccess,
    DeleteTitle,
    DeleteConfirm,
    Version,
    Description,
    UploadDate,
    UpdateDate,
    Language,
    FileName,
    Title,
    Status,
    StatusActive,
    StatusInactive,
    UsernameLabel,
    PasswordLabel,
    CaptchaLabel,
    CaptchaError,
    LoginSuccess,
    LoginFailed,
    LogoutTitle,
    LogoutConfirm,
    LogoutSuccess,
}

/// Look up `label` in `locale`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn text(locale: Locale, label: Label) -> &'static str {
    match locale {
        Locale::Zh => match label {
            Label::Edit => "编辑",
            Label::Delete => "删除",
            Label::Download => "下载",
            Label::Cancel => "取消",
            Label::Confirm => "确定",
            Label::NoData => "暂无数据",
            Label::AddSuccess => "添加成功",
            Label::EditSuccess => "修改成功",
            Label::DeleteSuccess => "删除成功",
            Label::DownloadSuccess => "开始下载",
            Label::DeleteTitle => "确认删除",
            Label::DeleteConfirm => "确定要删除这条记录吗?",
            Label::Version => "版本号",
            Label::Description => "描述",
            Label::UploadDate => "上传日期",
            Label::UpdateDate => "更新日期",
            Label::Language => "语言",
            Label::FileName => "文件名",
            Label::Title => "标题",
            Label::Status => "状态",
            Label::StatusActive => "启用",
            Label::StatusInactive => "停用",
            Label::UsernameLabel => "用户名或邮箱",
            Label::PasswordLabel => "密码",
            Label::CaptchaLabel => "验证码",
            Label::CaptchaError => "验证码错误",
            Label::LoginSuccess => "登录成功",
            Label::LoginFailed => "用户名或密码错误",
            Label::LogoutTitle => "确认退出",
            Label::LogoutConfirm => "确定要退出系统吗?",
            Label::LogoutSuccess => "已退出系统",
        },
        Locale::En => match label {
            Label::Edit => "Edit",
            Label::Delete => "Delete",
            Label::Download => "Download",
            Label::Cancel => "Cancel",
            Label::Confirm => "Confirm",
            Label::NoData => "No data",
            Label::AddSuccess => "Added successfully",
            Label::EditSuccess => "Updated successfully",
            Label::DeleteSuccess => "Deleted successfully",
            Label::DownloadSuccess => "Download started",
            Label::DeleteTitle => "Confirm Deletion",
            Label::DeleteConfirm => "Are you sure you want to delete this record?",
            Label::Version => "Version",
            Label::Description => "Description",
            Label::UploadDate => "Upload Date",
            Label::UpdateDate => "Update Date",
            Label::Language => "Language",
            Label::FileName => "File Name",
            Label::Title => "Title",
            Label::Status => "Status",
            Label::StatusActive => "Active",
            Label::StatusInactive => "Inactive",
            Label::UsernameLabel => "Username or Email",
            Label::PasswordLabel => "Password",
            Label::CaptchaLabel => "Captcha",
            Label::CaptchaError => "Invalid captcha",
            Label::LoginSuccess => "Login successful",
            Label::LoginFailed => "Invalid username or password",
            Label::LogoutTitle => "Confirm Logout",
            Label::LogoutConfirm => "Are you sure you want to logout?",
            Label::LogoutSuccess => "Logged out successfully",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse_and_default() {
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Zh);
    }

    #[test]
    fn test_language_name_is_locale_independent() {
        assert_eq!(language_name("zh"), "简体中文");
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("de"), "de");
    }

    #[test]
    fn test_localized_text_fallback() {
        let both = LocalizedText::new("中文", "English");
        assert_eq!(both.display(Locale::En), "English");
        assert_eq!(both.display(Locale::Zh), "中文");

        let zh_only = LocalizedText::new("中文", "");
        assert_eq!(zh_only.display(Locale::En), "中文");

        assert_eq!(LocalizedText::default().display(Locale::En), "-");
    }

    #[test]
    fn test_labels_differ_by_locale() {
        assert_eq!(text(Locale::Zh, Label::Delete), "删除");
        assert_eq!(text(Locale::En, Label::Delete), "Delete");
    }

    #[test]
    fn test_locale_serde_uses_short_codes() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        let back: Locale = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(back, Locale::Zh);
    }
}
