//! Table and pager rendering from query results.
//!
//! Each kind gets its own column set, headered in the active locale.
//! The id column is the handle operators pass back to `update` and
//! `delete`.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::catalog::{Guide, Manual, Package, Policy};
use crate::i18n::{language_name, text, Label, Locale};
use crate::store::{page_window, PageLabel};

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Package table page.
#[must_use]
pub fn package_table(items: &[&Package], locale: Locale) -> String {
    if items.is_empty() {
        return text(locale, Label::NoData).to_string();
    }
    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        text(locale, Label::Version),
        text(locale, Label::Description),
        text(locale, Label::UploadDate),
        text(locale, Label::Status),
    ]);
    for package in items {
        builder.push_record([
            package.id.to_string(),
            package.version.clone(),
            package.description.display(locale).to_string(),
            package.upload_date.clone(),
            package.status.label(locale).to_string(),
        ]);
    }
    render(builder)
}

/// Manual table page.
#[must_use]
pub fn manual_table(items: &[&Manual], locale: Locale) -> String {
    if items.is_empty() {
        return text(locale, Label::NoData).to_string();
    }
    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        text(locale, Label::Language),
        text(locale, Label::FileName),
        text(locale, Label::UploadDate),
        text(locale, Label::Status),
    ]);
    for manual in items {
        builder.push_record([
            manual.id.to_string(),
            language_name(&manual.language).to_string(),
            manual.file_name.clone(),
            manual.upload_date.clone(),
            manual.status.label(locale).to_string(),
        ]);
    }
    render(builder)
}

/// Guide table page.
#[must_use]
pub fn guide_table(items: &[&Guide], locale: Locale) -> String {
    if items.is_empty() {
        return text(locale, Label::NoData).to_string();
    }
    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        text(locale, Label::Language),
        text(locale, Label::FileName),
        text(locale, Label::UploadDate),
        text(locale, Label::Status),
    ]);
    for guide in items {
        builder.push_record([
            guide.id.to_string(),
            language_name(&guide.language).to_string(),
            guide.file_name.clone(),
            guide.upload_date.clone(),
            guide.status.label(locale).to_string(),
        ]);
    }
    render(builder)
}

/// Policy table page. No status column; policies have none.
#[must_use]
pub fn policy_table(items: &[&Policy], locale: Locale) -> String {
    if items.is_empty() {
        return text(locale, Label::NoData).to_string();
    }
    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        text(locale, Label::Language),
        text(locale, Label::Title),
        text(locale, Label::UpdateDate),
    ]);
    for policy in items {
        let title = if policy.title.is_empty() {
            "-"
        } else {
            policy.title.as_str()
        };
        builder.push_record([
            policy.id.to_string(),
            language_name(&policy.language).to_string(),
            title.to_string(),
            policy.update_date.clone(),
        ]);
    }
    render(builder)
}

/// Pager line: the page window with the current page bracketed.
#[must_use]
pub fn pager(total_pages: u32, current: u32) -> String {
    let labels: Vec<String> = page_window(total_pages, current)
        .into_iter()
        .map(|label| match label {
            PageLabel::Page(n) if n == current => format!("[{n}]"),
            PageLabel::Page(n) => n.to_string(),
            PageLabel::Gap => "...".to_string(),
        })
        .collect();
    labels.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;

    #[test]
    fn test_empty_page_shows_no_data_label() {
        assert_eq!(package_table(&[], Locale::Zh), "暂无数据");
        assert_eq!(policy_table(&[], Locale::En), "No data");
    }

    #[test]
    fn test_package_table_localizes_description() {
        let seeds = Package::seed();
        let items: Vec<&Package> = seeds.iter().collect();

        let zh = package_table(&items, Locale::Zh);
        assert!(zh.contains("修复了网络连接问题，优化了系统性能"));

        let en = package_table(&items, Locale::En);
        assert!(en.contains("Fixed network connection issues"));
        assert!(en.contains("Version"));
    }

    #[test]
    fn test_manual_table_shows_fixed_language_names() {
        let seeds = Manual::seed();
        let items: Vec<&Manual> = seeds.iter().collect();
        let table = manual_table(&items, Locale::En);
        assert!(table.contains("简体中文"));
        assert!(table.contains("English"));
    }

    #[test]
    fn test_pager_brackets_current_page() {
        assert_eq!(pager(5, 2), "1 [2] 3 4 5");
        assert_eq!(pager(10, 5), "1 ... 4 [5] 6 ... 10");
        assert_eq!(pager(0, 1), "");
    }
}
