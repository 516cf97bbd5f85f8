//! 修改历史格式化
//!
//! 将某个账户的扁平历史记录按字段分组：先按字段名做稳定划分，再按注册表声明顺序输出。
//! 不依赖任何哈希表的迭代顺序。

use crate::registry::{sold_status_label, HistoryField, Language};
use crate::types::{FormattedHistoryGroup, FormattedHistoryRecord, HistoryEntry};
use crate::utils::datetime::split_date_time;

/// 格式化单条记录
fn format_record(field: HistoryField, entry: &HistoryEntry, language: Language) -> FormattedHistoryRecord {
    let (date, time) = split_date_time(&entry.changed_at);
    let display = |raw: &str| {
        if field.translates_values() {
            sold_status_label(raw, language).to_string()
        } else {
            raw.to_string()
        }
    };

    FormattedHistoryRecord {
        date,
        time,
        old_display: display(&entry.old_value),
        new_display: display(&entry.new_value),
    }
}

/// 按字段分组并格式化（简体中文标签）
#[must_use]
pub fn format_history(entries: &[HistoryEntry]) -> Vec<FormattedHistoryGroup> {
    format_history_in(entries, Language::default())
}

/// 按字段分组并格式化
///
/// - 组内保持输入顺序
/// - 组顺序固定为 password、secret、recovery、sold_status，缺失的字段不输出
/// - 字段名不在注册表中的记录不归入任何组
#[must_use]
pub fn format_history_in(entries: &[HistoryEntry], language: Language) -> Vec<FormattedHistoryGroup> {
    let mut partitions: [Vec<&HistoryEntry>; HistoryField::ALL.len()] = Default::default();
    let mut unknown = 0usize;

    for entry in entries {
        match HistoryField::from_key(&entry.field_name) {
            Some(field) => partitions[field.index()].push(entry),
            None => unknown += 1,
        }
    }

    if unknown > 0 {
        log::debug!("{unknown} history entries with unregistered field names were skipped");
    }

    HistoryField::ALL
        .into_iter()
        .zip(partitions)
        .filter(|(_, group)| !group.is_empty())
        .map(|(field, group)| {
            let meta = field.meta();
            FormattedHistoryGroup {
                field_key: field,
                display_name: field.display_name(language),
                icon: meta.icon,
                color_token: meta.color_token,
                gradient: meta.gradient,
                entries: group
                    .into_iter()
                    .map(|entry| format_record(field, entry, language))
                    .collect(),
            }
        })
        .collect()
}
