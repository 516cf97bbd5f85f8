//! 修改历史相关类型定义

use serde::{Deserialize, Serialize};

use crate::registry::HistoryField;
use crate::types::ApiResponse;
use crate::utils::text::{null_as_empty, string_or_number};

/// 单条字段修改记录（由外部历史存储提供，只读）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// 记录 ID（不透明，数字 ID 按十进制字符串保存）
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// 被修改的字段名（password/secret/recovery/sold_status）
    pub field_name: String,
    /// 修改前的值
    #[serde(default, deserialize_with = "null_as_empty")]
    pub old_value: String,
    /// 修改后的值
    #[serde(default, deserialize_with = "null_as_empty")]
    pub new_value: String,
    /// 修改时间，格式 `<date> <time>`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub changed_at: String,
}

/// 历史接口响应
pub type HistoryResponse = ApiResponse<Vec<HistoryEntry>>;

/// 格式化后的一条记录
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedHistoryRecord {
    /// 日期部分
    pub date: String,
    /// 时间部分
    pub time: String,
    /// 修改前显示值（空字符串表示“空”，由展示层渲染占位符）
    pub old_display: String,
    /// 修改后显示值
    pub new_display: String,
}

/// 按字段分组的历史记录
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedHistoryGroup {
    /// 字段
    pub field_key: HistoryField,
    /// 字段显示名称
    pub display_name: &'static str,
    /// 图标标识
    pub icon: &'static str,
    /// 颜色标识
    pub color_token: &'static str,
    /// 渐变色标识
    pub gradient: &'static str,
    /// 记录（保持输入顺序）
    pub entries: Vec<FormattedHistoryRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_accepts_number_or_string() {
        let response: HistoryResponse = serde_json::from_str(
            r#"{"success": true, "data": [
                {"id": 7, "fieldName": "password", "oldValue": null, "newValue": "b", "changedAt": "2024-05-01 12:00:00"},
                {"id": "h-8", "fieldName": "secret", "oldValue": "a", "newValue": "b", "changedAt": "2024-05-01 12:00:01"}
            ]}"#,
        )
        .unwrap();

        let entries = response.into_data().unwrap();
        assert_eq!(entries[0].id, "7");
        assert_eq!(entries[0].old_value, "");
        assert_eq!(entries[1].id, "h-8");
    }
}
