//! 字段注册表
//!
//! 被跟踪字段到显示元数据（名称、图标、颜色）的静态映射，以及出售状态值的显示标签。
//! 注册表只服务于展示层：表外的字段名或值原样透传，不做校验。

use serde::{Deserialize, Serialize};

use crate::types::SoldStatus;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 简体中文（中国）
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// 英语（美国）
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::ZhCn, Language::EnUs]
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "zh-CN" | "zh" => Some(Language::ZhCn),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }
}

/// 有修改历史的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryField {
    Password,
    Secret,
    Recovery,
    SoldStatus,
}

impl HistoryField {
    /// 声明顺序，也是分组输出顺序
    pub const ALL: [HistoryField; 4] = [
        HistoryField::Password,
        HistoryField::Secret,
        HistoryField::Recovery,
        HistoryField::SoldStatus,
    ];

    /// 存储中使用的字段名
    #[must_use]
    pub fn key(self) -> &'static str {
        self.meta().key
    }

    /// 按字段名精确匹配
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// 在 `ALL` 中的位置
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Password => 0,
            Self::Secret => 1,
            Self::Recovery => 2,
            Self::SoldStatus => 3,
        }
    }

    /// 显示元数据
    #[must_use]
    pub fn meta(self) -> &'static FieldMeta {
        &FIELD_REGISTRY[self.index()]
    }

    /// 显示名称
    #[must_use]
    pub fn display_name(self, language: Language) -> &'static str {
        let meta = self.meta();
        match language {
            Language::ZhCn => meta.name_zh,
            Language::EnUs => meta.name_en,
        }
    }

    /// 该字段的值是否需要经过出售状态标签转换
    #[must_use]
    pub fn translates_values(self) -> bool {
        matches!(self, Self::SoldStatus)
    }
}

/// 单个字段的显示元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    pub key: &'static str,
    pub name_zh: &'static str,
    pub name_en: &'static str,
    pub icon: &'static str,
    pub color_token: &'static str,
    pub gradient: &'static str,
}

/// 按 `HistoryField::ALL` 顺序排列
static FIELD_REGISTRY: [FieldMeta; 4] = [
    FieldMeta {
        key: "password",
        name_zh: "密码",
        name_en: "Password",
        icon: "key",
        color_token: "green",
        gradient: "from-green-500 to-emerald-600",
    },
    FieldMeta {
        key: "secret",
        name_zh: "2FA密钥",
        name_en: "2FA Secret",
        icon: "shield",
        color_token: "blue",
        gradient: "from-blue-500 to-indigo-600",
    },
    FieldMeta {
        key: "recovery",
        name_zh: "恢复邮箱",
        name_en: "Recovery Email",
        icon: "mail",
        color_token: "orange",
        gradient: "from-orange-500 to-amber-600",
    },
    FieldMeta {
        key: "sold_status",
        name_zh: "售出状态",
        name_en: "Sold Status",
        icon: "history",
        color_token: "purple",
        gradient: "from-purple-500 to-pink-600",
    },
];

/// 字段显示名称，未登记的字段名原样返回
#[must_use]
pub fn field_display_name(raw: &str, language: Language) -> &str {
    HistoryField::from_key(raw).map_or(raw, |field| field.display_name(language))
}

/// 出售状态显示标签，未登记的值原样返回
#[must_use]
pub fn sold_status_label(raw: &str, language: Language) -> &str {
    SoldStatus::from_raw(raw).map_or(raw, |status| status.label(language))
}
