//! 账户相关类型定义

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::registry::Language;

/// 账户开启状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    /// 已开启
    Pro,
    /// 未开启（导入账户的默认状态）
    #[default]
    Inactive,
}

impl ActivationStatus {
    /// 切换后的状态
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pro => Self::Inactive,
            Self::Inactive => Self::Pro,
        }
    }
}

/// 出售状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoldStatus {
    /// 已售出
    Sold,
    /// 未售出
    #[default]
    Unsold,
}

impl SoldStatus {
    /// 存储中使用的原始值
    #[must_use]
    pub fn as_raw(self) -> &'static str {
        match self {
            Self::Sold => "sold",
            Self::Unsold => "unsold",
        }
    }

    /// 从原始值解析，不认识的值返回 `None`
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "sold" => Some(Self::Sold),
            "unsold" => Some(Self::Unsold),
            _ => None,
        }
    }

    /// 显示标签
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Sold, Language::ZhCn) => "已售出",
            (Self::Unsold, Language::ZhCn) => "未售出",
            (Self::Sold, Language::EnUs) => "Sold",
            (Self::Unsold, Language::EnUs) => "Unsold",
        }
    }

    /// 切换后的状态
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Sold => Self::Unsold,
            Self::Unsold => Self::Sold,
        }
    }
}

/// 账户信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// 账户 ID
    pub id: u64,
    /// 登录邮箱（唯一）
    pub email: String,
    /// 登录密码
    pub password: String,
    /// 恢复邮箱
    #[serde(default)]
    pub recovery: String,
    /// 2FA TOTP 密钥
    #[serde(default)]
    pub secret: String,
    /// 备注
    #[serde(default)]
    pub remark: String,
    /// 开启状态
    #[serde(default)]
    pub status: ActivationStatus,
    /// 出售状态
    #[serde(default)]
    pub sold_status: SoldStatus,
    /// 创建时间
    #[serde(with = "crate::utils::datetime")]
    pub created_at: NaiveDateTime,
}

/// 更新账户请求（部分更新）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivationStatus>,
}
