//! 2FA 验证码
//!
//! 由账户保存的 Base32 密钥计算当前 TOTP 验证码（RFC 6238：HMAC-SHA1，6 位，30 秒步长）。

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;

use crate::error::{CoreError, CoreResult};
use crate::utils::text::strip_all_whitespace;

type HmacSha1 = Hmac<Sha1>;

/// 验证码有效期（秒）
pub const TOTP_STEP_SECS: u64 = 30;
/// 验证码位数
const TOTP_DIGITS: u32 = 6;

/// 当前验证码及其剩余有效时间
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotpCode {
    /// 6 位数字验证码
    pub code: String,
    /// 剩余有效秒数（1-30）
    pub remaining_seconds: u64,
}

/// 去掉空白并转大写
#[must_use]
pub fn normalize_secret(secret: &str) -> String {
    strip_all_whitespace(secret).to_uppercase()
}

/// RFC 4648 Base32 解码，忽略末尾的 `=` 填充
fn decode_base32(encoded: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer: u64 = 0;
    let mut bits = 0u32;

    for c in encoded.trim_end_matches('=').chars() {
        let value = match c {
            'A'..='Z' => u64::from(c) - u64::from('A'),
            '2'..='7' => u64::from(c) - u64::from('2') + 26,
            _ => return None,
        };
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(u8::try_from(buffer >> bits).ok()?);
            buffer &= (1 << bits) - 1;
        }
    }

    (!out.is_empty()).then_some(out)
}

/// 当前时间步的剩余秒数
#[must_use]
pub fn remaining_seconds_at(unix_secs: u64) -> u64 {
    TOTP_STEP_SECS - unix_secs % TOTP_STEP_SECS
}

/// 计算指定时刻的验证码
///
/// # Errors
/// 密钥为空或不是合法 Base32 时返回 `CoreError::ValidationError`。
pub fn generate_at(secret: &str, unix_secs: u64) -> CoreResult<TotpCode> {
    let normalized = normalize_secret(secret);
    if normalized.is_empty() {
        return Err(CoreError::ValidationError("TOTP 密钥不能为空".to_string()));
    }
    let key = decode_base32(&normalized)
        .ok_or_else(|| CoreError::ValidationError("无效的 TOTP 密钥".to_string()))?;

    let mut mac = HmacSha1::new_from_slice(&key)
        .map_err(|e| CoreError::ValidationError(format!("无效的 TOTP 密钥: {e}")))?;
    mac.update(&(unix_secs / TOTP_STEP_SECS).to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // RFC 4226 dynamic truncation
    let offset = usize::from(digest[digest.len() - 1] & 0x0f);
    let binary = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);
    let code = binary % 10_u32.pow(TOTP_DIGITS);

    Ok(TotpCode {
        code: format!("{code:06}"),
        remaining_seconds: remaining_seconds_at(unix_secs),
    })
}

/// 计算当前验证码
///
/// # Errors
/// 同 [`generate_at`]。
pub fn generate_current(secret: &str) -> CoreResult<TotpCode> {
    let now = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default();
    generate_at(secret, now)
}

/// 校验用户输入的验证码（仅当前时间步）
#[must_use]
pub fn verify_at(secret: &str, code: &str, unix_secs: u64) -> bool {
    !code.is_empty() && generate_at(secret, unix_secs).is_ok_and(|current| current.code == code.trim())
}
