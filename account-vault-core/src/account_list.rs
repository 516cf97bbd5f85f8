//! 账户列表视图：搜索过滤 + 分页

use crate::pagination::paginate;
use crate::types::{Account, PaginatedResponse, PaginationParams};

/// 按关键词过滤账户
///
/// 关键词对邮箱或备注做不区分大小写的子串匹配，空关键词返回全部。
/// 结果按创建时间升序排列，时间相同时保持原顺序。
#[must_use]
pub fn filter_accounts(accounts: &[Account], search: &str) -> Vec<Account> {
    let needle = search.trim().to_lowercase();
    let mut matched: Vec<Account> = accounts
        .iter()
        .filter(|account| {
            needle.is_empty()
                || account.email.to_lowercase().contains(&needle)
                || account.remark.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    matched.sort_by_key(|account| account.created_at);
    matched
}

/// 过滤后取一页
#[must_use]
pub fn list_page(
    accounts: &[Account],
    search: &str,
    params: PaginationParams,
) -> PaginatedResponse<Account> {
    paginate(&filter_accounts(accounts, search), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivationStatus, SoldStatus};
    use chrono::NaiveDate;

    fn account(id: u64, email: &str, remark: &str, day: u32) -> Account {
        Account {
            id,
            email: email.to_string(),
            password: "p".to_string(),
            recovery: String::new(),
            secret: String::new(),
            remark: remark.to_string(),
            status: ActivationStatus::Inactive,
            sold_status: SoldStatus::Unsold,
            created_at: NaiveDate::from_ymd_opt(2024, 5, day)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
        }
    }

    #[test]
    fn matches_email_or_remark_case_insensitive() {
        let accounts = [
            account(1, "Alice@x.com", "", 1),
            account(2, "bob@x.com", "VIP buyer", 2),
            account(3, "carol@y.com", "", 3),
        ];
        let ids = |search: &str| {
            filter_accounts(&accounts, search)
                .iter()
                .map(|a| a.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(ids("alice"), [1]);
        assert_eq!(ids("vip"), [2]);
        assert_eq!(ids("x.com"), [1, 2]);
        assert_eq!(ids(""), [1, 2, 3]);
        assert!(ids("nobody").is_empty());
    }

    #[test]
    fn ordered_by_creation_time() {
        let accounts = [
            account(1, "late@x.com", "", 9),
            account(2, "early@x.com", "", 1),
            account(3, "tie@x.com", "", 9),
        ];
        let ids: Vec<_> = filter_accounts(&accounts, "").iter().map(|a| a.id).collect();
        assert_eq!(ids, [2, 1, 3]);
    }

    #[test]
    fn list_page_applies_filter_before_paging() {
        let accounts: Vec<_> = (1..=12)
            .map(|i| account(u64::from(i), &format!("user{i}@x.com"), "", i))
            .collect();
        let page = list_page(&accounts, "user1", PaginationParams { page: 1, page_size: 2 });
        // user1, user10, user11, user12
        assert_eq!(page.total_count, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.iter().map(|a| a.id).collect::<Vec<_>>(), [1, 10]);
    }
}
