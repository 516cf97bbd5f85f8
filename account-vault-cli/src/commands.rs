//! Subcommand handlers and plain-text rendering.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use account_vault_app::adapters::MemoryAccountStore;
use account_vault_app::config::{ConfigService, FileConfigService, ViewConfig};
use account_vault_app::{AppState, AppStateBuilder};
use account_vault_core::account_list::list_page;
use account_vault_core::pagination::page_window;
use account_vault_core::registry::Language;
use account_vault_core::totp::{generate_current, TotpCode};
use account_vault_core::traits::{HistorySource, ImportSink};
use account_vault_core::types::{
    Account, ActivationStatus, BatchImportReport, ImportPreview, PageMarker, PaginatedResponse,
};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::cli::Cli;

/// Loads the config file and applies the `--lang` override.
pub fn load_config(config: Option<PathBuf>, lang: Option<&str>) -> Result<ViewConfig> {
    let mut view = match config.or_else(FileConfigService::default_path) {
        Some(path) => FileConfigService::new(path).load()?,
        None => ViewConfig::default(),
    };

    if let Some(code) = lang {
        view.language =
            Language::from_code(code).ok_or_else(|| anyhow!("unsupported language: {code}"))?;
    }
    Ok(view)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn build_state(store: &Arc<MemoryAccountStore>, config: ViewConfig) -> Result<AppState> {
    let state = AppStateBuilder::new()
        .history_source(Arc::clone(store) as Arc<dyn HistorySource>)
        .import_sink(Arc::clone(store) as Arc<dyn ImportSink>)
        .config(config)
        .build()?;
    Ok(state)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ===== preview =====

pub fn preview(cli: &Cli, config: ViewConfig, input: &str) -> Result<()> {
    let text = read_input(input)?;
    let store = Arc::new(MemoryAccountStore::new());
    let preview = build_state(&store, config)?.import_service.preview_batch(&text);

    tracing::info!(
        "Parsed {} lines: {} valid, {} invalid",
        preview.candidates.len(),
        preview.valid_count,
        preview.invalid_count
    );

    if cli.json {
        print_json(&preview)
    } else {
        print!("{}", render_preview(&preview));
        Ok(())
    }
}

fn render_preview(preview: &ImportPreview) -> String {
    let mut out = String::new();
    for (i, c) in preview.candidates.iter().enumerate() {
        let mark = if c.is_importable() { "" } else { "  [invalid]" };
        let _ = writeln!(
            out,
            "{:>3}. {} | {} | {} | {} | {}{mark}",
            i + 1,
            c.email,
            c.password,
            c.recovery,
            c.secret,
            c.remark
        );
    }
    let _ = writeln!(
        out,
        "valid: {}, invalid: {}",
        preview.valid_count, preview.invalid_count
    );
    out
}

// ===== page-window =====

pub fn page_window_cmd(
    cli: &Cli,
    config: &ViewConfig,
    current: u32,
    total: u32,
    max_visible: Option<u32>,
) -> Result<()> {
    let markers = page_window(
        current,
        total,
        max_visible.unwrap_or(config.max_visible_pages),
    );
    if cli.json {
        print_json(&markers)
    } else {
        println!("{}", render_markers(&markers));
        Ok(())
    }
}

fn render_markers(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// ===== import =====

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportOutput {
    report: BatchImportReport,
    accounts: PaginatedResponse<Account>,
    pages: Vec<PageMarker>,
}

pub async fn import(
    cli: &Cli,
    config: ViewConfig,
    input: &str,
    page: u32,
    search: &str,
) -> Result<()> {
    let text = read_input(input)?;
    let store = Arc::new(MemoryAccountStore::new());
    let state = build_state(&store, config)?;

    let report = state.import_service.import_batch(&text).await?;

    let accounts = store.list_accounts().await;
    let listed = list_page(&accounts, search, state.pagination_params(page));
    let pages = state.page_window(listed.page, listed.total_pages);

    if cli.json {
        return print_json(&ImportOutput {
            report,
            accounts: listed,
            pages,
        });
    }

    println!(
        "imported: {}, rejected: {}, skipped: {}",
        report.result.success_count, report.result.failed_count, report.skipped_count
    );
    for email in &report.result.failed_emails {
        println!("  rejected {email}");
    }
    println!();
    print!("{}", render_accounts(&listed, state.config.language));
    println!("{}", render_markers(&pages));
    Ok(())
}

fn render_accounts(page: &PaginatedResponse<Account>, language: Language) -> String {
    let mut out = String::new();
    for account in &page.items {
        let status = match account.status {
            ActivationStatus::Pro => "pro",
            ActivationStatus::Inactive => "inactive",
        };
        let _ = writeln!(
            out,
            "{:>4}  {}  {}  {}  {}",
            account.id,
            account.email,
            status,
            account.sold_status.label(language),
            account.remark
        );
    }
    let _ = writeln!(
        out,
        "page {}/{} ({} accounts)",
        page.page, page.total_pages, page.total_count
    );
    out
}

// ===== totp =====

pub fn totp(cli: &Cli, secret: &str) -> Result<()> {
    let current = generate_current(secret)?;
    if cli.json {
        print_json(&current)
    } else {
        println!("{}", render_totp(&current));
        Ok(())
    }
}

fn render_totp(current: &TotpCode) -> String {
    format!("{} ({}s left)", current.code, current.remaining_seconds)
}
