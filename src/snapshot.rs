//! 通知快照 - 平台通知对象的只读视图
//!
//! 平台侧的状态栏通知在进入比对流程前被捕获为 `NotificationSnapshot`，
//! 附加字段（标题、正文、多行正文）归一化为 `NotificationExtras`。
//! 所有可选字符串使用 `Option<String>`：缺失等于缺失，缺失永不等于存在。

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 通知附加字段（平台 extras 的类型化视图）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationExtras {
    /// 标题字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 单段正文字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 多行正文字段（收件箱样式）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_lines: Option<Vec<String>>,
}

/// 通知快照
///
/// 快照只在单次比对期间被读取，本 crate 不创建、不修改、不销毁
/// 平台侧的通知对象。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSnapshot {
    /// 来源应用包名
    pub package_name: String,
    /// 槽位内的通知 ID
    pub id: i32,
    /// 槽位 tag（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// 发布时间（毫秒时间戳，只参与相等性比较）
    pub posted_at_ms: i64,
    /// ticker 文本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker_text: Option<String>,
    /// 附加字段
    #[serde(default)]
    pub extras: NotificationExtras,
}

impl NotificationSnapshot {
    /// 创建新的快照
    pub fn new(package_name: impl Into<String>, id: i32) -> Self {
        Self {
            package_name: package_name.into(),
            id,
            tag: None,
            posted_at_ms: 0,
            ticker_text: None,
            extras: NotificationExtras::default(),
        }
    }

    /// 设置 tag（链式调用）
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// 设置发布时间（链式调用）
    pub fn with_posted_at_ms(mut self, posted_at_ms: i64) -> Self {
        self.posted_at_ms = posted_at_ms;
        self
    }

    /// 设置 ticker 文本（链式调用）
    pub fn with_ticker_text(mut self, ticker: impl Into<String>) -> Self {
        self.ticker_text = Some(ticker.into());
        self
    }

    /// 设置标题（链式调用）
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.extras.title = Some(title.into());
        self
    }

    /// 设置单段正文（链式调用）
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.extras.text = Some(text.into());
        self
    }

    /// 设置多行正文（链式调用）
    pub fn with_text_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.text_lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// 标题字段
    pub fn title(&self) -> Option<&str> {
        self.extras.title.as_deref()
    }

    /// 单段正文字段
    pub fn text(&self) -> Option<&str> {
        self.extras.text.as_deref()
    }

    /// 多行正文字段
    pub fn text_lines(&self) -> Option<&[String]> {
        self.extras.text_lines.as_deref()
    }

    /// ticker 文本
    pub fn ticker(&self) -> Option<&str> {
        self.ticker_text.as_deref()
    }

    /// 发布时间转为 UTC 时刻（仅用于展示，比对只看原始毫秒值）
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.posted_at_ms).single()
    }

    /// 从 JSON 字符串解析快照
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("解析通知快照 JSON 失败")
    }

    /// 从 JSON 文件读取快照
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取快照文件失败: {}", path.display()))?;
        Self::from_json(&content)
    }
}
